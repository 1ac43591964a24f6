//! CATEGORIES command - List the categories in use.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, make_request, output};

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {}

#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Categories(pub Vec<String>);

impl HumanReadable for Categories {
    fn print_human(&self) {
        println!("{}", "Categories".green().bold());
        if self.0.is_empty() {
            println!("  {}", "(No categories)".dimmed());
        }
        for category in &self.0 {
            println!("  - {}", category);
        }
    }
}

/// Execute the categories command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: CategoriesArgs,
) -> Result<()> {
    let url = endpoint(base_url, "/api/notes/categories");
    let response: Categories = make_request(client.get(&url)).await?;
    output(&response, human)
}
