//! LIST command - Page through your notes.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fieldnotes_core::{Note, PagedResult};
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, format_timestamp, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: i64,

    /// Notes per page (the server caps this at 100)
    #[arg(long, default_value_t = 10)]
    pub page_size: i64,

    /// Only notes in this category (exact, case-sensitive)
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery<'a> {
    page_number: i64,
    page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

/// One page of notes as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NotePage(pub PagedResult<Note>);

impl HumanReadable for NotePage {
    fn print_human(&self) {
        let page = &self.0;
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(80));

        if page.items.is_empty() {
            println!();
            println!("  {}", "(No notes)".dimmed());
        }

        for note in &page.items {
            println!();
            let category = note
                .category
                .as_deref()
                .map(|c| format!("[{}]", c))
                .unwrap_or_default();
            println!("  {} {}", truncate(&note.title, 60).bold(), category.yellow());
            println!("    {} {}", "ID:".cyan(), note.id);
            println!(
                "    {} {} by {}",
                "Updated:".cyan(),
                format_timestamp(&note.last_updated),
                note.last_updated_by
            );
        }

        println!();
        println!(
            "{}",
            format!(
                "Page {} of {} ({} notes total)",
                page.page_number,
                page.total_pages.max(1),
                page.total_count
            )
            .dimmed()
        );
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = endpoint(base_url, "/api/notes");
    let query = ListQuery {
        page_number: args.page,
        page_size: args.page_size,
        category: args.category.as_deref(),
    };

    let response: NotePage = make_request(client.get(&url).query(&query)).await?;

    output(&response, human)
}
