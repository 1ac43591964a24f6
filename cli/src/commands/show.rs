//! SHOW command - Print one note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fieldnotes_core::{NoteDetails, NoteId};
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, format_timestamp, make_request, output};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Note ID
    pub id: NoteId,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ShownNote(pub NoteDetails);

impl HumanReadable for ShownNote {
    fn print_human(&self) {
        let note = &self.0;
        println!("{}", note.title.bold());
        println!("{}", "=".repeat(80));
        println!("  {} {}", "ID:".cyan(), note.id);
        if let Some(category) = &note.category {
            println!("  {} {}", "Category:".cyan(), category);
        }
        println!(
            "  {} {} by {}",
            "Updated:".cyan(),
            format_timestamp(&note.last_updated),
            note.last_updated_by
        );
        println!();
        match &note.description {
            Some(description) => println!("{}", description),
            None => println!("{}", "(No description)".dimmed()),
        }
    }
}

/// Execute the show command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ShowArgs,
) -> Result<()> {
    let url = endpoint(base_url, &format!("/api/notes/{}", args.id));
    let response: ShownNote = make_request(client.get(&url)).await?;
    output(&response, human)
}
