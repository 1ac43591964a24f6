//! UPDATE command - Replace a note's title, body and category.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fieldnotes_core::{Note, NoteId};
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, format_timestamp, make_request, output, read_description};

/// Arguments for the update command.
///
/// The update is a full replacement: leaving out `--description` or
/// `--category` clears that field.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID
    pub id: NoteId,

    /// New title
    pub title: String,

    /// New markdown body
    #[arg(long, short = 'd', conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the new markdown body from a file
    #[arg(long)]
    pub description_file: Option<PathBuf>,

    /// New category tag
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

#[derive(Serialize)]
struct UpdateNoteRequest {
    id: NoteId,
    title: String,
    description: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UpdatedNote(pub Note);

impl HumanReadable for UpdatedNote {
    fn print_human(&self) {
        let note = &self.0;
        println!("{}", "Note updated!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), note.id);
        println!("  {} {}", "Title:".cyan(), note.title);
        println!(
            "  {} {}",
            "Category:".cyan(),
            note.category.as_deref().unwrap_or("-")
        );
        println!("  {} {}", "Updated:".cyan(), format_timestamp(&note.last_updated));
    }
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = endpoint(base_url, "/api/notes");
    let body = UpdateNoteRequest {
        id: args.id,
        title: args.title,
        description: read_description(args.description, args.description_file.as_deref())?,
        category: args.category,
    };

    let response: UpdatedNote = make_request(client.put(&url).json(&body)).await?;

    output(&response, human)
}
