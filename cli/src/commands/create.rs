//! CREATE command - Add a note.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fieldnotes_core::NoteId;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, make_request, output, read_description};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Title of the note
    pub title: String,

    /// Markdown body
    #[arg(long, short = 'd', conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the markdown body from a file
    #[arg(long)]
    pub description_file: Option<PathBuf>,

    /// Category tag
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    title: String,
    description: Option<String>,
    category: Option<String>,
}

/// Response from creating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateNoteResponse {
    pub id: NoteId,
}

impl HumanReadable for CreateNoteResponse {
    fn print_human(&self) {
        println!("{}", "Note created!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
    }
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = endpoint(base_url, "/api/notes");
    let body = CreateNoteRequest {
        title: args.title,
        description: read_description(args.description, args.description_file.as_deref())?,
        category: args.category,
    };

    let response: CreateNoteResponse = make_request(client.post(&url).json(&body)).await?;

    output(&response, human)
}
