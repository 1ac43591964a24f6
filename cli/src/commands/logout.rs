//! LOGOUT command - Forget the stored token.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, output};
use crate::session;

/// Arguments for the logout command.
#[derive(Args)]
pub struct LogoutArgs {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutOutput {
    pub removed: bool,
    pub token_file: String,
}

impl HumanReadable for LogoutOutput {
    fn print_human(&self) {
        if self.removed {
            println!("{}", "Logged out.".green().bold());
        } else {
            println!("{}", "Not logged in.".dimmed());
        }
    }
}

/// Execute the logout command. Tokens are stateless, so nothing is sent to the server.
pub fn execute(human: bool, token_file: &Path, _args: LogoutArgs) -> Result<()> {
    let removed = session::clear_token(token_file)
        .with_context(|| format!("failed to remove {}", token_file.display()))?;

    output(
        &LogoutOutput {
            removed,
            token_file: token_file.display().to_string(),
        },
        human,
    )
}
