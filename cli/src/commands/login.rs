//! LOGIN command - Sign in and store the bearer token.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use fieldnotes_core::UserId;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, format_timestamp, make_request, output};
use crate::session;

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Username
    pub username: String,

    /// Password
    #[arg(long, env = "FIELDNOTES_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Response from logging in.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: UserId,
    pub username: String,
}

/// What the command reports after saving the token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput {
    pub user_id: UserId,
    pub username: String,
    pub expires_at: DateTime<Utc>,
    pub token_file: String,
}

impl HumanReadable for LoginOutput {
    fn print_human(&self) {
        println!("{} {}", "Logged in as".green().bold(), self.username.bold());
        println!();
        println!("  {} {}", "User ID:".cyan(), self.user_id);
        println!("  {} {}", "Expires:".cyan(), format_timestamp(&self.expires_at));
        println!("  {} {}", "Token saved to:".cyan(), self.token_file);
    }
}

/// Execute the login command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    token_file: &Path,
    args: LoginArgs,
) -> Result<()> {
    let url = endpoint(base_url, "/api/users/login");
    let body = LoginRequest {
        username: &args.username,
        password: &args.password,
    };

    let response: LoginResponse = make_request(client.post(&url).json(&body)).await?;

    session::save_token(token_file, &response.token)
        .with_context(|| format!("failed to write token to {}", token_file.display()))?;

    let result = LoginOutput {
        user_id: response.user_id,
        username: response.username,
        expires_at: response.expires_at,
        token_file: token_file.display().to_string(),
    };

    output(&result, human)
}
