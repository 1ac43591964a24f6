//! REGISTER command - Create an account.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fieldnotes_core::UserId;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, make_request, output};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Username (3-20 characters)
    pub username: String,

    /// Email address
    pub email: String,

    /// Password (6-20 characters)
    #[arg(long, env = "FIELDNOTES_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Response from registering.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub id: UserId,
}

impl HumanReadable for RegisterResponse {
    fn print_human(&self) {
        println!("{}", "Account created!".green().bold());
        println!();
        println!("  {} {}", "User ID:".cyan(), self.id);
        println!();
        println!("Run {} to sign in.", "fieldnotes login <username>".bold());
    }
}

/// Execute the register command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RegisterArgs,
) -> Result<()> {
    let url = endpoint(base_url, "/api/users/register");
    let body = RegisterRequest {
        username: &args.username,
        email: &args.email,
        password: &args.password,
    };

    let response: RegisterResponse = make_request(client.post(&url).json(&body)).await?;

    output(&response, human)
}
