//! Command-line client for Field Notes.
//!
//! Commands:
//! - register / login / logout: manage your account and stored token
//! - list / show: read notes, a page at a time or one by one
//! - create / update / delete: change notes
//! - categories: list the categories you have used
//!
//! Configuration via environment:
//! - FIELDNOTES_URL: Base URL of the server (default: http://localhost:3000)
//! - FIELDNOTES_TOKEN: Bearer token, overriding the stored one
//! - FIELDNOTES_TOKEN_FILE: Where `login` stores the token (default: ~/.fieldnotes/token)

mod commands;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{
    categories::CategoriesArgs, create::CreateArgs, delete::DeleteArgs, list::ListArgs,
    login::LoginArgs, logout::LogoutArgs, register::RegisterArgs, show::ShowArgs,
    update::UpdateArgs,
};

/// Field Notes CLI
///
/// Prints JSON by default so output can be piped into other tools.
/// Pass --human for formatted output.
#[derive(Parser)]
#[command(name = "fieldnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Field Notes server URL
    #[arg(
        long,
        env = "FIELDNOTES_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    /// Bearer token for authentication
    #[arg(long, env = "FIELDNOTES_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// File holding the token saved by `login`
    #[arg(long, env = "FIELDNOTES_TOKEN_FILE", global = true)]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register(RegisterArgs),

    /// Sign in and store the token
    Login(LoginArgs),

    /// Forget the stored token
    Logout(LogoutArgs),

    /// List notes, newest first
    List(ListArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Create a note
    Create(CreateArgs),

    /// Replace a note's contents
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// List the categories in use
    Categories(CategoriesArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let token_file = cli
        .token_file
        .unwrap_or_else(session::default_token_path);

    let token = match cli.token {
        Some(token) => Some(token),
        None => session::load_token(&token_file)?,
    };
    let client = commands::build_client(token.as_deref())?;
    let url = cli.url.as_str();
    let human = cli.human;

    match cli.command {
        Commands::Register(args) => commands::register::execute(&client, url, human, args).await,
        Commands::Login(args) => {
            commands::login::execute(&client, url, human, &token_file, args).await
        }
        Commands::Logout(args) => commands::logout::execute(human, &token_file, args),
        Commands::List(args) => commands::list::execute(&client, url, human, args).await,
        Commands::Show(args) => commands::show::execute(&client, url, human, args).await,
        Commands::Create(args) => commands::create::execute(&client, url, human, args).await,
        Commands::Update(args) => commands::update::execute(&client, url, human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, url, human, args).await,
        Commands::Categories(args) => {
            commands::categories::execute(&client, url, human, args).await
        }
    }
}
