//! FYP Portal CLI - Command-line interface for the FYP dashboard core
//!
//! Usage:
//!   fyp-portal                          - Start interactive mode
//!   fyp-portal routes                   - Print the route table
//!   fyp-portal menu --role <role>       - Print a role's navigation menu
//!   fyp-portal check --path <p> [--role <r>]  - Print the guard decision

use clap::{Parser, Subcommand};
use cli::commands::{CheckCommand, MenuCommand, RoutesCommand};
use cli::interactive::InteractivePortal;

#[derive(Parser)]
#[command(name = "fyp-portal")]
#[command(about = "FYP Portal - role-based dashboard access core")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes(RoutesCommand),
    /// Print a role's navigation menu
    Menu(MenuCommand),
    /// Print the guard decision for a path
    Check(CheckCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Routes(cmd)) => cmd.run(cli.json),
        Some(Commands::Menu(cmd)) => cmd.run(cli.json),
        Some(Commands::Check(cmd)) => cmd.run(cli.json),
        None => {
            // No subcommand - start interactive mode
            tracing::debug!("launching interactive mode");
            let mut interactive = InteractivePortal::new();
            interactive.run().await
        }
    }
}
