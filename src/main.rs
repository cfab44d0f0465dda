use clap::Parser;
use exercise_catalog_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command() {
        Command::Serve => cli::serve::run().await,
        Command::IssueKey => cli::issue_key::run().await,
    }
}
