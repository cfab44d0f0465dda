//! CLI module for the Exercise Catalog API
//!
//! - `serve`: run the HTTP server (default)
//! - `issue-key`: issue one API key into the key store and print it

pub mod issue_key;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Exercise Catalog API - searchable exercise records behind API keys
#[derive(Parser)]
#[command(name = "exercise-catalog-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default mode)
    Serve,

    /// Issue a new API key and print it
    IssueKey,
}

impl Cli {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Serve)
    }
}

/// Load `.env` and layered configuration, then install logging
///
/// A configuration that fails to load falls back to defaults; the error is
/// reported once logging is up.
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    config
}
