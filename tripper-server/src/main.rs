#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(clippy::pedantic)]

//! Entry point for the Tripper SPA host.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::config::server::Config;
use std::error::Error;
use std::path::PathBuf;

mod middleware;
mod routes;
mod server;
mod tracer;

#[cfg(test)]
mod main_tests;

/// Main CLI structure for the Tripper server
#[derive(Parser)]
#[command(name = "Tripper server")]
#[command(about = "Serves the Tripper web app behind the auth gate", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for the Tripper CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start the server
    Serve {
        /// The port number to bind the server to (e.g., 8080). Example usage: `--port 8080`
        #[arg(
            long,
            short,
            help = "The port number to bind the server to (e.g., 8080). Example usage: `--port 8080`"
        )]
        port: u16,

        /// Path to the configuration file (optional)
        #[arg(
            long,
            short,
            help = "Path to the configuration file (YAML, JSON, or TOML). If not provided, defaults will be used."
        )]
        config: Option<PathBuf>,
    },
}

/// Loads `.env` and parses the command line.
#[must_use]
pub fn initialize_cli() -> Cli {
    dotenv().ok();
    Cli::parse()
}

/// Handles the serve command by loading configuration and starting the server.
///
/// # Errors
/// Returns an error if configuration loading or server startup fails.
pub async fn handle_serve_command(
    port: u16,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let resolved_config = Config::load_config(config, Some(port))?;
    server::run(resolved_config).await?;
    Ok(())
}

/// Main application entry point.
///
/// # Errors
/// Returns an error if the application fails to initialize or run.
pub async fn run_app() -> Result<(), Box<dyn Error>> {
    let cli = initialize_cli();

    match cli.command {
        Commands::Serve { port, config } => {
            handle_serve_command(port, config).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    run_app().await
}
