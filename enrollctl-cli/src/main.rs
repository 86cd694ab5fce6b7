//! enrollctl CLI - student enrollment service
//!
//! Entry point for the `enrollctl` binary:
//! - `serve`: run the HTTP API (CRUD + payload/CSV ingest)
//! - `import`: load a CSV file straight into the database

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::EnrollctlConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "enrollctl",
    author,
    version,
    about = "Student, subject and enrollment API backed by SQLite"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Path to a TOML config file (default: ./enrollctl.toml if present)
    #[arg(long, global = true, env = "ENROLLCTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),

    /// Import enrollments from a CSV file (one transaction for the whole file)
    Import(commands::import::ImportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    let config = EnrollctlConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Import(args) => commands::run_import(args, &config).await?,
    }

    Ok(())
}
