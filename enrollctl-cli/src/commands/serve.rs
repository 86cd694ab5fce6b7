//! HTTP server command
//!
//! Connects to the database, creates the tables if needed, and serves the
//! enrollment API until Ctrl+C / SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use enrollctl_server::db::{create_pool_with_options, run_migrations};
use enrollctl_server::run_server;

use crate::config::EnrollctlConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "ENROLLCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL, e.g. sqlite://enrollctl.db (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &EnrollctlConfig) -> Result<()> {
    let database_url = config.database_url(args.database_url);
    let max_connections = config.max_connections(args.max_connections);
    let server_config = config.server_config(args.bind, args.cors_permissive);

    tracing::info!(bind = %server_config.bind_addr, "starting enrollctl server");

    let pool = create_pool_with_options(&database_url, max_connections)
        .await
        .with_context(|| format!("Failed to create database pool for {}", database_url))?;

    run_migrations(&pool)
        .await
        .context("Failed to create database tables")?;

    // Blocks until shutdown
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
