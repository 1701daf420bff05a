//! HTTP server command
//!
//! Runs the category API on top of a PostgreSQL pool.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use categoryctl_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create the categories table before serving if it is missing
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting categoryctl server on {}", args.bind);

    let store = args.database.connect().await?;

    if args.migrate {
        store
            .ensure_schema()
            .await
            .context("Failed to create categories table")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(Arc::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
