//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the categories table if it does not exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let store = args.database.connect().await?;

    store
        .ensure_schema()
        .await
        .context("Failed to create categories table")?;

    tracing::info!("categories table is ready");
    Ok(())
}
