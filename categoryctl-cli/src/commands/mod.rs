//! Command implementations for categoryctl CLI

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use categoryctl_server::db::pool::{DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};
use categoryctl_server::db::{PgCategoryStore, PoolSettings};

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection options shared by commands that talk to PostgreSQL
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (also read from DATABASE_URL or .env)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum connections in the pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection before failing
    #[arg(long, default_value_t = DEFAULT_ACQUIRE_TIMEOUT_SECS)]
    pub acquire_timeout_secs: u64,
}

impl DatabaseArgs {
    pub fn url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }

    /// Connect the PostgreSQL category store.
    pub async fn connect(&self) -> Result<PgCategoryStore> {
        let url = self.url()?;
        PgCategoryStore::connect(url, &self.pool_settings())
            .await
            .context("Failed to create database pool")
    }
}
