//! Connection settings for the category store
//!
//! A request waits at most `acquire_timeout` for a pooled connection; past
//! that the store error surfaces to the client as a 500.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default wait for a free connection, in seconds.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Pool sizing and wait limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

impl PoolSettings {
    /// sqlx options for these settings. A zero connection limit is raised to one.
    pub fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections.max(1))
            .acquire_timeout(self.acquire_timeout)
    }

    /// Open the pool.
    pub async fn connect(&self, database_url: &str) -> Result<PgPool, sqlx::Error> {
        tracing::debug!(
            max_connections = self.max_connections,
            acquire_timeout_ms = self.acquire_timeout.as_millis() as u64,
            "connecting to database"
        );

        self.options().connect(database_url).await
    }
}
