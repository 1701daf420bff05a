//! Category store trait and error type
//!
//! Handlers only see `dyn CategoryStore`, so the PostgreSQL repository can be
//! swapped for the in-memory store in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{Category, NewCategory, Pagination};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Lookup by id matched zero rows
    #[error("category {id} not found")]
    NotFound { id: i64 },

    /// Anything the database driver reports (connectivity, constraints, SQL)
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Failure from a non-SQL backend
    #[error("{0}")]
    Backend(String),
}

/// Data access for categories.
///
/// Every method is a single statement against the store. Nothing is retried
/// and no method distinguishes "changed nothing" from "changed one row" except
/// through its return value.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Rows ordered by id, skipping `page.start` and returning at most `page.count`.
    async fn list(&self, page: Pagination) -> Result<Vec<Category>, StoreError>;

    /// Exactly one category, or `StoreError::NotFound`.
    async fn get_by_id(&self, id: i64) -> Result<Category, StoreError>;

    /// Insert and return the store-generated id.
    async fn create(&self, category: &NewCategory) -> Result<i64, StoreError>;

    /// Set `description` and `updated_at`.
    ///
    /// Returns the updated row, or `None` when no row has this id (not an error).
    async fn update(
        &self,
        id: i64,
        description: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Category>, StoreError>;

    /// Hard delete. Returns the number of rows removed; zero is not an error.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Cheap connectivity check for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
