//! PostgreSQL category repository
//!
//! All statements are parameterized. Each operation is one autocommitted
//! round trip; there are no transactions and no retries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::pool::PoolSettings;
use super::schema;
use super::store::{CategoryStore, StoreError};
use crate::models::{Category, NewCategory, Pagination};

/// Category repository backed by a `PgPool`
#[derive(Debug, Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool with `settings` and wrap it.
    pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<Self, StoreError> {
        let pool = settings.connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Create the `categories` table when it is missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        schema::ensure_schema(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn list(&self, page: Pagination) -> Result<Vec<Category>, StoreError> {
        let rows: Vec<Category> = sqlx::query_as(
            r#"
            SELECT id, description, created_at, updated_at
            FROM categories
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, StoreError> {
        sqlx::query_as(
            r#"
            SELECT id, description, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, category: &NewCategory) -> Result<i64, StoreError> {
        // RETURNING hands back the generated id in the same round trip
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO categories (description, created_at, updated_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&category.description)
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(
        &self,
        id: i64,
        description: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Category>, StoreError> {
        let row: Option<Category> = sqlx::query_as(
            r#"
            UPDATE categories
            SET description = $1, updated_at = $2
            WHERE id = $3
            RETURNING id, description, created_at, updated_at
            "#,
        )
        .bind(description)
        .bind(updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
