//! Schema bootstrap for the `categories` table
//!
//! The table normally exists already; this only creates it when missing.

use sqlx::PgPool;

const CREATE_CATEGORIES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id BIGSERIAL PRIMARY KEY,
    description TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)
"#;

/// Create the `categories` table if it does not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring categories table exists");

    sqlx::query(CREATE_CATEGORIES).execute(pool).await?;
    Ok(())
}
