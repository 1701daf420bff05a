//! categoryctl-server: category CRUD over HTTP
//!
//! Exposes a single `categories` table as a small JSON API. Requests are
//! validated in the `http` layer and persisted through a `db::CategoryStore`.

pub mod db;
pub mod http;
pub mod models;

pub use db::{CategoryStore, MemoryCategoryStore, PgCategoryStore, StoreError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Category, NewCategory, Pagination};
