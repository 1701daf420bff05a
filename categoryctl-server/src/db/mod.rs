//! Database layer - connection pool and category stores
//!
//! - `CategoryStore` is the seam between handlers and persistence
//! - `PgCategoryStore` talks to PostgreSQL with parameterized statements
//! - `MemoryCategoryStore` keeps rows in process for tests

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use memory::MemoryCategoryStore;
pub use pool::PoolSettings;
pub use postgres::PgCategoryStore;
pub use schema::ensure_schema;
pub use store::{CategoryStore, StoreError};
