//! Domain models
//!
//! Request input is validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod pagination;
pub mod validation;

pub use category::{parse_category_id, Category, NewCategory};
pub use pagination::{ListParams, Pagination};
pub use validation::ValidationError;
