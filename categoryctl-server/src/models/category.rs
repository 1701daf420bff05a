//! Category entity

use chrono::{DateTime, SubsecRound, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// Category row as stored in the `categories` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category that has not been inserted yet (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewCategory {
    /// Build a category stamped with the current time for both timestamps.
    pub fn new(description: impl Into<String>) -> Self {
        let now = now();
        Self {
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the store-generated id.
    pub fn with_id(self, id: i64) -> Category {
        Category {
            id,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Current time truncated to microseconds.
///
/// PostgreSQL keeps microsecond precision, so a timestamp taken here reads back
/// unchanged after a round trip through the store.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Parse a category id from a path segment.
///
/// Only plain decimal digits are accepted, so signs, whitespace and values that
/// overflow `i64` are all rejected.
pub fn parse_category_id(raw: &str) -> Result<i64, ValidationError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "category id",
            reason: "must be a non-negative integer",
        });
    }

    raw.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field: "category id",
        reason: "out of range",
    })
}
