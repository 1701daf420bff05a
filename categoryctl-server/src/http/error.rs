//! API error types with IntoResponse
//!
//! Every error leaves the server as `{"error": "<message>"}` with the status
//! code picked here. This is the only place store errors are classified.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;

/// Message for ids that are not plain integers
pub const INVALID_CATEGORY_ID: &str = "Invalid category ID";

/// Message for lookups that matched no row
pub const CATEGORY_NOT_FOUND: &str = "Category not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Path or query value failed to parse (400)
    InvalidParameter { message: &'static str },

    /// Lookup by id matched nothing (404)
    NotFound { message: &'static str },

    /// Any other store failure (500, store text passed through)
    Store(StoreError),
}

impl ApiError {
    pub fn invalid_category_id() -> Self {
        Self::InvalidParameter {
            message: INVALID_CATEGORY_ID,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::InvalidParameter { message } | Self::NotFound { message } => message.to_owned(),
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                e.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound {
                message: CATEGORY_NOT_FOUND,
            },
            _ => Self::Store(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_parameter_is_400() {
        let response = ApiError::invalid_category_id().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid category ID" })
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(StoreError::NotFound { id: 999 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Category not found" })
        );
    }

    #[tokio::test]
    async fn store_error_is_500_with_raw_text() {
        let err = ApiError::from(StoreError::Backend("relation \"categories\" does not exist".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "relation \"categories\" does not exist" })
        );
    }
}
