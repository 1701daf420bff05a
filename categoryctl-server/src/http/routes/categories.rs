//! Category endpoints
//!
//! - `GET    /categories`      list with `count`/`start` pagination
//! - `POST   /categories`      create from form field `description`
//! - `GET    /category/{id}`   fetch one
//! - `PUT    /category/{id}`   replace description
//! - `DELETE /category/{id}`   hard delete

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{DescriptionForm, ValidCategoryId};
use crate::http::server::AppState;
use crate::models::category::now;
use crate::models::{Category, ListParams, NewCategory, Pagination};

/// Category response
///
/// Updates never fail on a missing row. They echo the requested id and
/// description, and `created_at` serializes as `null` because no stored row
/// supplied it.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub description: String,
    /// `None` only when an update matched no row, so the creation time is unknown
    pub created_at: Option<String>,
    pub updated_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            description: c.description,
            created_at: Some(timestamp(c.created_at)),
            updated_at: timestamp(c.updated_at),
        }
    }
}

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

fn timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// GET /categories - list categories
async fn list_categories(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let page = Pagination::from(ListParams::from_query(query.as_deref()));
    let categories = state.store.list(page).await?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// GET /category/{id} - get a single category
async fn get_category(
    State(state): State<AppState>,
    ValidCategoryId(id): ValidCategoryId,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = state.store.get_by_id(id).await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// POST /categories - create a category
async fn create_category(
    State(state): State<AppState>,
    DescriptionForm(description): DescriptionForm,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let new = NewCategory::new(description);
    let id = state.store.create(&new).await?;
    tracing::debug!(id, "created category");

    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse::from(new.with_id(id))),
    ))
}

/// PUT /category/{id} - update a category's description
///
/// An id with no row still answers 200, echoing what was sent.
async fn update_category(
    State(state): State<AppState>,
    ValidCategoryId(id): ValidCategoryId,
    DescriptionForm(description): DescriptionForm,
) -> Result<Json<CategoryResponse>, ApiError> {
    let updated_at = now();
    let response = match state.store.update(id, &description, updated_at).await? {
        Some(category) => CategoryResponse::from(category),
        None => {
            tracing::debug!(id, "update matched no category");
            CategoryResponse {
                id,
                description,
                created_at: None,
                updated_at: timestamp(updated_at),
            }
        }
    };

    Ok(Json(response))
}

/// DELETE /category/{id} - delete a category
///
/// Deleting an id with no row still answers 200.
async fn delete_category(
    State(state): State<AppState>,
    ValidCategoryId(id): ValidCategoryId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let removed = state.store.delete(id).await?;
    tracing::debug!(id, removed, "deleted category");

    Ok(Json(DeleteResponse { result: "success" }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/category/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_are_rfc3339_micros() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(timestamp(t), "2024-03-01T12:30:00.000000Z");
    }

    #[test]
    fn response_from_category() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let response = CategoryResponse::from(Category {
            id: 1,
            description: "Electronics".into(),
            created_at: t,
            updated_at: t,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["description"], "Electronics");
        assert_eq!(json["created_at"], json["updated_at"]);
    }
}
