//! Custom Axum extractors

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use super::error::ApiError;
use crate::models::parse_category_id;

/// Extract and validate a category id from path
pub struct ValidCategoryId(pub i64);

impl<S> FromRequestParts<S> for ValidCategoryId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_category_id())?;

        let id = parse_category_id(&raw).map_err(|e| {
            tracing::debug!(raw = %raw, "rejecting category id: {}", e);
            ApiError::invalid_category_id()
        })?;

        Ok(Self(id))
    }
}

/// The `description` field of a form-encoded body.
///
/// Never rejects. A body that can't be read or parsed is logged and treated as
/// empty. Body fields win over query-string fields of the same name, and a
/// missing field is the empty string.
pub struct DescriptionForm(pub String);

impl<S> FromRequest<S> for DescriptionForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);
        let mut fields = Vec::new();

        if is_form_encoded(req.headers()) {
            match Bytes::from_request(req, state).await {
                Ok(body) => fields.extend(parse_pairs(&body, "form")),
                Err(e) => tracing::warn!("Error reading form body: {}", e),
            }
        } else {
            tracing::debug!("request body is not form-encoded, ignoring it");
        }

        if let Some(query) = query {
            fields.extend(parse_pairs(query.as_bytes(), "query string"));
        }

        let description = fields
            .into_iter()
            .find(|(key, _)| key == "description")
            .map(|(_, value)| value)
            .unwrap_or_default();

        Ok(Self(description))
    }
}

/// Decode `key=value` pairs, dropping any pair with a bad percent escape.
fn parse_pairs(input: &[u8], source: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for segment in input.split(|&b| b == b'&').filter(|s| !s.is_empty()) {
        if !has_valid_escapes(segment) {
            tracing::warn!(
                "Error parsing {}: invalid URL escape in {:?}",
                source,
                String::from_utf8_lossy(segment)
            );
            continue;
        }

        match serde_urlencoded::from_bytes::<Vec<(String, String)>>(segment) {
            Ok(decoded) => pairs.extend(decoded),
            Err(e) => tracing::warn!("Error parsing {}: {}", source, e),
        }
    }

    pairs
}

/// Every `%` must be followed by two hex digits.
fn has_valid_escapes(segment: &[u8]) -> bool {
    let mut i = 0;
    while i < segment.len() {
        if segment[i] == b'%' {
            let hex = segment.get(i + 1..i + 3);
            if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|ct| {
            ct.trim()
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}
