use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::catalog::builder::{self, CatalogError};
use crate::http::state::AppState;

// The catalog is safe to reuse for an hour; clients re-fetch after that.
const CACHE_CONTROL: &str = "public, max-age=3600";

/// Success headers: a bounded cache window plus CORS restricted to read-only
/// GET access from the configured origin.
fn catalog_headers(origin: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_str(origin).unwrap_or_else(|_| {
            tracing::warn!("Configured CORS origin {:?} is not a valid header value, falling back to *", origin);
            HeaderValue::from_static("*")
        }),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
    headers
}

/// GET /api/videos — build the catalog from current filesystem state.
///
/// An empty catalog maps to 404, anything unrecovered to 500; both carry a
/// well-formed JSON body with an explicit error field, never a raw trace.
/// The success body is a top-level array of records.
pub async fn list_videos(State(state): State<AppState>) -> Response {
    match builder::build(Arc::clone(&state.config), Arc::clone(&state.prober)).await {
        Ok(records) => (
            StatusCode::OK,
            catalog_headers(&state.config.cors_origin),
            Json(records),
        )
            .into_response(),
        Err(CatalogError::Empty(root)) => {
            tracing::warn!("No videos found in {}", root.display());
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "videos": [], "error": "No videos found" })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Internal server error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "videos": [],
                    "error": "Internal server error",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
