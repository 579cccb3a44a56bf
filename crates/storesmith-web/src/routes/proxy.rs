//! Image proxy endpoint.
//!
//! Generated logos are hosted on the provider's blob storage, which does
//! not send CORS headers; the UI fetches them through this proxy instead.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use storesmith_core::openai::IMAGE_HOST;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProxyQuery {
    pub url: String,
}

/// `GET /api/proxy-image?url=...`
///
/// Only URLs on the provider's image host are fetched.
pub async fn proxy_image(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let parsed = url::Url::parse(&query.url)
        .map_err(|_| ApiError::bad_request("Invalid image URL"))?;
    if parsed.host_str() != Some(IMAGE_HOST) {
        return Err(ApiError::bad_request("Invalid image URL"));
    }

    let response = state
        .http
        .get(parsed)
        .send()
        .await
        .map_err(|_| ApiError::internal("Failed to fetch image"))?;

    if !response.status().is_success() {
        return Err(ApiError::internal(format!(
            "Failed to fetch image: {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|_| ApiError::internal("Failed to fetch image"))?;

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (header::CONTENT_LENGTH, bytes.len().to_string()),
        (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
    ];

    Ok((headers, bytes))
}
