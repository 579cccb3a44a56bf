//! Icon set generation endpoint.

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use storesmith_core::icons::build_icon_set;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/generate-icons`
///
/// Multipart request with an `image` file part and an optional
/// `platforms` part holding a JSON string array (default `["iphone"]`).
/// Responds with the zip archive as an attachment, or the structured
/// error payload.
pub async fn generate_icons(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut image_bytes: Vec<u8> = Vec::new();
    let mut platforms: Vec<String> = vec!["iphone".to_string()];

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                image_bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?
                    .to_vec();
            }
            Some("platforms") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                platforms = serde_json::from_str(&raw)
                    .map_err(|_| ApiError::bad_request("Invalid platforms selection"))?;
            }
            _ => {}
        }
    }

    let archive = build_icon_set(&image_bytes, &platforms, &state.icon_options).await?;
    info!(
        filename = %archive.filename,
        bytes = archive.len(),
        "Serving icon set archive"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", archive.filename),
        ),
        (header::CONTENT_LENGTH, archive.len().to_string()),
    ];

    Ok((headers, archive.bytes))
}
