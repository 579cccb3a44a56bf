//! App Store metadata endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use storesmith_core::metadata::{self, model::MetadataRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/generate`
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<MetadataRequest>,
) -> Result<Json<Value>, ApiError> {
    let data = metadata::generate_metadata(&state.openai, &request).await?;

    Ok(Json(json!({
        "success": true,
        "data": data,
    })))
}
