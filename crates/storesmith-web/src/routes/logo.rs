//! Logo generation endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use storesmith_core::metadata::{self, model::LogoRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/generate-logo`
pub async fn generate_logo(
    State(state): State<AppState>,
    Json(request): Json<LogoRequest>,
) -> Result<Json<Value>, ApiError> {
    let data = metadata::generate_logo(&state.openai, &request).await?;

    Ok(Json(json!({
        "success": true,
        "data": data,
    })))
}
