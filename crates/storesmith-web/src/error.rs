//! Error-to-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use storesmith_core::SmithError;
use tracing::error;

/// An error ready to be rendered as the structured failure payload
/// `{ "success": false, "error": "<message>" }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<SmithError> for ApiError {
    fn from(err: SmithError) -> Self {
        let status = match &err {
            e if e.is_input_error() => StatusCode::BAD_REQUEST,
            SmithError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %err, "Request failed");
        }

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_400() {
        let err: ApiError = SmithError::MissingImage.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: ApiError = SmithError::ImageTooSmall {
            width: 100,
            height: 100,
            min: 512,
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_quota_is_429() {
        let err: ApiError = SmithError::QuotaExceeded.into();
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_processing_errors_are_500() {
        let err: ApiError = SmithError::Api {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
