//! Centralized error types for storesmith.

use thiserror::Error;

/// Main error type for storesmith operations.
#[derive(Error, Debug)]
pub enum SmithError {
    #[error("No image file provided")]
    MissingImage,

    #[error("At least one platform must be selected")]
    EmptySelection,

    #[error("Invalid image file")]
    InvalidImage(#[source] image::ImageError),

    #[error("Image must be at least {min}x{min} pixels (got {width}x{height})")]
    ImageTooSmall { width: u32, height: u32, min: u32 },

    #[error("Failed to process icon size {pixel_size}x{pixel_size} for {platform}: {source}")]
    VariantProcessing {
        platform: String,
        pixel_size: u32,
        #[source]
        source: image::ImageError,
    },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("OpenAI API quota exceeded")]
    QuotaExceeded,

    #[error("OpenAI API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type for storesmith operations.
pub type SmithResult<T> = Result<T, SmithError>;

impl SmithError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Whether this error was caused by bad client input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingImage
                | Self::EmptySelection
                | Self::InvalidImage(_)
                | Self::ImageTooSmall { .. }
                | Self::ValidationError(_)
        )
    }
}
