//! Storesmith Core Library
//!
//! Domain models and business logic for the App Store asset helper.

pub mod error;
pub mod icons;
pub mod metadata;
pub mod openai;

pub use error::{SmithError, SmithResult};

/// Product name, used as the manifest author and in generated documents.
pub const PRODUCT_NAME: &str = "App Store Connect Helper";
