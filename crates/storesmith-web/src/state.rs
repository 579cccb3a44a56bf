//! Application state.

use std::sync::Arc;

use storesmith_core::icons::IconSetOptions;
use storesmith_core::openai::OpenAiClient;

/// Application state shared across handlers.
///
/// Nothing here is mutable: each request is self-contained, so the state
/// only carries clients and configuration.
#[derive(Clone)]
pub struct AppState {
    pub openai: Arc<OpenAiClient>,
    /// Plain HTTP client for the image proxy.
    pub http: reqwest::Client,
    pub icon_options: IconSetOptions,
}

impl AppState {
    pub fn new(openai: OpenAiClient) -> Self {
        Self {
            openai: Arc::new(openai),
            http: reqwest::Client::new(),
            icon_options: IconSetOptions::default(),
        }
    }

    pub fn with_icon_options(mut self, options: IconSetOptions) -> Self {
        self.icon_options = options;
        self
    }
}
