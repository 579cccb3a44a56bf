//! OpenAI HTTP client for text completion and image generation.
//!
//! Only the two calls the product needs: a chat completion for App Store
//! metadata and a DALL-E image generation for logos.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SmithError, SmithResult};

/// Default OpenAI API base URL.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Chat model used for metadata generation.
pub const CHAT_MODEL: &str = "gpt-4o";

/// Image model used for logo generation.
pub const IMAGE_MODEL: &str = "dall-e-3";

/// Host that serves generated images; the proxy endpoint only fetches
/// from here.
pub const IMAGE_HOST: &str = "oaidalleapiprodscus.blob.core.windows.net";

/// OpenAI API client.
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u32,
    size: &'static str,
    quality: &'static str,
    style: &'static str,
    response_format: &'static str,
}

#[derive(Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    url: String,
    revised_prompt: Option<String>,
}

/// A generated image, hosted at the provider's URL.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

impl OpenAiClient {
    /// Create a client with the default API URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a client from the `OPENAI_API_KEY` environment variable,
    /// honoring `STORESMITH_OPENAI_URL` as a base-URL override.
    pub fn from_env() -> SmithResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| SmithError::validation("OPENAI_API_KEY is not set"))?;

        let mut client = Self::new(api_key);
        if let Ok(url) = std::env::var("STORESMITH_OPENAI_URL") {
            client = client.with_base_url(&url);
        }
        Ok(client)
    }

    /// Override the base URL (used by tests and proxies).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Run one system+user chat completion and return the raw content.
    pub async fn chat_completion(&self, system: &str, user: &str) -> SmithResult<String> {
        let request = ChatRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
            temperature: 0.7,
            max_tokens: 1500,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let result: ChatResponse = response.json().await?;
        let content = result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| SmithError::Api {
                status: 200,
                message: "Completion returned no choices".to_string(),
            })?;

        debug!(chars = content.len(), "Chat completion received");
        Ok(content)
    }

    /// Generate one 1024x1024 image and return its hosted URL.
    pub async fn generate_image(&self, prompt: &str) -> SmithResult<GeneratedImage> {
        let request = ImageRequest {
            model: IMAGE_MODEL.to_string(),
            prompt: prompt.to_string(),
            n: 1,
            size: "1024x1024",
            quality: "hd",
            style: "natural",
            response_format: "url",
        };

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let result: ImageResponse = response.json().await?;
        let image = result.data.into_iter().next().ok_or_else(|| SmithError::Api {
            status: 200,
            message: "Image generation returned no data".to_string(),
        })?;

        Ok(GeneratedImage {
            url: image.url,
            revised_prompt: image.revised_prompt,
        })
    }

    /// Map non-success responses to [`SmithError`], distinguishing quota
    /// exhaustion so the web layer can return 429.
    async fn check_status(response: reqwest::Response) -> SmithResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(&body) {
            if parsed.error.code.as_deref() == Some("insufficient_quota") {
                return Err(SmithError::QuotaExceeded);
            }
            return Err(SmithError::Api {
                status,
                message: parsed.error.message,
            });
        }

        Err(SmithError::Api {
            status,
            message: body,
        })
    }
}
