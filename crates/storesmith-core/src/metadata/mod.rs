//! App Store metadata and logo generation.
//!
//! Thin orchestration over the OpenAI client: validate inputs, build the
//! prompt, parse and re-validate whatever the model returns.

pub mod model;
pub mod prompt;

use tracing::{debug, warn};

use crate::error::SmithResult;
use crate::openai::OpenAiClient;
use model::{AppMetadata, GeneratedLogo, LogoRequest, MetadataRequest};

/// Generate optimized App Store metadata for an app.
pub async fn generate_metadata(
    client: &OpenAiClient,
    request: &MetadataRequest,
) -> SmithResult<AppMetadata> {
    let (app_name, app_description) = request.validate()?;

    let user_prompt = prompt::metadata_prompt(&app_name, &app_description);
    let raw = client
        .chat_completion(prompt::METADATA_SYSTEM_PROMPT, &user_prompt)
        .await?;
    debug!(chars = raw.len(), "Received metadata completion");

    let cleaned = strip_code_fences(&raw);
    let metadata: AppMetadata = serde_json::from_str(cleaned).map_err(|e| {
        warn!(error = %e, "Model returned unparseable metadata JSON");
        e
    })?;
    metadata.validate()?;

    Ok(metadata)
}

/// Generate an app logo via the image model.
pub async fn generate_logo(
    client: &OpenAiClient,
    request: &LogoRequest,
) -> SmithResult<GeneratedLogo> {
    let (app_name, app_description) = request.validate()?;

    let prompt = prompt::logo_prompt(&app_name, &app_description);
    let image = client.generate_image(&prompt).await?;

    Ok(GeneratedLogo {
        image_url: image.url,
        original_prompt: prompt,
        revised_prompt: image.revised_prompt,
        app_name,
        app_description,
    })
}

/// Models sometimes wrap JSON responses in markdown code fences despite
/// instructions not to; strip them before parsing.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_plain_json() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_bare_fence() {
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }
}
