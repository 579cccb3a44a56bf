//! App Store metadata domain models.

use serde::{Deserialize, Serialize};

use crate::error::{SmithError, SmithResult};

/// Input for metadata generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRequest {
    pub app_name: String,
    pub app_description: String,
}

impl MetadataRequest {
    /// Validate and trim the inputs.
    pub fn validate(&self) -> SmithResult<(String, String)> {
        validate_inputs(&self.app_name, &self.app_description, 50)
    }
}

/// Input for logo generation. Same shape as [`MetadataRequest`] but with
/// a looser name limit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoRequest {
    pub app_name: String,
    pub app_description: String,
}

impl LogoRequest {
    pub fn validate(&self) -> SmithResult<(String, String)> {
        validate_inputs(&self.app_name, &self.app_description, 100)
    }
}

fn validate_inputs(
    app_name: &str,
    app_description: &str,
    name_limit: usize,
) -> SmithResult<(String, String)> {
    let name = app_name.trim();
    let description = app_description.trim();

    if name.is_empty() || description.is_empty() {
        return Err(SmithError::validation(
            "App name and description are required",
        ));
    }
    if name.chars().count() > name_limit {
        return Err(SmithError::validation(format!(
            "App name must be {} characters or less",
            name_limit
        )));
    }
    if description.chars().count() > 500 {
        return Err(SmithError::validation(
            "App description must be 500 characters or less",
        ));
    }

    Ok((name.to_string(), description.to_string()))
}

/// Optimized App Store listing metadata, as returned by the LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub app_name: String,
    pub subtitle: String,
    pub category: String,
    pub promotional_text: String,
    pub description: String,
}

impl AppMetadata {
    /// Enforce App Store field limits on a parsed LLM response.
    pub fn validate(&self) -> SmithResult<()> {
        if self.app_name.chars().count() > 30 {
            return Err(SmithError::validation("App name exceeds 30 characters"));
        }
        if self.subtitle.chars().count() > 30 {
            return Err(SmithError::validation("Subtitle exceeds 30 characters"));
        }
        if self.promotional_text.chars().count() > 170 {
            return Err(SmithError::validation(
                "Promotional text exceeds 170 characters",
            ));
        }
        let len = self.description.chars().count();
        if !(400..=1000).contains(&len) {
            return Err(SmithError::validation(
                "Description must be between 400-1000 characters",
            ));
        }
        Ok(())
    }
}

/// A generated logo, pointing at the image host's URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLogo {
    pub image_url: String,
    pub original_prompt: String,
    pub revised_prompt: Option<String>,
    pub app_name: String,
    pub app_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(description_len: usize) -> AppMetadata {
        AppMetadata {
            app_name: "FitTrack".into(),
            subtitle: "Workouts made simple".into(),
            category: "Health & Fitness".into(),
            promotional_text: "Track every workout in seconds.".into(),
            description: "x".repeat(description_len),
        }
    }

    #[test]
    fn test_request_trims_and_accepts() {
        let req = MetadataRequest {
            app_name: "  FitTrack  ".into(),
            app_description: "A workout tracker.".into(),
        };
        let (name, desc) = req.validate().unwrap();
        assert_eq!(name, "FitTrack");
        assert_eq!(desc, "A workout tracker.");
    }

    #[test]
    fn test_request_rejects_empty() {
        let req = MetadataRequest {
            app_name: "   ".into(),
            app_description: "desc".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_name_limit() {
        let req = MetadataRequest {
            app_name: "x".repeat(51),
            app_description: "desc".into(),
        };
        assert!(req.validate().is_err());

        // The logo flow allows up to 100 characters.
        let logo = LogoRequest {
            app_name: "x".repeat(51),
            app_description: "desc".into(),
        };
        assert!(logo.validate().is_ok());
    }

    #[test]
    fn test_metadata_description_bounds() {
        assert!(metadata(399).validate().is_err());
        assert!(metadata(400).validate().is_ok());
        assert!(metadata(1000).validate().is_ok());
        assert!(metadata(1001).validate().is_err());
    }
}
