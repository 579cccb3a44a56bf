//! Prompt construction for the metadata and logo generation calls.

/// System prompt for the metadata completion.
pub const METADATA_SYSTEM_PROMPT: &str = "You are an expert App Store optimization \
specialist. Always respond with valid JSON only, no markdown formatting or extra text.";

/// Build the user prompt for App Store metadata generation.
pub fn metadata_prompt(app_name: &str, app_description: &str) -> String {
    format!(
        r#"You are an elite App Store Optimization (ASO) expert with deep knowledge of Apple's App Store ranking algorithm, keyword indexing, and metadata optimization strategies.

Your job is to generate highly optimized App Store metadata that improves search discoverability and conversion rates for the following app:

App Name: "{app_name}"
App Description: "{app_description}"

Output ONLY the following JSON structure (no extra text):
{{
  "appName": "optimized app name (max 30 characters)",
  "subtitle": "compelling subtitle (max 30 characters)",
  "category": "most appropriate App Store category",
  "promotionalText": "engaging promotional text (max 170 characters)",
  "description": "full compelling description (400-1000 characters)"
}}

Strict requirements:
- All fields must be within their specified character limits (truncate if needed).
- Prioritize high-traffic, relevant keywords in appName, subtitle, and description, used naturally (avoid keyword stuffing).
- appName: short, brandable, and includes a top-performing keyword.
- subtitle: sharp value prop or feature-based hook.
- category: must match official App Store categories (e.g., Health & Fitness, Productivity, Utilities).
- promotionalText: feature-driven hook that emphasizes benefit or urgency.
- description: persuasive copy with short paragraphs, strong verbs, and benefit-focused language.
- No emojis, markdown, or extra formatting. Output ONLY the raw JSON object."#
    )
}

/// Build the image-generation prompt for an app logo.
pub fn logo_prompt(app_name: &str, app_description: &str) -> String {
    format!(
        r#"Create a modern, minimalist app icon logo for "{app_name}".

App Description: {app_description}

Design Requirements:
- Clean, modern, professional app icon style
- Simple geometric shapes or symbols
- Bold, recognizable design that works at small sizes
- Suitable for iOS/Android app stores
- No text or words in the logo
- High contrast colors
- Minimalist design that clearly represents the app's purpose
- Should work well on both light and dark backgrounds
- Professional, trustworthy appearance
- Vector-style illustration suitable for app icons

Style: Modern minimalist app icon, clean geometric design, professional"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_inputs() {
        let prompt = metadata_prompt("FitTrack", "Track workouts");
        assert!(prompt.contains("App Name: \"FitTrack\""));
        assert!(prompt.contains("Track workouts"));

        let prompt = logo_prompt("FitTrack", "Track workouts");
        assert!(prompt.contains("\"FitTrack\""));
        assert!(prompt.contains("App Description: Track workouts"));
    }
}
