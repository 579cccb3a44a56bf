//! `Contents.json` manifest generation.
//!
//! Asset catalogs are validated as a whole by Xcode, so the exact shape
//! of every entry matters: idiom tags, watch role/subtype buckets, and
//! the marketing-size overrides all follow a fixed decision table.

use serde::{Deserialize, Serialize};

use super::catalog::{variants_for, IconVariant, Platform};
use crate::PRODUCT_NAME;

/// Marketing icon base size (the App Store listing icon).
const MARKETING_BASE_SIZE: f32 = 1024.0;

/// One image entry in a `Contents.json` manifest.
///
/// Field order is the serialized order and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub scale: String,
    pub size: String,
    pub idiom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

/// A complete `Contents.json` document for one asset folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl ManifestDocument {
    /// Build one manifest covering the given platforms, concatenating
    /// each platform's variants in catalog order.
    pub fn for_platforms(platforms: &[Platform]) -> Self {
        let images = platforms
            .iter()
            .flat_map(|&platform| {
                variants_for(platform)
                    .iter()
                    .map(move |variant| ManifestEntry::from_variant(platform, variant))
            })
            .collect();

        Self {
            images,
            info: ManifestInfo {
                author: PRODUCT_NAME.to_string(),
                version: 1,
            },
        }
    }

    /// Serialize with 2-space indentation, the format Xcode itself emits.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ManifestEntry {
    /// Derive the manifest entry for one catalog variant.
    pub fn from_variant(platform: Platform, variant: &IconVariant) -> Self {
        let (idiom, role, subtype) = derive_idiom(platform, variant.base_size);

        Self {
            filename: variant.filename.to_string(),
            scale: format!("{}x", variant.scale),
            size: format!("{s}x{s}", s = variant.base_size),
            idiom: idiom.to_string(),
            role: role.map(str::to_string),
            subtype: subtype.map(str::to_string),
        }
    }
}

/// Idiom/role/subtype decision table.
///
/// The 1024pt marketing variant never carries the per-device idiom:
/// phone/tablet use "ios-marketing", watch uses "watch-marketing" (with
/// no role), and mac stays "mac".
fn derive_idiom(
    platform: Platform,
    base_size: f32,
) -> (&'static str, Option<&'static str>, Option<&'static str>) {
    let marketing = base_size == MARKETING_BASE_SIZE;

    match platform {
        Platform::Iphone => (if marketing { "ios-marketing" } else { "iphone" }, None, None),
        Platform::Ipad => (if marketing { "ios-marketing" } else { "ipad" }, None, None),
        Platform::Macos => ("mac", None, None),
        Platform::Watchos => {
            if marketing {
                return ("watch-marketing", None, None);
            }
            let (role, subtype) = watch_role(base_size);
            ("watch", role, subtype)
        }
    }
}

/// Watch role/subtype buckets, keyed by base point size.
fn watch_role(base_size: f32) -> (Option<&'static str>, Option<&'static str>) {
    match base_size {
        s if s == 29.0 => (Some("companionSettings"), None),
        s if s == 24.0 => (Some("notificationCenter"), Some("38mm")),
        s if s == 27.5 => (Some("notificationCenter"), Some("42mm")),
        s if s == 40.0 => (Some("appLauncher"), Some("38mm")),
        s if s == 44.0 => (Some("appLauncher"), Some("40mm")),
        s if s == 50.0 => (Some("appLauncher"), Some("44mm")),
        s if s == 86.0 => (Some("quickLook"), Some("38mm")),
        s if s == 98.0 => (Some("quickLook"), Some("42mm")),
        s if s == 108.0 => (Some("quickLook"), Some("44mm")),
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(platform: Platform, base_size: f32, scale: u32) -> IconVariant {
        *variants_for(platform)
            .iter()
            .find(|v| v.base_size == base_size && v.scale == scale)
            .expect("variant not in catalog")
    }

    #[test]
    fn test_iphone_marketing_idiom() {
        let entry =
            ManifestEntry::from_variant(Platform::Iphone, &variant(Platform::Iphone, 1024.0, 1));
        assert_eq!(entry.idiom, "ios-marketing");
        assert_eq!(entry.size, "1024x1024");
        assert_eq!(entry.scale, "1x");
    }

    #[test]
    fn test_iphone_regular_idiom() {
        let entry =
            ManifestEntry::from_variant(Platform::Iphone, &variant(Platform::Iphone, 60.0, 3));
        assert_eq!(entry.idiom, "iphone");
        assert!(entry.role.is_none());
    }

    #[test]
    fn test_macos_has_no_marketing_override() {
        for v in variants_for(Platform::Macos) {
            let entry = ManifestEntry::from_variant(Platform::Macos, v);
            assert_eq!(entry.idiom, "mac");
        }
    }

    #[test]
    fn test_watch_marketing_clears_role() {
        let entry =
            ManifestEntry::from_variant(Platform::Watchos, &variant(Platform::Watchos, 1024.0, 1));
        assert_eq!(entry.idiom, "watch-marketing");
        assert!(entry.role.is_none());
        assert!(entry.subtype.is_none());
    }

    #[test]
    fn test_watch_role_buckets() {
        let cases = [
            (24.0, "notificationCenter", Some("38mm")),
            (27.5, "notificationCenter", Some("42mm")),
            (29.0, "companionSettings", None),
            (40.0, "appLauncher", Some("38mm")),
            (44.0, "appLauncher", Some("40mm")),
            (50.0, "appLauncher", Some("44mm")),
            (86.0, "quickLook", Some("38mm")),
            (98.0, "quickLook", Some("42mm")),
            (108.0, "quickLook", Some("44mm")),
        ];

        for (base_size, role, subtype) in cases {
            let entry = ManifestEntry::from_variant(
                Platform::Watchos,
                &variant(Platform::Watchos, base_size, 2),
            );
            assert_eq!(entry.idiom, "watch");
            assert_eq!(entry.role.as_deref(), Some(role), "base size {}", base_size);
            assert_eq!(entry.subtype.as_deref(), subtype, "base size {}", base_size);
        }
    }

    #[test]
    fn test_fractional_size_descriptor() {
        let entry =
            ManifestEntry::from_variant(Platform::Ipad, &variant(Platform::Ipad, 83.5, 2));
        assert_eq!(entry.size, "83.5x83.5");
        assert_eq!(entry.scale, "2x");
    }

    #[test]
    fn test_merged_ios_manifest() {
        let doc = ManifestDocument::for_platforms(&[Platform::Iphone, Platform::Ipad]);
        let expected =
            variants_for(Platform::Iphone).len() + variants_for(Platform::Ipad).len();
        assert_eq!(doc.images.len(), expected);

        // iPhone entries come first, in catalog order.
        assert_eq!(doc.images[0].filename, "Icon-20@2x.png");
        assert_eq!(doc.images[0].idiom, "iphone");
        let first_ipad = variants_for(Platform::Iphone).len();
        assert_eq!(doc.images[first_ipad].idiom, "ipad");
    }

    #[test]
    fn test_serialized_field_order() {
        let doc = ManifestDocument::for_platforms(&[Platform::Watchos]);
        let json = doc.to_json().unwrap();

        // Per-entry field order is fixed: filename, scale, size, idiom,
        // then role/subtype when present.
        let filename_pos = json.find("\"filename\"").unwrap();
        let scale_pos = json.find("\"scale\"").unwrap();
        let size_pos = json.find("\"size\"").unwrap();
        let idiom_pos = json.find("\"idiom\"").unwrap();
        assert!(filename_pos < scale_pos && scale_pos < size_pos && size_pos < idiom_pos);

        assert!(json.contains("\"author\": \"App Store Connect Helper\""));
        assert!(json.contains("\"version\": 1"));
    }
}
