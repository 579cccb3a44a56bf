//! Static icon variant catalog.
//!
//! The tables below reproduce Apple's published icon-size requirements
//! bit-for-bit, including the fractional point sizes (27.5, 83.5). They
//! are a fixed specification artifact: product knowledge lives here, the
//! builder only consumes it.

use serde::{Deserialize, Serialize};

/// A target operating environment with its own icon-size requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Iphone,
    Ipad,
    Watchos,
    Macos,
}

impl Platform {
    /// Parse from a selection string. Unknown identifiers yield `None`
    /// and are skipped by callers rather than rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "iphone" => Some(Self::Iphone),
            "ipad" => Some(Self::Ipad),
            "watchos" => Some(Self::Watchos),
            "macos" => Some(Self::Macos),
            _ => None,
        }
    }

    /// Selection identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iphone => "iphone",
            Self::Ipad => "ipad",
            Self::Watchos => "watchos",
            Self::Macos => "macos",
        }
    }

    /// Human-friendly name used in filenames and the README.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Iphone => "iPhone",
            Self::Ipad => "iPad",
            Self::Watchos => "watchOS",
            Self::Macos => "macOS",
        }
    }

    /// Folder-grouping family. iPhone and iPad share one asset folder
    /// (and one merged manifest).
    pub fn family(&self) -> PlatformFamily {
        match self {
            Self::Iphone | Self::Ipad => PlatformFamily::Ios,
            Self::Watchos => PlatformFamily::Watchos,
            Self::Macos => PlatformFamily::Macos,
        }
    }
}

/// Grouping key that determines folder naming and manifest grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    Ios,
    Watchos,
    Macos,
}

impl PlatformFamily {
    /// Folder name under `Assets/`.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::Watchos => "watchOS",
            Self::Macos => "macOS",
        }
    }
}

/// One required icon variant for a platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconVariant {
    /// Nominal point size; may be fractional (e.g. 83.5 for iPad Pro).
    pub base_size: f32,
    /// Pixel density multiplier (1, 2 or 3).
    pub scale: u32,
    /// Output filename, unique within a platform's variant list.
    pub filename: &'static str,
    /// Human-readable description, used only in the README.
    pub purpose: &'static str,
}

impl IconVariant {
    const fn new(base_size: f32, scale: u32, filename: &'static str, purpose: &'static str) -> Self {
        Self { base_size, scale, filename, purpose }
    }

    /// Target pixel dimension. Every fractional base size in the catalog
    /// resolves to an integer (83.5 * 2 = 167).
    pub fn pixel_size(&self) -> u32 {
        (self.base_size * self.scale as f32).round() as u32
    }
}

const IPHONE_VARIANTS: &[IconVariant] = &[
    IconVariant::new(20.0, 2, "Icon-20@2x.png", "iPhone Notification"),
    IconVariant::new(20.0, 3, "Icon-20@3x.png", "iPhone Notification"),
    IconVariant::new(29.0, 2, "Icon-29@2x.png", "iPhone Settings"),
    IconVariant::new(29.0, 3, "Icon-29@3x.png", "iPhone Settings"),
    IconVariant::new(40.0, 2, "Icon-40@2x.png", "iPhone Spotlight"),
    IconVariant::new(40.0, 3, "Icon-40@3x.png", "iPhone Spotlight"),
    IconVariant::new(60.0, 2, "Icon-60@2x.png", "iPhone App"),
    IconVariant::new(60.0, 3, "Icon-60@3x.png", "iPhone App"),
    IconVariant::new(1024.0, 1, "Icon-1024.png", "App Store"),
];

const IPAD_VARIANTS: &[IconVariant] = &[
    IconVariant::new(20.0, 1, "Icon-20.png", "iPad Notification"),
    IconVariant::new(20.0, 2, "Icon-20@2x.png", "iPad Notification"),
    IconVariant::new(29.0, 1, "Icon-29.png", "iPad Settings"),
    IconVariant::new(29.0, 2, "Icon-29@2x.png", "iPad Settings"),
    IconVariant::new(40.0, 1, "Icon-40.png", "iPad Spotlight"),
    IconVariant::new(40.0, 2, "Icon-40@2x.png", "iPad Spotlight"),
    IconVariant::new(76.0, 1, "Icon-76.png", "iPad App"),
    IconVariant::new(76.0, 2, "Icon-76@2x.png", "iPad App"),
    IconVariant::new(83.5, 2, "Icon-83.5@2x.png", "iPad Pro App"),
    IconVariant::new(1024.0, 1, "Icon-1024.png", "App Store"),
];

const WATCHOS_VARIANTS: &[IconVariant] = &[
    IconVariant::new(24.0, 2, "Icon-24@2x.png", "Watch Notification (38mm)"),
    IconVariant::new(27.5, 2, "Icon-27.5@2x.png", "Watch Notification (42mm)"),
    IconVariant::new(29.0, 2, "Icon-29@2x.png", "Watch Companion Settings"),
    IconVariant::new(29.0, 3, "Icon-29@3x.png", "Watch Companion Settings"),
    IconVariant::new(40.0, 2, "Icon-40@2x.png", "Watch App (38mm)"),
    IconVariant::new(44.0, 2, "Icon-44@2x.png", "Watch App (40mm)"),
    IconVariant::new(50.0, 2, "Icon-50@2x.png", "Watch App (44mm)"),
    IconVariant::new(86.0, 2, "Icon-86@2x.png", "Watch Quick Look (38mm)"),
    IconVariant::new(98.0, 2, "Icon-98@2x.png", "Watch Quick Look (42mm)"),
    IconVariant::new(108.0, 2, "Icon-108@2x.png", "Watch Quick Look (44mm)"),
    IconVariant::new(1024.0, 1, "Icon-1024.png", "Watch Marketing"),
];

const MACOS_VARIANTS: &[IconVariant] = &[
    IconVariant::new(16.0, 1, "Icon-16.png", "Mac"),
    IconVariant::new(16.0, 2, "Icon-16@2x.png", "Mac"),
    IconVariant::new(32.0, 1, "Icon-32.png", "Mac"),
    IconVariant::new(32.0, 2, "Icon-32@2x.png", "Mac"),
    IconVariant::new(128.0, 1, "Icon-128.png", "Mac"),
    IconVariant::new(128.0, 2, "Icon-128@2x.png", "Mac"),
    IconVariant::new(256.0, 1, "Icon-256.png", "Mac"),
    IconVariant::new(256.0, 2, "Icon-256@2x.png", "Mac"),
    IconVariant::new(512.0, 1, "Icon-512.png", "Mac"),
    IconVariant::new(512.0, 2, "Icon-512@2x.png", "Mac"),
];

/// The required icon variants for a platform, in generation order.
pub fn variants_for(platform: Platform) -> &'static [IconVariant] {
    match platform {
        Platform::Iphone => IPHONE_VARIANTS,
        Platform::Ipad => IPAD_VARIANTS,
        Platform::Watchos => WATCHOS_VARIANTS,
        Platform::Macos => MACOS_VARIANTS,
    }
}

/// All supported platforms, in catalog order.
pub const ALL_PLATFORMS: &[Platform] = &[
    Platform::Iphone,
    Platform::Ipad,
    Platform::Watchos,
    Platform::Macos,
];
