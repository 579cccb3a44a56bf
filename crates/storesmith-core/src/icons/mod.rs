//! Icon set generation pipeline.
//!
//! One source image goes in; a zip archive of platform-specific icon
//! variants, `Contents.json` manifests, and a README comes out.

pub mod builder;
pub mod catalog;
pub mod manifest;
pub mod resize;

pub use builder::{build_icon_set, IconSetArchive, IconSetOptions};
pub use catalog::{variants_for, IconVariant, Platform, PlatformFamily};
