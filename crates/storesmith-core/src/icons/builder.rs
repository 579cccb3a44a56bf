//! Icon set builder: validation, concurrent resizing, manifest
//! construction and zip packaging for one request.
//!
//! Construction is all-or-nothing: a single failed variant fails the
//! whole request, because a partial icon set breaks Xcode's catalog
//! validation in ways that are much harder to diagnose than an error.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use image::DynamicImage;
use tracing::{debug, info};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use super::catalog::{variants_for, IconVariant, Platform, PlatformFamily, ALL_PLATFORMS};
use super::manifest::ManifestDocument;
use super::resize::{decode_source, resize_to_icon};
use crate::error::{SmithError, SmithResult};
use crate::PRODUCT_NAME;

/// Root folder inside the generated archive.
const ASSETS_ROOT: &str = "Assets";

/// Builder knobs.
#[derive(Debug, Clone)]
pub struct IconSetOptions {
    /// Whether to emit a `Contents.json` for the macOS folder.
    ///
    /// Off by default: macOS icon sets are usually assembled into an
    /// `.icns` through a separate flow, so the manifest is opt-in.
    pub write_macos_manifest: bool,
}

impl Default for IconSetOptions {
    fn default() -> Self {
        Self {
            write_macos_manifest: false,
        }
    }
}

/// The finished archive, ready to stream to the caller.
#[derive(Debug, Clone)]
pub struct IconSetArchive {
    pub bytes: Vec<u8>,
    /// Suggested content-disposition filename,
    /// `AppIcons-<Platform1>-...-<unixMillis>.zip`.
    pub filename: String,
}

impl IconSetArchive {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One resized icon, alive only until it is written into the archive.
struct GeneratedIcon {
    platform: Platform,
    filename: &'static str,
    bytes: Vec<u8>,
}

/// Build a complete icon set archive from source image bytes and a
/// platform selection.
///
/// Unknown selection strings are skipped, not rejected. A selection that
/// resolves to no known platform at all is treated as empty.
pub async fn build_icon_set(
    image_bytes: &[u8],
    selection: &[String],
    options: &IconSetOptions,
) -> SmithResult<IconSetArchive> {
    if image_bytes.is_empty() {
        return Err(SmithError::MissingImage);
    }
    if selection.is_empty() {
        return Err(SmithError::EmptySelection);
    }

    let platforms = resolve_selection(selection);
    if platforms.is_empty() {
        return Err(SmithError::EmptySelection);
    }

    let source = Arc::new(decode_source(image_bytes)?);
    debug!(
        width = source.width(),
        height = source.height(),
        platforms = platforms.len(),
        "Source image decoded"
    );

    // Fan out per platform: each platform's variants resize concurrently,
    // platforms run in sequence to bound the number of in-flight bitmaps.
    //
    // iPhone and iPad share several output filenames (Icon-20@2x.png,
    // Icon-29@2x.png, Icon-40@2x.png, Icon-1024.png) inside the single
    // iOS folder, at identical pixel sizes. Each (folder, filename) pair
    // is resized and written once; the merged manifest still carries one
    // entry per catalog variant.
    let mut seen: HashSet<(&'static str, &'static str)> = HashSet::new();
    let mut icons: Vec<GeneratedIcon> = Vec::new();
    for &platform in &platforms {
        let folder = platform.family().folder_name();
        let pending: Vec<IconVariant> = variants_for(platform)
            .iter()
            .copied()
            .filter(|v| seen.insert((folder, v.filename)))
            .collect();
        let batch = resize_platform_batch(&source, platform, &pending).await?;
        icons.extend(batch);
    }

    let archive = package_archive(&platforms, icons, options)?;
    info!(
        filename = %archive.filename,
        bytes = archive.len(),
        "Icon set archive built"
    );

    Ok(archive)
}

/// Resolve selection strings to platforms, deduplicated, in catalog order.
fn resolve_selection(selection: &[String]) -> Vec<Platform> {
    let requested: Vec<Platform> =
        selection.iter().filter_map(|s| Platform::parse(s)).collect();

    ALL_PLATFORMS
        .iter()
        .copied()
        .filter(|p| requested.contains(p))
        .collect()
}

/// Resize the given variants of one platform concurrently.
async fn resize_platform_batch(
    source: &Arc<DynamicImage>,
    platform: Platform,
    variants: &[IconVariant],
) -> SmithResult<Vec<GeneratedIcon>> {
    let tasks = variants.iter().map(|variant| {
        let source = Arc::clone(source);
        let pixel_size = variant.pixel_size();
        let filename = variant.filename;

        tokio::task::spawn_blocking(move || {
            resize_to_icon(&source, pixel_size)
                .map(|bytes| GeneratedIcon {
                    platform,
                    filename,
                    bytes,
                })
                .map_err(|source| SmithError::VariantProcessing {
                    platform: platform.as_str().to_string(),
                    pixel_size,
                    source,
                })
        })
    });

    let results = try_join_all(tasks).await?;
    results.into_iter().collect()
}

/// Serialize icons, manifests and the README into one zip.
fn package_archive(
    platforms: &[Platform],
    icons: Vec<GeneratedIcon>,
    options: &IconSetOptions,
) -> SmithResult<IconSetArchive> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for icon in &icons {
        let path = format!(
            "{}/{}/AppIcon.appiconset/{}",
            ASSETS_ROOT,
            icon.platform.family().folder_name(),
            icon.filename
        );
        writer.start_file(path, file_options)?;
        writer.write_all(&icon.bytes)?;
    }

    // One merged manifest for the iOS family, one for watchOS. The macOS
    // manifest is opt-in (see IconSetOptions).
    let ios_platforms: Vec<Platform> = platforms
        .iter()
        .copied()
        .filter(|p| p.family() == PlatformFamily::Ios)
        .collect();
    if !ios_platforms.is_empty() {
        write_manifest(&mut writer, file_options, PlatformFamily::Ios, &ios_platforms)?;
    }

    if platforms.contains(&Platform::Watchos) {
        write_manifest(
            &mut writer,
            file_options,
            PlatformFamily::Watchos,
            &[Platform::Watchos],
        )?;
    }

    if options.write_macos_manifest && platforms.contains(&Platform::Macos) {
        write_manifest(
            &mut writer,
            file_options,
            PlatformFamily::Macos,
            &[Platform::Macos],
        )?;
    }

    writer.start_file("README.md", file_options)?;
    writer.write_all(render_readme(platforms).as_bytes())?;

    let bytes = writer.finish()?.into_inner();
    Ok(IconSetArchive {
        bytes,
        filename: archive_filename(platforms),
    })
}

fn write_manifest(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    file_options: SimpleFileOptions,
    family: PlatformFamily,
    platforms: &[Platform],
) -> SmithResult<()> {
    let doc = ManifestDocument::for_platforms(platforms);
    let path = format!(
        "{}/{}/AppIcon.appiconset/Contents.json",
        ASSETS_ROOT,
        family.folder_name()
    );
    writer.start_file(path, file_options)?;
    writer.write_all(doc.to_json()?.as_bytes())?;
    Ok(())
}

/// The human-readable instructions document included in every archive.
fn render_readme(platforms: &[Platform]) -> String {
    let platform_names: Vec<&str> = platforms.iter().map(|p| p.display_name()).collect();

    let mut folders: Vec<&str> = Vec::new();
    for platform in platforms {
        let folder = platform.family().folder_name();
        if !folders.contains(&folder) {
            folders.push(folder);
        }
    }

    let folder_list = folders
        .iter()
        .map(|f| format!("- {}/{}/AppIcon.appiconset/", ASSETS_ROOT, f))
        .collect::<Vec<_>>()
        .join("\n");

    let size_sections = platforms
        .iter()
        .map(|&platform| {
            let lines = variants_for(platform)
                .iter()
                .map(|v| {
                    let px = v.pixel_size();
                    format!("- {} ({px}x{px}px) - {}", v.filename, v.purpose)
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("### {}:\n{}", platform.display_name(), lines)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "# App Icons Generated by {product}\n\n\
         ## Platforms Included: {names}\n\n\
         ## Folder Structure:\n{folder_list}\n\n\
         ## Usage Instructions:\n\
         1. Extract this ZIP file\n\
         2. Drag the \"{root}\" folder into your Xcode project\n\
         3. Replace existing AppIcons if prompted\n\
         4. Build and run your app!\n\n\
         ## Icon Sizes by Platform:\n\n{size_sections}\n\n\
         Generated on: {timestamp}\n\
         Source: {product}\n",
        product = PRODUCT_NAME,
        names = platform_names.join(", "),
        root = ASSETS_ROOT,
        timestamp = Utc::now().to_rfc3339(),
    )
}

fn archive_filename(platforms: &[Platform]) -> String {
    let names = platforms
        .iter()
        .map(|p| p.display_name())
        .collect::<Vec<_>>()
        .join("-");
    format!("AppIcons-{}-{}.zip", names, Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::resize::tests::test_png;
    use std::collections::BTreeMap;
    use std::io::Read;

    fn selection(platforms: &[&str]) -> Vec<String> {
        platforms.iter().map(|s| s.to_string()).collect()
    }

    /// Read every entry of an archive back into (path -> bytes).
    fn unpack(archive: &IconSetArchive) -> BTreeMap<String, Vec<u8>> {
        let mut zip = zip::ZipArchive::new(Cursor::new(archive.bytes.clone())).unwrap();
        let mut entries = BTreeMap::new();
        for i in 0..zip.len() {
            let mut file = zip.by_index(i).unwrap();
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).unwrap();
            entries.insert(file.name().to_string(), bytes);
        }
        entries
    }

    #[tokio::test]
    async fn test_missing_image_fails_first() {
        let err = build_icon_set(&[], &selection(&["iphone"]), &IconSetOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SmithError::MissingImage));
    }

    #[tokio::test]
    async fn test_empty_selection_fails() {
        let png = test_png(1024, 1024);
        let err = build_icon_set(&png, &[], &IconSetOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SmithError::EmptySelection));
    }

    #[tokio::test]
    async fn test_too_small_source_fails_before_resizing() {
        let png = test_png(400, 400);
        let err = build_icon_set(&png, &selection(&["iphone"]), &IconSetOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SmithError::ImageTooSmall { .. }));
    }

    #[tokio::test]
    async fn test_watchos_end_to_end() {
        let png = test_png(1024, 1024);
        let archive = build_icon_set(&png, &selection(&["watchos"]), &IconSetOptions::default())
            .await
            .unwrap();

        assert!(archive.filename.starts_with("AppIcons-watchOS-"));
        assert!(archive.filename.ends_with(".zip"));

        let entries = unpack(&archive);

        let icon_count = entries
            .keys()
            .filter(|k| k.starts_with("Assets/watchOS/AppIcon.appiconset/") && k.ends_with(".png"))
            .count();
        assert_eq!(icon_count, variants_for(Platform::Watchos).len());

        assert!(entries.contains_key("Assets/watchOS/AppIcon.appiconset/Contents.json"));

        let readme = String::from_utf8(entries["README.md"].clone()).unwrap();
        assert!(readme.contains("Platforms Included: watchOS"));
        assert!(readme.contains("Icon-24@2x.png (48x48px) - Watch Notification (38mm)"));
        assert!(readme.contains("Icon-27.5@2x.png (55x55px)"));
    }

    #[tokio::test]
    async fn test_generated_icons_are_exact_squares() {
        let png = test_png(600, 800);
        let archive = build_icon_set(&png, &selection(&["iphone"]), &IconSetOptions::default())
            .await
            .unwrap();

        let entries = unpack(&archive);
        for variant in variants_for(Platform::Iphone) {
            let path = format!("Assets/iOS/AppIcon.appiconset/{}", variant.filename);
            let img = image::load_from_memory(&entries[&path]).unwrap();
            let px = variant.pixel_size();
            assert_eq!((img.width(), img.height()), (px, px), "{}", path);
        }
    }

    #[tokio::test]
    async fn test_merged_ios_manifest_written_once() {
        let png = test_png(1024, 1024);
        let archive = build_icon_set(
            &png,
            &selection(&["iphone", "ipad"]),
            &IconSetOptions::default(),
        )
        .await
        .unwrap();

        let entries = unpack(&archive);
        let manifests: Vec<_> = entries
            .keys()
            .filter(|k| k.ends_with("Contents.json"))
            .collect();
        assert_eq!(manifests, vec!["Assets/iOS/AppIcon.appiconset/Contents.json"]);

        let doc: ManifestDocument =
            serde_json::from_slice(&entries["Assets/iOS/AppIcon.appiconset/Contents.json"])
                .unwrap();
        let expected =
            variants_for(Platform::Iphone).len() + variants_for(Platform::Ipad).len();
        assert_eq!(doc.images.len(), expected);
    }

    #[tokio::test]
    async fn test_merged_ios_selection_shares_icon_files() {
        let png = test_png(1024, 1024);
        let archive = build_icon_set(
            &png,
            &selection(&["iphone", "ipad"]),
            &IconSetOptions::default(),
        )
        .await
        .unwrap();

        // iPhone and iPad overlap on four filenames in the shared iOS
        // folder; each is written once, at the catalog's pixel size.
        let distinct: std::collections::HashSet<&str> = variants_for(Platform::Iphone)
            .iter()
            .chain(variants_for(Platform::Ipad))
            .map(|v| v.filename)
            .collect();

        let entries = unpack(&archive);
        let icon_count = entries
            .keys()
            .filter(|k| k.starts_with("Assets/iOS/AppIcon.appiconset/") && k.ends_with(".png"))
            .count();
        assert_eq!(icon_count, distinct.len());

        for variant in variants_for(Platform::Iphone)
            .iter()
            .chain(variants_for(Platform::Ipad))
        {
            let path = format!("Assets/iOS/AppIcon.appiconset/{}", variant.filename);
            let img = image::load_from_memory(&entries[&path]).unwrap();
            let px = variant.pixel_size();
            assert_eq!((img.width(), img.height()), (px, px), "{}", path);
        }
    }

    #[tokio::test]
    async fn test_unknown_platform_is_skipped() {
        let png = test_png(1024, 1024);
        let options = IconSetOptions::default();

        let with_unknown = build_icon_set(
            &png,
            &selection(&["iphone", "nintendo-switch"]),
            &options,
        )
        .await
        .unwrap();
        let without = build_icon_set(&png, &selection(&["iphone"]), &options)
            .await
            .unwrap();

        // Same entry set, same icon and manifest contents; only the
        // README/archive timestamps may differ.
        let a = unpack(&with_unknown);
        let b = unpack(&without);
        assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
        for (path, bytes) in &a {
            if path != "README.md" {
                assert_eq!(bytes, &b[path], "{}", path);
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_only_selection_is_empty() {
        let png = test_png(1024, 1024);
        let err = build_icon_set(
            &png,
            &selection(&["nintendo-switch"]),
            &IconSetOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SmithError::EmptySelection));
    }

    #[tokio::test]
    async fn test_macos_manifest_is_opt_in() {
        let png = test_png(1024, 1024);

        let default = build_icon_set(&png, &selection(&["macos"]), &IconSetOptions::default())
            .await
            .unwrap();
        assert!(!unpack(&default)
            .keys()
            .any(|k| k.ends_with("Contents.json")));

        let opted = build_icon_set(
            &png,
            &selection(&["macos"]),
            &IconSetOptions {
                write_macos_manifest: true,
            },
        )
        .await
        .unwrap();
        assert!(unpack(&opted)
            .contains_key("Assets/macOS/AppIcon.appiconset/Contents.json"));
    }

    #[test]
    fn test_selection_resolves_in_catalog_order() {
        let platforms = resolve_selection(&selection(&["watchos", "iphone", "iphone"]));
        assert_eq!(platforms, vec![Platform::Iphone, Platform::Watchos]);
    }
}
