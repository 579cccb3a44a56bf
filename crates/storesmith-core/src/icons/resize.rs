//! Source image decoding and cover/crop-to-fill resizing.

use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, ImageFormat, ImageReader};

use crate::error::{SmithError, SmithResult};

/// Minimum source-image dimension (both axes), in pixels.
///
/// The marketing icon is 1024px, so anything upscaled from below this
/// starts to look soft; 512 keeps the upload bar reasonable while still
/// producing acceptable large variants.
pub const MIN_SOURCE_DIMENSION: u32 = 512;

/// Decode the uploaded bytes and check the minimum dimension.
pub fn decode_source(bytes: &[u8]) -> SmithResult<DynamicImage> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(SmithError::Io)?
        .decode()
        .map_err(SmithError::InvalidImage)?;

    let (width, height) = (img.width(), img.height());
    if width < MIN_SOURCE_DIMENSION || height < MIN_SOURCE_DIMENSION {
        return Err(SmithError::ImageTooSmall {
            width,
            height,
            min: MIN_SOURCE_DIMENSION,
        });
    }

    Ok(img)
}

/// Resize to an exact square of `target` pixels and encode as PNG.
///
/// Cover semantics: the shorter source dimension is scaled to fill the
/// target, the overflow on the longer dimension is center-cropped. The
/// output is always exactly `target`x`target` regardless of the source
/// aspect ratio, with no lossy encoding beyond the resample itself.
pub fn resize_to_icon(source: &DynamicImage, target: u32) -> Result<Vec<u8>, image::ImageError> {
    let resized = source.resize_to_fill(target, target, FilterType::Lanczos3);

    let mut bytes = Vec::new();
    resized.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
