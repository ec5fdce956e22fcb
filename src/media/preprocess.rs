// SPDX-License-Identifier: MPL-2.0
//! Sketch preprocessing: decode, downscale to the upload bound, re-encode.
//!
//! The generation endpoint works on small inputs, so sketches are shrunk to
//! fit within [`MAX_DIMENSION`] on both axes before upload. Aspect ratio is
//! preserved and images already within bounds are passed through untouched.
//! If the source format cannot be re-encoded, the original file is uploaded
//! unresized; that degradation is deliberate and silent.

use crate::error::{Error, Result};
use crate::media::{is_supported_extension, SketchImage};
use iced::widget::image;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Upper bound for either sketch dimension, in pixels.
pub const MAX_DIMENSION: u32 = 800;

/// Computes the upload dimensions for a `width`×`height` image.
///
/// The larger dimension is shrunk to [`MAX_DIMENSION`] and the other scaled
/// proportionally. Images already within bounds keep their dimensions; this
/// never upscales.
pub fn bounded_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return (width, height);
    }

    if width >= height {
        let scaled = (f64::from(height) * f64::from(MAX_DIMENSION) / f64::from(width)).round();
        (MAX_DIMENSION, (scaled as u32).max(1))
    } else {
        let scaled = (f64::from(width) * f64::from(MAX_DIMENSION) / f64::from(height)).round();
        ((scaled as u32).max(1), MAX_DIMENSION)
    }
}

/// Loads and preprocesses the sketch at `path`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFileType`] for extensions outside
/// [`crate::media::SUPPORTED_EXTENSIONS`], [`Error::Io`] if the file cannot
/// be read, and [`Error::InvalidImage`] if the bytes do not decode.
pub fn prepare_sketch(path: &Path) -> Result<SketchImage> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if !is_supported_extension(&extension) {
        return Err(Error::UnsupportedFileType(extension));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("sketch")
        .to_string();

    prepare_sketch_bytes(file_name, bytes)
}

/// Preprocesses already-read sketch bytes.
pub fn prepare_sketch_bytes(file_name: String, original: Vec<u8>) -> Result<SketchImage> {
    let format =
        image_rs::guess_format(&original).map_err(|e| Error::InvalidImage(e.to_string()))?;
    let decoded = image_rs::load_from_memory_with_format(&original, format)
        .map_err(|e| Error::InvalidImage(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    let (target_width, target_height) = bounded_dimensions(width, height);

    if (target_width, target_height) == (width, height) {
        // Already within bounds: upload the file as selected.
        return Ok(SketchImage {
            handle: image::Handle::from_bytes(original.clone()),
            bytes: original,
            mime: format.to_mime_type(),
            file_name,
            width,
            height,
        });
    }

    let resized = decoded.resize_exact(target_width, target_height, FilterType::Lanczos3);

    match encode(&resized, format) {
        Ok(encoded) => Ok(SketchImage {
            handle: image::Handle::from_bytes(encoded.clone()),
            bytes: encoded,
            mime: format.to_mime_type(),
            file_name,
            width: target_width,
            height: target_height,
        }),
        Err(err) => {
            // Re-encoding unsupported: fall back to the original, unresized.
            log::debug!(
                "re-encoding {:?} failed ({}), uploading original bytes",
                format,
                err
            );
            Ok(SketchImage {
                handle: image::Handle::from_bytes(original.clone()),
                bytes: original,
                mime: format.to_mime_type(),
                file_name,
                width,
                height,
            })
        }
    }
}

fn encode(image: &DynamicImage, format: ImageFormat) -> image_rs::ImageResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    if format == ImageFormat::Jpeg {
        // JPEG cannot carry an alpha channel.
        DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut out, format)?;
    } else {
        image.write_to(&mut out, format)?;
    }
    Ok(out.into_inner())
}
