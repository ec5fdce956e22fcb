// SPDX-License-Identifier: MPL-2.0
//! In-memory image artifacts and the preprocessing applied before upload.

pub mod export;
pub mod preprocess;

use iced::widget::image;

/// File extensions accepted for sketches, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// The user's selected sketch after preprocessing, ready for display and upload.
///
/// The `handle` is the only display reference to the sketch; dropping the
/// struct releases it. At most one `SketchImage` is live at a time.
#[derive(Debug, Clone)]
pub struct SketchImage {
    pub handle: image::Handle,
    /// Encoded bytes sent to the generation endpoint.
    pub bytes: Vec<u8>,
    pub mime: &'static str,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl SketchImage {
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }
}

/// Returns whether `extension` (any case) is an accepted sketch format.
pub fn is_supported_extension(extension: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|e| extension.eq_ignore_ascii_case(e))
}
