// SPDX-License-Identifier: MPL-2.0
//! Saving generated images to disk with timestamped file names.

use crate::error::Result;
use chrono::{DateTime, Local};
use std::path::Path;

/// Builds a download file name like `face-20260823-141530.png`.
///
/// The extension is sniffed from `bytes`; unrecognizable data falls back to
/// `.png` so the dialog always proposes a usable name.
pub fn download_filename(bytes: &[u8], now: DateTime<Local>) -> String {
    let extension = image_rs::guess_format(bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or("png");
    format!("face-{}.{}", now.format("%Y%m%d-%H%M%S"), extension)
}

/// Writes `bytes` to `path` as-is.
pub fn save_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    Ok(())
}
