// SPDX-License-Identifier: MPL-2.0
//! Image decoding into Iced-renderable handles (PNG, JPEG, GIF, WebP, BMP).

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// File extensions the gallery treats as images.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// A decoded image ready for rendering.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Returns true when the path carries a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Loads and decodes the image at `path`.
///
/// Decoding errors and I/O errors both surface as [`crate::error::Error`];
/// the caller decides whether that means an error tile or a notification.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let (width, height) = decoded.dimensions();
    let rgba = decoded.to_rgba8();

    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}
