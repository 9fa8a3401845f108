// SPDX-License-Identifier: MPL-2.0
//! Image loading for the gallery.

pub mod image;

pub use image::{is_supported_image, load_image, ImageData, SUPPORTED_EXTENSIONS};
