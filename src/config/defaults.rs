// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for user-tunable settings.

/// Default edge length of a gallery thumbnail, in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 160.0;

/// Smallest allowed thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 64.0;

/// Largest allowed thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 512.0;
