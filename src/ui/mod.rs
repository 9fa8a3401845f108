// SPDX-License-Identifier: MPL-2.0
//! UI components: the thumbnail gallery, the zoom dialog, theming, and the
//! toast notification system.

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod theming;
pub mod zoom_dialog;
