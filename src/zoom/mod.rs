// SPDX-License-Identifier: MPL-2.0
//! Click-to-zoom wiring between gallery images and the zoom dialog.
//!
//! The [`Binder`] resolves its collaborators once when the gallery content is
//! ready, marks every zoomable image as clickable, and routes clicks into the
//! dialog: the display slot is filled with the clicked image's source first,
//! then the dialog is asked to show. The dialog itself (backdrop, dismissal,
//! animation) lives in `ui::zoom_dialog` and is reached only through the
//! [`Dialog`] trait so the binder can be tested without rendering anything.

mod binder;

pub use binder::{Anchors, Binder, Dialog, Slot};
