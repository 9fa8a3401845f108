// SPDX-License-Identifier: MPL-2.0
//! Binder state and click routing.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Modal capability the binder drives. The hosting application injects its
/// dialog component; tests inject a stand-in that records `show` calls.
pub trait Dialog {
    /// Makes the dialog visible. The display slot has already been updated
    /// when this is called.
    fn show(&mut self);
}

/// The display slot whose source is overwritten right before the dialog is
/// asked to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    source: Option<PathBuf>,
}

impl Slot {
    /// The source of the most recently clicked image, if any click happened.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn set_source(&mut self, source: PathBuf) {
        self.source = Some(source);
    }
}

/// Which fixed collaborators the hosting page provides. The binder resolves
/// both once at initialization; either one missing downgrades the whole pass
/// to a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    /// The dialog surface exists.
    pub dialog: bool,
    /// The display slot inside the dialog exists.
    pub slot: bool,
}

impl Anchors {
    /// Both collaborators present.
    pub const PRESENT: Self = Self {
        dialog: true,
        slot: true,
    };

    /// Neither collaborator present.
    pub const ABSENT: Self = Self {
        dialog: false,
        slot: false,
    };

    fn resolved(self) -> bool {
        self.dialog && self.slot
    }
}

/// Wires zoomable gallery images to the zoom dialog.
///
/// Binding happens in a single pass over the images present when
/// [`Binder::initialize`] runs; images added afterwards stay unbound until
/// the next full re-initialization (there is no dynamic re-scan).
#[derive(Debug, Default)]
pub struct Binder {
    bound: BTreeSet<usize>,
    slot: Option<Slot>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot wiring pass, run when the gallery content is ready.
    ///
    /// `images` yields `(key, zoomable)` for every image rendered at call
    /// time; only entries carrying the zoomable marker are bound. When either
    /// anchor is missing nothing is bound and no error is raised.
    ///
    /// Re-running replaces all previous bindings instead of stacking a second
    /// handler on the same image, so a repeated content-ready signal cannot
    /// double-bind.
    pub fn initialize<I>(&mut self, images: I, anchors: Anchors)
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        self.bound.clear();
        self.slot = None;

        if !anchors.resolved() {
            return;
        }

        self.slot = Some(Slot::default());
        for (key, zoomable) in images {
            if zoomable {
                self.bound.insert(key);
            }
        }
    }

    /// Whether the image with the given key received a click binding.
    pub fn is_bound(&self, key: usize) -> bool {
        self.bound.contains(&key)
    }

    /// Number of images currently bound.
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// The display slot, present only after a successful initialization.
    pub fn slot(&self) -> Option<&Slot> {
        self.slot.as_ref()
    }

    /// Click contract: copy the clicked image's source into the display slot,
    /// then ask the dialog to show. The slot write comes first so the dialog
    /// never paints a stale source. Clicks on unbound keys are ignored.
    pub fn on_image_click<D: Dialog>(&mut self, key: usize, source: &Path, dialog: &mut D) {
        if !self.is_bound(key) {
            return;
        }
        let Some(slot) = self.slot.as_mut() else {
            return;
        };

        slot.set_source(source.to_path_buf());
        dialog.show();
    }
}
