// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery_scanner::ImageList;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::zoom_dialog;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    ZoomDialog(zoom_dialog::Message),
    Notification(notifications::Message),
    /// Result from the one-shot directory scan.
    ScanCompleted(Result<ImageList, Error>),
    /// Open the system folder picker.
    OpenFolderDialog,
    /// Result from the folder picker.
    OpenFolderSelected(Option<PathBuf>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory to scan on startup.
    pub dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
