// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the zoom
//! dialog, and the binder that wires the two together.
//!
//! The `App` struct translates messages into side effects (directory scans,
//! image decoding, dialog opening) and keeps the zoom wiring policy close to
//! the main update loop so the click-to-zoom behavior is easy to audit: the
//! binder is (re)initialized exactly once per completed scan, and every
//! thumbnail click goes through it.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, SortOrder, DEFAULT_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE, MIN_THUMBNAIL_SIZE,
};
use crate::gallery_scanner::ImageList;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::zoom_dialog;
use crate::zoom::{Anchors, Binder};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    sort_order: SortOrder,
    thumbnail_size: f32,
    gallery: gallery::State,
    /// The dialog surface; absent when disabled in the config, in which case
    /// the binder finds no anchor and binds nothing.
    zoom_dialog: Option<zoom_dialog::State>,
    binder: Binder,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// The directory backing the current gallery, if one is open.
    gallery_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_len", &self.gallery.len())
            .field("bound", &self.binder.bound_count())
            .field("dialog_open", &self.dialog_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Ensures thumbnail sizes stay inside the supported range so persisted
/// configs cannot request nonsensical tiles.
fn clamp_thumbnail_size(value: f32) -> f32 {
    value.clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            sort_order: SortOrder::default(),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            gallery: gallery::State::new(),
            zoom_dialog: Some(zoom_dialog::State::new(true)),
            binder: Binder::new(),
            notifications: notifications::Manager::new(),
            gallery_dir: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off the startup
    /// directory scan based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.sort_order = config.gallery.sort_order.unwrap_or_default();
        app.thumbnail_size = clamp_thumbnail_size(
            config
                .gallery
                .thumbnail_size
                .unwrap_or(DEFAULT_THUMBNAIL_SIZE),
        );

        // The dialog surface only exists when enabled; without it the binder
        // has nothing to anchor to and leaves every thumbnail unbound.
        app.zoom_dialog = if config.dialog.enabled.unwrap_or(true) {
            Some(zoom_dialog::State::new(
                config.dialog.backdrop_dismiss.unwrap_or(true),
            ))
        } else {
            None
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = if let Some(dir_str) = flags.dir {
            let dir = PathBuf::from(dir_str);
            app.gallery_dir = Some(dir.clone());
            app.gallery.begin_scan();
            scan_task(dir, app.sort_order)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let folder_name = self
            .gallery_dir
            .as_ref()
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str());

        match folder_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery::Message::ImagePressed(index)) => {
                if let Some(dialog) = self.zoom_dialog.as_mut() {
                    if let Some(path) = self.gallery.entry(index).map(|entry| entry.path.clone()) {
                        self.binder.on_image_click(index, &path, dialog);
                    }
                }
                Task::none()
            }
            Message::Gallery(gallery::Message::ImageLoaded { index, result }) => {
                match result {
                    Ok(image) => self.gallery.set_image(index, image),
                    Err(_) => {
                        self.gallery.mark_failed(index);
                        self.notifications.push(notifications::Notification::warning(
                            "notification-image-load-error",
                        ));
                    }
                }
                Task::none()
            }
            Message::Gallery(gallery::Message::OpenFolderPressed) | Message::OpenFolderDialog => {
                open_folder_task()
            }
            Message::OpenFolderSelected(Some(dir)) => {
                self.gallery_dir = Some(dir.clone());
                self.gallery.begin_scan();
                scan_task(dir, self.sort_order)
            }
            Message::OpenFolderSelected(None) => Task::none(),
            Message::ScanCompleted(Ok(list)) => {
                self.gallery.set_entries(list.into_paths());

                // Single wiring pass over the freshly scanned content. A
                // later scan runs this again, replacing the old bindings.
                let anchors = if self.zoom_dialog.is_some() {
                    Anchors::PRESENT
                } else {
                    Anchors::ABSENT
                };
                self.binder
                    .initialize(self.gallery.zoomable_flags(), anchors);

                let load_tasks: Vec<Task<Message>> = self
                    .gallery
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let path = entry.path.clone();
                        Task::perform(async move { media::load_image(&path) }, move |result| {
                            Message::Gallery(gallery::Message::ImageLoaded { index, result })
                        })
                    })
                    .collect();
                Task::batch(load_tasks)
            }
            Message::ScanCompleted(Err(_)) => {
                self.gallery.scan_failed();
                self.notifications.push(notifications::Notification::warning(
                    "notification-scan-dir-error",
                ));
                Task::none()
            }
            Message::ZoomDialog(dialog_message) => {
                if let Some(dialog) = self.zoom_dialog.as_mut() {
                    dialog.handle_message(dialog_message);
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            binder: &self.binder,
            zoom_dialog: self.zoom_dialog.as_ref(),
            notifications: &self.notifications,
            thumbnail_size: self.thumbnail_size,
        })
    }

    fn dialog_open(&self) -> bool {
        self.zoom_dialog
            .as_ref()
            .map(zoom_dialog::State::is_open)
            .unwrap_or(false)
    }
}

fn scan_task(directory: PathBuf, sort_order: SortOrder) -> Task<Message> {
    Task::perform(
        async move { ImageList::scan_directory(&directory, sort_order) },
        Message::ScanCompleted,
    )
}

fn open_folder_task() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .pick_folder()
                .await
                .map(|folder| folder.path().to_path_buf())
        },
        Message::OpenFolderSelected,
    )
}
