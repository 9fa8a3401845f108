// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid component.
//!
//! The gallery owns one entry per scanned image file. Entries start without
//! pixel data; decode results arrive as [`Message::ImageLoaded`] and fill the
//! grid in whatever order the tasks finish. Whether an entry reacts to clicks
//! is not decided here: the view consults the zoom [`Binder`] and only bound
//! entries get a click area and the zoom-in cursor.

mod empty_state;

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::zoom::Binder;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    container, mouse_area, responsive, text, Column, Container, Row, Scrollable, Text,
};
use iced::{mouse, ContentFit, Element, Length, Size, Theme};
use std::path::{Path, PathBuf};

/// One image in the gallery.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    /// Decoded pixels, filled in once the load task finishes.
    pub image: Option<ImageData>,
    /// The decode task finished and failed.
    pub failed: bool,
    /// Marker consumed by the zoom binder. Every scanned image carries it.
    pub zoomable: bool,
}

/// Messages produced by the gallery grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A bound thumbnail was clicked.
    ImagePressed(usize),
    /// A decode task finished.
    ImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// The empty-state call to action was pressed.
    OpenFolderPressed,
}

/// Gallery grid state.
#[derive(Debug, Default)]
pub struct State {
    entries: Vec<Entry>,
    scanning: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the gallery as waiting for a directory scan.
    pub fn begin_scan(&mut self) {
        self.scanning = true;
    }

    /// Replaces the gallery content with freshly scanned paths.
    pub fn set_entries(&mut self, paths: Vec<PathBuf>) {
        self.scanning = false;
        self.entries = paths
            .into_iter()
            .map(|path| Entry {
                path,
                image: None,
                failed: false,
                zoomable: true,
            })
            .collect();
    }

    /// Marks the pending scan as failed, leaving the gallery unchanged.
    pub fn scan_failed(&mut self) {
        self.scanning = false;
    }

    /// Stores a decode result for the entry at `index`.
    pub fn set_image(&mut self, index: usize, image: ImageData) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.image = Some(image);
            entry.failed = false;
        }
    }

    /// Marks the entry at `index` as undecodable.
    pub fn mark_failed(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.failed = true;
        }
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// `(key, zoomable)` pairs for the binder's initialization pass.
    pub fn zoomable_flags(&self) -> Vec<(usize, bool)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, entry.zoomable))
            .collect()
    }

    /// Looks up decoded pixels by source path (used by the zoom dialog).
    pub fn image_for_path(&self, path: &Path) -> Option<&ImageData> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .and_then(|entry| entry.image.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    /// Renders the gallery: a scanning notice, the empty state, or the
    /// responsive thumbnail grid.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if self.scanning {
            return Container::new(
                Text::new(ctx.i18n.tr("gallery-scanning")).size(typography::TITLE_MD),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
        }

        if self.entries.is_empty() {
            return empty_state::view(ctx.i18n);
        }

        let thumbnail_size = ctx.thumbnail_size;
        responsive(move |available: Size| grid(self, &ctx, thumbnail_size, available)).into()
    }
}

/// Context required to render the gallery grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub binder: &'a Binder,
    pub thumbnail_size: f32,
}

fn grid<'a>(
    state: &'a State,
    ctx: &ViewContext<'a>,
    thumbnail_size: f32,
    available: Size,
) -> Element<'a, Message> {
    let cell = thumbnail_size + spacing::SM;
    let usable = (available.width - 2.0 * spacing::MD).max(cell);
    let columns = ((usable / cell).floor() as usize).max(1);

    let mut rows = Column::new().spacing(spacing::SM);
    let mut row = Row::new().spacing(spacing::SM);
    for (index, entry) in state.entries.iter().enumerate() {
        if index > 0 && index % columns == 0 {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::SM);
        }
        row = row.push(thumbnail_cell(entry, index, ctx, thumbnail_size));
    }
    rows = rows.push(row);

    Scrollable::new(
        Container::new(rows)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// A single cell of the grid. Bound entries are wrapped in a click area with
/// a zoom-in cursor; unbound entries render as plain tiles.
fn thumbnail_cell<'a>(
    entry: &'a Entry,
    index: usize,
    ctx: &ViewContext<'a>,
    size: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &entry.image {
        Some(image) => iced::widget::image::Image::new(image.handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        None if entry.failed => placeholder_tile(ctx.i18n.tr("gallery-image-broken"), size),
        None => placeholder_tile(file_label(&entry.path), size),
    };

    if ctx.binder.is_bound(index) {
        mouse_area(content)
            .interaction(mouse::Interaction::ZoomIn)
            .on_press(Message::ImagePressed(index))
            .into()
    } else {
        content
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("?")
        .to_string()
}

fn placeholder_tile<'a>(label: String, size: f32) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .padding(spacing::XS)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(iced::Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_entries() -> State {
        let mut state = State::new();
        state.set_entries(vec![
            PathBuf::from("/photos/a.jpg"),
            PathBuf::from("/photos/b.jpg"),
            PathBuf::from("/photos/c.jpg"),
        ]);
        state
    }

    #[test]
    fn set_entries_marks_all_images_zoomable() {
        let state = three_entries();
        assert!(state.entries().iter().all(|entry| entry.zoomable));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn set_entries_clears_scanning_flag() {
        let mut state = State::new();
        state.begin_scan();
        assert!(state.is_scanning());

        state.set_entries(Vec::new());
        assert!(!state.is_scanning());
    }

    #[test]
    fn set_image_fills_the_right_entry() {
        let mut state = three_entries();
        state.set_image(1, ImageData::from_rgba(1, 1, vec![255; 4]));

        assert!(state.entry(0).unwrap().image.is_none());
        assert!(state.entry(1).unwrap().image.is_some());
    }

    #[test]
    fn set_image_out_of_range_is_ignored() {
        let mut state = three_entries();
        state.set_image(99, ImageData::from_rgba(1, 1, vec![255; 4]));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn mark_failed_flags_entry() {
        let mut state = three_entries();
        state.mark_failed(2);
        assert!(state.entry(2).unwrap().failed);
    }

    #[test]
    fn image_for_path_finds_loaded_entry() {
        let mut state = three_entries();
        state.set_image(0, ImageData::from_rgba(2, 2, vec![0; 16]));

        assert!(state.image_for_path(Path::new("/photos/a.jpg")).is_some());
        assert!(state.image_for_path(Path::new("/photos/b.jpg")).is_none());
        assert!(state.image_for_path(Path::new("/photos/zzz.jpg")).is_none());
    }

    #[test]
    fn zoomable_flags_cover_every_entry_in_order() {
        let state = three_entries();
        assert_eq!(
            state.zoomable_flags(),
            vec![(0, true), (1, true), (2, true)]
        );
    }
}
