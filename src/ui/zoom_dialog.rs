// SPDX-License-Identifier: MPL-2.0
//! Modal dialog that shows the enlarged version of a clicked thumbnail.
//!
//! The dialog owns its open/closed state and all dismissal mechanics (close
//! button, backdrop click, Escape handled by the app's event subscription).
//! Opening it goes exclusively through [`zoom::Dialog::show`], which the
//! binder calls after the display slot has been updated.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::zoom;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, text, Column, Container, Text};
use iced::{Color, ContentFit, Element, Length, Theme};

/// Messages produced by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close the dialog (close button, backdrop click, or Escape).
    Dismiss,
}

/// Dialog state.
#[derive(Debug)]
pub struct State {
    open: bool,
    backdrop_dismiss: bool,
}

impl State {
    pub fn new(backdrop_dismiss: bool) -> Self {
        Self {
            open: false,
            backdrop_dismiss,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss => self.open = false,
        }
    }

    /// Renders the dialog overlay. `image` is the decoded content for the
    /// display slot's current source; `None` renders a loading line.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let content: Element<'a, Message> = match ctx.image {
            Some(image) => iced::widget::image::Image::new(image.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            None => Text::new(ctx.i18n.tr("zoom-dialog-loading"))
                .size(typography::TITLE_MD)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WHITE),
                })
                .into(),
        };

        let close_button = button(Text::new("✕").size(typography::TITLE_MD))
            .on_press(Message::Dismiss)
            .padding(spacing::XS)
            .style(close_button_style);

        let layout = Column::new()
            .push(
                Container::new(close_button)
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .align_x(Horizontal::Right),
            )
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::LG)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );

        let surface = Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(backdrop_style);

        if self.backdrop_dismiss {
            mouse_area(surface).on_press(Message::Dismiss).into()
        } else {
            surface.into()
        }
    }
}

impl zoom::Dialog for State {
    fn show(&mut self) {
        self.open = true;
    }
}

/// Context required to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: Option<&'a ImageData>,
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background_alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(iced::Background::Color(Color {
            a: background_alpha,
            ..palette::GRAY_700
        })),
        text_color: palette::WHITE,
        ..button::Style::default()
    }
}
