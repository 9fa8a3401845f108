// SPDX-License-Identifier: MPL-2.0
//! Empty state shown when no folder is open or the folder holds no images.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let open_button = button(Text::new(i18n.tr("gallery-open-folder")).size(typography::BODY))
        .on_press(Message::OpenFolderPressed)
        .padding(spacing::SM);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("gallery-empty-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("gallery-empty-subtitle")).size(typography::BODY))
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
