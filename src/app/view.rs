// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery grid is the base layer; the zoom dialog and the toast overlay
//! stack on top of it when active.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::zoom_dialog;
use crate::zoom::{Binder, Slot};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub binder: &'a Binder,
    pub zoom_dialog: Option<&'a zoom_dialog::State>,
    pub notifications: &'a notifications::Manager,
    pub thumbnail_size: f32,
}

/// Renders the application view based on the current state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = ctx
        .gallery
        .view(gallery::ViewContext {
            i18n: ctx.i18n,
            binder: ctx.binder,
            thumbnail_size: ctx.thumbnail_size,
        })
        .map(Message::Gallery);

    let mut stack = Stack::new().push(base);

    if let Some(dialog) = ctx.zoom_dialog {
        if dialog.is_open() {
            // The slot was filled before the dialog was asked to show, so the
            // first paint already has the right source.
            let image = ctx
                .binder
                .slot()
                .and_then(Slot::source)
                .and_then(|source| ctx.gallery.image_for_path(source));

            stack = stack.push(
                dialog
                    .view(zoom_dialog::ViewContext {
                        i18n: ctx.i18n,
                        image,
                    })
                    .map(Message::ZoomDialog),
            );
        }
    }

    if ctx.notifications.has_notifications() {
        stack = stack.push(
            notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    stack.width(Length::Fill).height(Length::Fill).into()
}
