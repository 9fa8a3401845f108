// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::zoom_dialog;
use iced::{event, keyboard, Subscription};
use std::time::Duration;

/// Native event routing. Escape always maps to a dialog dismiss; the update
/// loop drops it when no dialog is open.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::ZoomDialog(zoom_dialog::Message::Dismiss)),
        _ => None,
    })
}

/// Periodic tick, only active while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        iced::time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
