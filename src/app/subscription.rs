// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard paging is only wired up on the browser screen, and only for
//! events no widget captured, so arrow keys inside the search box keep
//! moving the cursor instead of the page.

use super::{Message, Screen};
use crate::ui::browser;
use iced::{event, keyboard, Subscription};

/// Creates the event subscription for the current screen.
pub(super) fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Browser => event::listen_with(|event, status, _window| {
            if matches!(status, event::Status::Captured) {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                    ..
                }) => Some(Message::Browser(browser::Message::PreviousPage)),
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                    ..
                }) => Some(Message::Browser(browser::Message::NextPage)),
                _ => None,
            }
        }),
        Screen::Settings => Subscription::none(),
    }
}
