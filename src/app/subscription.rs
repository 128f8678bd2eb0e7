// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer and touch input reaches the wall through its canvas. Only the
//! window-level events the canvas cannot see are routed from here.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

/// Window size changes and the Escape key.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        _ => None,
    })
}
