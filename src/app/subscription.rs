// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions exist: a native event listener for Escape and dropped
//! files, and a periodic tick that only runs while something actually needs
//! it. Gating the tick on demand is what guarantees no timer outlives the
//! submission or toast that started it.

use super::Message;
use iced::keyboard;
use iced::{event, time, Subscription};
use std::time::Duration;

/// How often the tick subscription fires while active.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for Escape and file drops at the window level.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = &event
        {
            // Widgets that consumed the key (e.g. a focused input) win.
            return match status {
                event::Status::Ignored => Some(Message::EscapePressed),
                event::Status::Captured => None,
            };
        }

        None
    })
}

/// Creates a periodic tick subscription for simulated progress, the spinner,
/// and notification auto-dismiss.
///
/// Returns [`Subscription::none`] when nothing is animating so no timer runs
/// in the idle state.
pub fn create_tick_subscription(
    is_submitting: bool,
    is_preparing: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_submitting || is_preparing || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
