// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native pointer, keyboard and window events are forwarded as top-level
//! messages; the feed derives enter/leave from them. The tick runs only
//! while something is waiting on a deadline.

use super::Message;
use crate::config::TIMER_TICK_MS;
use iced::{event, keyboard, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Interval for coarse deadlines (hero auto-advance, toast expiry).
const SLOW_TICK: Duration = Duration::from_millis(200);

/// Routes the native events the feed and the header care about.
///
/// Events are forwarded whatever their capture status; the feed tracks the
/// cursor over the preview's buttons too.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::LeftClick)
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Escape),
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Fast tick while a short deadline is armed, slow tick for coarse ones,
/// nothing otherwise.
pub fn create_tick_subscription(short_pending: bool, coarse_pending: bool) -> Subscription<Message> {
    if short_pending {
        time::every(Duration::from_millis(TIMER_TICK_MS)).map(Message::Tick)
    } else if coarse_pending {
        time::every(SLOW_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
