// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval used while toasts are animating or waiting.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Forwards window resizes so the overlay can follow rotation.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates the tick subscription, active only while the queue or the overlay
/// has work to do.
pub fn create_tick_subscription(busy: bool) -> Subscription<Message> {
    if busy {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
