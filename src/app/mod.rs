// SPDX-License-Identifier: MPL-2.0
//! Demo application showing toasts over an iced window.
//!
//! The `App` owns the queue, the overlay host that renders it, and the
//! diagnostics collector. Everything runs on the iced update loop: button
//! presses enqueue or cancel, and a tick subscription (active only while
//! something is pending or animating) fires timers and advances fades.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, ToastEventKind};
use crate::paths;
use crate::toast::{ToastQueue, LONG};
use crate::ui::{OverlayHost, OverlaySurface, Toast, ToastStyle};
use iced::widget::{button, text, Column, Container, Stack};
use iced::{alignment, window, Element, Length, Subscription, Task};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

const CONTROL_SPACING: f32 = 12.0;

/// Root iced application state.
pub struct App {
    queue: ToastQueue<OverlaySurface>,
    overlay: OverlayHost,
    style: ToastStyle,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("pending", &self.queue.pending_len())
            .field("active", &self.queue.active_phase())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());

    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default configuration");
        }
        (Self::with_config(&config, &flags), Task::none())
    }

    /// Builds the application from an already loaded configuration.
    fn with_config(config: &Config, flags: &Flags) -> Self {
        let mut style = ToastStyle::from_config(&config.style).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid [style] section, using default style");
            ToastStyle::default()
        });
        let mut position = config.style.position.unwrap_or_default();
        if let Some(edge) = flags.position {
            position.edge = edge;
        }
        style.position = position.into();

        let diagnostics = DiagnosticsCollector::new(BufferCapacity::new(
            config
                .diagnostics
                .buffer_capacity
                .unwrap_or(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        ));
        let mut queue = ToastQueue::new();
        queue.set_diagnostics(diagnostics.handle());
        if let Err(err) = queue.set_default_duration(config.timing.default_duration()) {
            tracing::warn!(%err, "keeping built-in default duration");
        }

        Self {
            queue,
            overlay: OverlayHost::new(
                iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
                config.timing.fade_duration(),
            ),
            style,
            diagnostics,
        }
    }

    fn title(&self) -> String {
        "Toaster".to_string()
    }

    fn is_busy(&self) -> bool {
        !self.queue.is_idle() || self.overlay.is_animating()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_busy()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowPressed => self.show_demo_toasts(Instant::now()),
            Message::CancelAllPressed => self.queue.cancel_all(&mut self.overlay, Instant::now()),
            Message::Tick(now) => self.advance(now),
            Message::WindowResized(size) => self.overlay.resize(size),
        }
        self.diagnostics.process_pending();
        Task::none()
    }

    fn show_demo_toasts(&mut self, now: Instant) {
        self.queue.show_text("Basic Toast", &mut self.overlay, now);

        let timed = [
            (
                "You can set duration. `Delay.short` means 2 seconds. `Delay.long` means 3.5 seconds.",
                Duration::ZERO,
                LONG,
            ),
            (
                "With delay, Toaster will be shown after delay.",
                Duration::from_secs(1),
                Duration::from_secs(5),
            ),
        ];
        for (content, delay, duration) in timed {
            if let Err(err) = self.queue.show(content, delay, duration, &mut self.overlay, now) {
                tracing::warn!(%err, "demo toast rejected");
            }
        }
    }

    /// Feeds finished fades back to the queue, then fires due timers.
    fn advance(&mut self, now: Instant) {
        for signal in self.overlay.tick(now) {
            self.queue.animation_finished(signal, &mut self.overlay, now);
        }
        self.queue.process_pending(&mut self.overlay, now);
    }

    fn status_line(&self) -> String {
        let last = self
            .diagnostics
            .iter()
            .last()
            .map_or("idle", |event| event_label(&event.kind));
        format!("Queued: {} | Last event: {last}", self.queue.pending_len())
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Column::new()
            .spacing(CONTROL_SPACING)
            .align_x(alignment::Horizontal::Center)
            .push(button(text("Show")).on_press(Message::ShowPressed))
            .push(button(text("Cancel all")).on_press(Message::CancelAllPressed))
            .push(text(self.status_line()));

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(content)
            .push(Toast::view_overlay(&self.overlay, &self.style))
            .into()
    }
}

fn event_label(kind: &ToastEventKind) -> &'static str {
    match kind {
        ToastEventKind::Enqueued { .. } => "enqueued",
        ToastEventKind::WaitingDelay { .. } => "waiting",
        ToastEventKind::Showing { .. } => "showing",
        ToastEventKind::Dismissing { .. } => "dismissing",
        ToastEventKind::Done { .. } => "done",
        ToastEventKind::CancelledAll { .. } => "cancelled",
        ToastEventKind::StaleSignal { .. } => "stale signal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Edge;
    use crate::toast::ToastPhase;

    fn app() -> App {
        App::with_config(&Config::default(), &Flags::default())
    }

    fn run_ticks(app: &mut App, start: Instant, until: Duration) {
        let mut now = start;
        while now <= start + until {
            let _ = app.update(Message::Tick(now));
            now += subscription::TICK_INTERVAL;
        }
    }

    #[test]
    fn new_app_is_idle() {
        let app = app();
        assert!(!app.is_busy());
        assert_eq!(app.title(), "Toaster");
        assert!(app.status_line().contains("idle"));
    }

    #[test]
    fn show_pressed_displays_first_toast_and_queues_the_rest() {
        let mut app = app();
        let _ = app.update(Message::ShowPressed);

        assert!(app.is_busy());
        assert_eq!(app.queue.pending_len(), 2);
        assert_eq!(app.overlay.text(), Some("Basic Toast"));
        assert_eq!(app.queue.active_phase(), Some(ToastPhase::Showing));
    }

    #[test]
    fn demo_sequence_eventually_drains() {
        let mut app = app();
        let start = Instant::now();
        app.show_demo_toasts(start);

        // 2 s + 3.5 s + (1 s delay + 5 s), plus fades.
        run_ticks(&mut app, start, Duration::from_secs(13));

        assert!(!app.is_busy());
        assert_eq!(app.overlay.text(), None);
        assert!(app.status_line().contains("done"));
    }

    #[test]
    fn cancel_all_clears_pending_requests() {
        let mut app = app();
        let _ = app.update(Message::ShowPressed);
        let _ = app.update(Message::CancelAllPressed);

        assert_eq!(app.queue.pending_len(), 0);
        assert_eq!(app.queue.active_phase(), None);
        assert_eq!(app.overlay.text(), None);
        assert!(!app.is_busy());
    }

    #[test]
    fn resize_to_zero_drops_new_toasts() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(iced::Size::ZERO));
        let _ = app.update(Message::ShowPressed);

        assert_eq!(app.overlay.text(), None);
        assert_ne!(app.queue.active_phase(), Some(ToastPhase::Showing));
    }

    #[test]
    fn position_flag_overrides_configured_edge() {
        let flags = Flags {
            position: Some(Edge::Top),
            ..Flags::default()
        };
        let app = App::with_config(&Config::default(), &flags);
        assert_eq!(app.style.position.edge(), Edge::Top);
    }
}
