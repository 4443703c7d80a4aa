// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Edge;
use iced::Size;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Enqueue the demo toasts.
    ShowPressed,
    /// Cancel every pending and displayed toast.
    CancelAllPressed,
    /// Periodic tick driving timers and fades while toasts are active.
    Tick(Instant),
    /// The window was resized or rotated.
    WindowResized(Size),
}

/// Runtime flags passed from the launcher into `App::new`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional edge override from `--position`.
    pub position: Option<Edge>,
}
