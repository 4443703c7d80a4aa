// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording toast lifecycle events.
//!
//! The queue reports every state transition, dropped request and ignored
//! signal here, so that applications can inspect what happened after the
//! fact without the queue ever blocking on a logger.
//!
//! # Architecture
//!
//! - [`ToastEvent`]: Timestamped lifecycle event
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-backed sink
//!   with a bounded history

mod collector;
mod events;

pub use collector::{BufferCapacity, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DoneReason, ToastEvent, ToastEventKind};
