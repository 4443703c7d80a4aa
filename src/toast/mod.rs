// SPDX-License-Identifier: MPL-2.0
//! Toast scheduling.
//!
//! This module contains everything that decides *when* a toast is shown,
//! independently of how it is drawn.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` value type and duration presets
//! - [`timer`] - one-shot timers on a monotonic clock
//! - [`host`] - `ContainerHost` trait implemented by rendering layers
//! - [`queue`] - `ToastQueue`, the single-slot FIFO state machine
//! - [`runtime`] - tokio driver for headless or background use
//!
//! # Usage
//!
//! ```
//! use iced_toaster::test_utils::RecordingHost;
//! use iced_toaster::toast::{ToastPhase, ToastQueue, ToastRequest, LONG};
//! use std::time::{Duration, Instant};
//!
//! let mut host = RecordingHost::new();
//! let mut queue = ToastQueue::new();
//! let now = Instant::now();
//!
//! let id = queue.enqueue(ToastRequest::with_text("Saved"), &mut host, now);
//! queue.show("Later", Duration::from_secs(1), LONG, &mut host, now).unwrap();
//!
//! assert_eq!(queue.phase_of(id), ToastPhase::Showing);
//! assert_eq!(queue.pending_len(), 1);
//! ```

pub mod host;
pub mod queue;
pub mod request;
pub mod runtime;
pub mod timer;

pub use host::{AnimationKind, AnimationSignal, ContainerHost};
pub use queue::{ActiveToast, Command, ToastPhase, ToastQueue, ToastSender};
pub use request::{ToastId, ToastRequest, LONG, SHORT};
pub use runtime::ToastRuntime;
pub use timer::{TimerHandle, Timers};
