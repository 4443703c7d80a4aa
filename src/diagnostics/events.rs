// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle event types.

use std::time::Instant;

use crate::toast::{AnimationKind, ToastId};

/// Why a toast left the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoneReason {
    /// Dismissed with its animation.
    Completed,
    /// The host could not provide a surface; the toast never appeared.
    Dropped {
        /// Machine-friendly attach error kind.
        error: &'static str,
    },
    /// Removed by `cancel_all` without a dismissal animation.
    Cancelled,
}

/// A lifecycle event with timestamp.
#[derive(Debug, Clone)]
pub struct ToastEvent {
    /// When the event occurred (queue clock, monotonic).
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: ToastEventKind,
}

impl ToastEvent {
    /// Creates a new event at `timestamp`.
    #[must_use]
    pub fn new(kind: ToastEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a toast event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEventKind {
    /// A request entered the pending queue.
    Enqueued { toast: ToastId, text: String },
    /// A request reached the head of the queue and started its delay.
    WaitingDelay { toast: ToastId },
    /// A surface was attached and the appearance animation started.
    Showing { toast: ToastId },
    /// The dismissal animation started.
    Dismissing { toast: ToastId },
    /// The toast left the queue.
    Done { toast: ToastId, reason: DoneReason },
    /// `cancel_all` was processed on a non-idle queue.
    CancelledAll { pending_cleared: usize },
    /// An animation signal arrived for a toast that is no longer in the
    /// expected phase and was ignored.
    StaleSignal { toast: ToastId, kind: AnimationKind },
}

impl ToastEventKind {
    /// Returns the toast this event concerns, if any.
    #[must_use]
    pub fn toast(&self) -> Option<ToastId> {
        match self {
            ToastEventKind::Enqueued { toast, .. }
            | ToastEventKind::WaitingDelay { toast }
            | ToastEventKind::Showing { toast }
            | ToastEventKind::Dismissing { toast }
            | ToastEventKind::Done { toast, .. }
            | ToastEventKind::StaleSignal { toast, .. } => Some(*toast),
            ToastEventKind::CancelledAll { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_accessor_returns_id_for_toast_events() {
        let id = ToastId::new();
        assert_eq!(ToastEventKind::Showing { toast: id }.toast(), Some(id));
        assert_eq!(
            ToastEventKind::Done {
                toast: id,
                reason: DoneReason::Completed
            }
            .toast(),
            Some(id)
        );
    }

    #[test]
    fn cancelled_all_has_no_toast() {
        let kind = ToastEventKind::CancelledAll { pending_cleared: 2 };
        assert_eq!(kind.toast(), None);
    }
}
