// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating toast lifecycle events.
//!
//! The queue logs through a cheap, cloneable [`DiagnosticsHandle`]; the
//! collector drains the channel into a bounded history on demand, evicting
//! the oldest events once it is full.

use std::collections::VecDeque;
use tokio::sync::mpsc::{self, error::TrySendError, Receiver, Sender};

use super::ToastEvent;
use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

/// Default channel capacity for event buffering.
/// This allows some buffering without excessive memory usage.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Number of events the collector keeps, clamped to the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

/// Handle for sending toast events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel so logging never blocks the queue.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log(&self, event: ToastEvent) {
        let _ = self.event_tx.try_send(event);
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Closed` if the collector has been dropped.
    pub fn try_log(&self, event: ToastEvent) -> Result<(), TrySendError<ToastEvent>> {
        self.event_tx.try_send(event)
    }
}

/// Central collector for toast events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    events: VecDeque<ToastEvent>,
    capacity: usize,
    event_rx: Receiver<ToastEvent>,
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);

        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if self.events.len() >= self.capacity {
                self.events.pop_front();
            }
            self.events.push_back(event);
        }
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &ToastEvent> {
        self.events.iter()
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the maximum number of stored events.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
