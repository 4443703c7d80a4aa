// SPDX-License-Identifier: MPL-2.0
//! One-shot timers on a monotonic clock.
//!
//! `Timers` does not spawn threads or sleep. The owner passes the current
//! `Instant` in and collects whatever has expired, which keeps every firing
//! on the owner's execution context and makes timing fully deterministic in
//! tests.
//!
//! Each timer carries a payload that is handed back when it fires; the payload
//! plays the role of the callback, in the same way iced components react to
//! messages rather than closures.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Stand-in delay for deadlines past the end of the platform clock.
const FAR_FUTURE: Duration = Duration::from_secs(30 * 365 * 24 * 60 * 60);

/// Handle identifying a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
    deadline: Instant,
    seq: u64,
}

impl TimerHandle {
    /// Returns the instant at which this timer fires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// A set of pending one-shot timers.
///
/// Timers fire in non-decreasing deadline order; timers sharing a deadline
/// fire in the order they were scheduled.
#[derive(Debug)]
pub struct Timers<T> {
    entries: BTreeMap<TimerHandle, T>,
    next_seq: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Timers<T> {
    /// Creates an empty timer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to fire `after` the given `now`.
    ///
    /// A delay too long for the clock to represent saturates to a deadline
    /// decades away, so the timer stays pending instead of overflowing.
    pub fn schedule(&mut self, now: Instant, after: Duration, payload: T) -> TimerHandle {
        let deadline = now
            .checked_add(after)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
        let handle = TimerHandle {
            deadline,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.insert(handle, payload);
        handle
    }

    /// Cancels a timer that has not fired yet.
    ///
    /// Returns the payload if the timer was still pending, `None` if it had
    /// already fired or been cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.entries.remove(&handle)
    }

    /// Removes and returns every timer whose deadline is at or before `now`.
    pub fn poll_expired(&mut self, now: Instant) -> Vec<(TimerHandle, T)> {
        let mut fired = Vec::new();
        while let Some(entry) = self.entries.first_entry() {
            if entry.key().deadline > now {
                break;
            }
            let (handle, payload) = entry.remove_entry();
            fired.push((handle, payload));
        }
        fired
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(TimerHandle::deadline)
    }

    /// Returns whether `handle` is still pending.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
