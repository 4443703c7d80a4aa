// SPDX-License-Identifier: MPL-2.0
//! Toast request value type.
//!
//! A `ToastRequest` describes what to show and for how long. It is validated
//! once at construction and never mutated afterwards.

use crate::error::{Error, Result};
use std::time::Duration;

/// Short display duration preset (2 seconds).
pub const SHORT: Duration = Duration::from_millis(2000);

/// Long display duration preset (3.5 seconds).
pub const LONG: Duration = Duration::from_millis(3500);

/// Identity the queue assigns to each enqueued request.
///
/// Requests compare by value, so two identical requests still need distinct
/// identities to go through two separate display cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// A request to show `text` for `duration`, after waiting `delay`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastRequest {
    text: String,
    delay: Duration,
    duration: Duration,
}

impl ToastRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `duration` is zero.
    pub fn new(text: impl Into<String>, delay: Duration, duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(Error::InvalidArgument(
                "duration must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            text: text.into(),
            delay,
            duration,
        })
    }

    /// Creates a request from fractional seconds.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `delay` is negative, `duration` is
    /// not strictly positive, or either value is not finite or too large for
    /// a `Duration`.
    pub fn from_secs_f64(text: impl Into<String>, delay: f64, duration: f64) -> Result<Self> {
        let delay = Duration::try_from_secs_f64(delay).map_err(|err| {
            Error::InvalidArgument(format!("invalid delay of {delay} seconds: {err}"))
        })?;
        let duration = Duration::try_from_secs_f64(duration).map_err(|err| {
            Error::InvalidArgument(format!("invalid duration of {duration} seconds: {err}"))
        })?;
        Self::new(text, delay, duration)
    }

    /// Creates a request with no delay and the [`SHORT`] duration.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay: Duration::ZERO,
            duration: SHORT,
        }
    }

    /// Replaces the duration with one that is already known to be positive.
    pub(crate) fn with_duration(mut self, duration: Duration) -> Self {
        debug_assert!(!duration.is_zero());
        self.duration = duration;
        self
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the delay before the toast appears once it reaches the head of the queue.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns how long the toast stays visible before dismissal starts.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
