// SPDX-License-Identifier: MPL-2.0
//! Test helpers: a container host that records every call it receives.
//!
//! `RecordingHost` has no rendering at all. It hands out the toast ID as the
//! surface handle, refuses a second surface while one is attached, and keeps
//! animation completion signals until the test chooses to deliver them.
//!
//! Shared with the integration tests and benches; not part of the
//! documented API.

use crate::error::AttachError;
use crate::toast::{AnimationSignal, ContainerHost, ToastId, ToastQueue, ToastRequest};
use std::collections::VecDeque;
use std::time::Instant;

/// A call received by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Attach { toast: ToastId, text: String },
    AttachFailed { toast: ToastId, text: String },
    AnimateIn(ToastId),
    AnimateOut(ToastId),
    Detach(ToastId),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Every call, in order.
    pub calls: Vec<HostCall>,
    failing_texts: Vec<String>,
    unavailable: bool,
    attached: Option<ToastId>,
    signals: VecDeque<AnimationSignal>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `attach_surface` fail for requests with this text.
    pub fn fail_attach_for(&mut self, text: impl Into<String>) {
        self.failing_texts.push(text.into());
    }

    /// Simulates a missing display context.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Toast currently holding the surface.
    #[must_use]
    pub fn attached(&self) -> Option<ToastId> {
        self.attached
    }

    /// Texts that were successfully attached, in order.
    #[must_use]
    pub fn shown_texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Attach { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Removes and returns the undelivered completion signals.
    pub fn take_signals(&mut self) -> Vec<AnimationSignal> {
        self.signals.drain(..).collect()
    }

    /// Delivers every undelivered completion signal to `queue` at `now`.
    pub fn complete_animations(&mut self, queue: &mut ToastQueue<ToastId>, now: Instant) {
        loop {
            let signals = self.take_signals();
            if signals.is_empty() {
                break;
            }
            for signal in signals {
                queue.animation_finished(signal, self, now);
            }
        }
    }
}

impl ContainerHost for RecordingHost {
    type Surface = ToastId;

    fn attach_surface(
        &mut self,
        toast: ToastId,
        request: &ToastRequest,
    ) -> Result<ToastId, AttachError> {
        let text = request.text().to_string();
        let error = if self.unavailable {
            Some(AttachError::NoDisplayContext)
        } else if self.attached.is_some() {
            Some(AttachError::SurfaceBusy)
        } else if self.failing_texts.contains(&text) {
            Some(AttachError::Other(format!("cannot render {text}")))
        } else {
            None
        };

        if let Some(error) = error {
            self.calls.push(HostCall::AttachFailed { toast, text });
            return Err(error);
        }
        self.attached = Some(toast);
        self.calls.push(HostCall::Attach { toast, text });
        Ok(toast)
    }

    fn animate_in(&mut self, surface: &ToastId, on_complete: AnimationSignal) {
        self.calls.push(HostCall::AnimateIn(*surface));
        self.signals.push_back(on_complete);
    }

    fn animate_out(&mut self, surface: &ToastId, on_complete: AnimationSignal) {
        self.calls.push(HostCall::AnimateOut(*surface));
        self.signals.push_back(on_complete);
    }

    fn detach_surface(&mut self, surface: ToastId) {
        if self.attached == Some(surface) {
            self.attached = None;
        }
        self.calls.push(HostCall::Detach(surface));
    }
}
