// SPDX-License-Identifier: MPL-2.0
//! Boundary between the toast queue and whatever renders toasts.
//!
//! The queue only sequences calls to a [`ContainerHost`] and reacts to the
//! completion signals it hands back. Layout, styling and orientation stay on
//! the host side.

use super::request::{ToastId, ToastRequest};
use crate::error::AttachError;

/// Which animation a completion signal refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Appearance animation.
    In,
    /// Dismissal animation.
    Out,
}

/// Completion token passed to the host with each animation request.
///
/// The host returns it to [`ToastQueue::animation_finished`] once the
/// animation ends. The toast ID lets the queue discard signals that arrive
/// after the toast was cancelled.
///
/// [`ToastQueue::animation_finished`]: super::ToastQueue::animation_finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationSignal {
    /// Toast the animation belongs to.
    pub toast: ToastId,
    /// Animation that completed.
    pub kind: AnimationKind,
}

impl AnimationSignal {
    /// Signal for the appearance animation of `toast`.
    #[must_use]
    pub fn animated_in(toast: ToastId) -> Self {
        Self {
            toast,
            kind: AnimationKind::In,
        }
    }

    /// Signal for the dismissal animation of `toast`.
    #[must_use]
    pub fn animated_out(toast: ToastId) -> Self {
        Self {
            toast,
            kind: AnimationKind::Out,
        }
    }
}

/// Environment that supplies surfaces for toasts and animates them.
pub trait ContainerHost {
    /// Opaque handle to the visual element a toast is presented on.
    type Surface;

    /// Creates a surface presenting `request` inside the container.
    ///
    /// # Errors
    ///
    /// Returns an [`AttachError`] if no surface can be produced; the queue
    /// then drops the request.
    fn attach_surface(
        &mut self,
        toast: ToastId,
        request: &ToastRequest,
    ) -> Result<Self::Surface, AttachError>;

    /// Starts the appearance animation. `on_complete` must be handed back to
    /// the queue when it ends.
    fn animate_in(&mut self, surface: &Self::Surface, on_complete: AnimationSignal);

    /// Starts the dismissal animation. `on_complete` must be handed back to
    /// the queue when it ends.
    fn animate_out(&mut self, surface: &Self::Surface, on_complete: AnimationSignal);

    /// Removes the surface from the container.
    fn detach_surface(&mut self, surface: Self::Surface);
}
