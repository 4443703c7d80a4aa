// SPDX-License-Identifier: MPL-2.0
//! Overlay host: the iced implementation of [`ContainerHost`].
//!
//! The host owns at most one surface, the toast label drawn above the window
//! content. Fades are linear in opacity and advance only when the
//! application calls [`OverlayHost::tick`]; a fade starts at the first tick
//! after it is requested.

use crate::error::AttachError;
use crate::toast::{AnimationSignal, ContainerHost, ToastId, ToastRequest};
use iced::Size;
use std::time::{Duration, Instant};

/// Handle to the label attached by [`OverlayHost`].
#[derive(Debug, PartialEq, Eq)]
pub struct OverlaySurface {
    toast: ToastId,
}

impl OverlaySurface {
    #[must_use]
    pub fn toast(&self) -> ToastId {
        self.toast
    }
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    from: f32,
    to: f32,
    started: Option<Instant>,
    on_complete: AnimationSignal,
}

#[derive(Debug)]
struct Attached {
    toast: ToastId,
    text: String,
    opacity: f32,
    fade: Option<Fade>,
}

/// Single-slot overlay drawn above the window content.
#[derive(Debug)]
pub struct OverlayHost {
    size: Size,
    fade_duration: Duration,
    attached: Option<Attached>,
}

impl OverlayHost {
    #[must_use]
    pub fn new(size: Size, fade_duration: Duration) -> Self {
        Self {
            size,
            fade_duration,
            attached: None,
        }
    }

    /// Updates the container size after a resize or rotation.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }

    /// Text of the attached toast.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.attached.as_ref().map(|attached| attached.text.as_str())
    }

    /// Current opacity of the attached toast, `0.0` when nothing is attached.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.attached
            .as_ref()
            .map_or(0.0, |attached| attached.opacity)
    }

    /// Returns true while a fade is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.attached
            .as_ref()
            .is_some_and(|attached| attached.fade.is_some())
    }

    /// Advances the running fade and returns the signals of fades that
    /// finished.
    ///
    /// The caller forwards each signal to the queue.
    pub fn tick(&mut self, now: Instant) -> Vec<AnimationSignal> {
        let mut finished = Vec::new();
        let Some(attached) = self.attached.as_mut() else {
            return finished;
        };
        let Some(fade) = attached.fade.as_mut() else {
            return finished;
        };

        let started = *fade.started.get_or_insert(now);
        let progress = if self.fade_duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(started).as_secs_f32()
                / self.fade_duration.as_secs_f32())
            .min(1.0)
        };
        attached.opacity = fade.from + (fade.to - fade.from) * progress;

        if progress >= 1.0 {
            finished.push(fade.on_complete);
            attached.fade = None;
        }
        finished
    }

    fn start_fade(&mut self, surface: &OverlaySurface, to: f32, on_complete: AnimationSignal) {
        let Some(attached) = self
            .attached
            .as_mut()
            .filter(|attached| attached.toast == surface.toast)
        else {
            tracing::debug!(toast = surface.toast.value(), "fade requested for detached surface");
            return;
        };
        attached.fade = Some(Fade {
            from: attached.opacity,
            to,
            started: None,
            on_complete,
        });
    }
}

impl ContainerHost for OverlayHost {
    type Surface = OverlaySurface;

    fn attach_surface(
        &mut self,
        toast: ToastId,
        request: &ToastRequest,
    ) -> Result<Self::Surface, AttachError> {
        if self.size.width <= 0.0 || self.size.height <= 0.0 {
            return Err(AttachError::NoDisplayContext);
        }
        if self.attached.is_some() {
            return Err(AttachError::SurfaceBusy);
        }
        self.attached = Some(Attached {
            toast,
            text: request.text().to_string(),
            opacity: 0.0,
            fade: None,
        });
        Ok(OverlaySurface { toast })
    }

    fn animate_in(&mut self, surface: &Self::Surface, on_complete: AnimationSignal) {
        self.start_fade(surface, 1.0, on_complete);
    }

    fn animate_out(&mut self, surface: &Self::Surface, on_complete: AnimationSignal) {
        self.start_fade(surface, 0.0, on_complete);
    }

    fn detach_surface(&mut self, surface: Self::Surface) {
        if self
            .attached
            .as_ref()
            .is_some_and(|attached| attached.toast == surface.toast)
        {
            self.attached = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastPhase, ToastQueue};

    const FADE: Duration = Duration::from_millis(200);

    fn host() -> OverlayHost {
        OverlayHost::new(Size::new(400.0, 600.0), FADE)
    }

    fn attach(host: &mut OverlayHost, text: &str) -> (ToastId, OverlaySurface) {
        let toast = ToastId::new();
        let surface = host
            .attach_surface(toast, &ToastRequest::with_text(text))
            .expect("attach should succeed");
        (toast, surface)
    }

    #[test]
    fn attach_fails_without_display_area() {
        let mut host = OverlayHost::new(Size::ZERO, FADE);
        let result = host.attach_surface(ToastId::new(), &ToastRequest::with_text("hi"));
        assert_eq!(result, Err(AttachError::NoDisplayContext));
    }

    #[test]
    fn second_attach_reports_busy_surface() {
        let mut host = host();
        let _ = attach(&mut host, "first");
        let result = host.attach_surface(ToastId::new(), &ToastRequest::with_text("second"));
        assert_eq!(result, Err(AttachError::SurfaceBusy));
        assert_eq!(host.text(), Some("first"));
    }

    #[test]
    fn fade_in_is_linear_and_signals_once() {
        let mut host = host();
        let (toast, surface) = attach(&mut host, "hello");
        host.animate_in(&surface, AnimationSignal::animated_in(toast));

        let start = Instant::now();
        assert!(host.tick(start).is_empty());
        assert_eq!(host.opacity(), 0.0);

        assert!(host.tick(start + FADE / 2).is_empty());
        assert!((host.opacity() - 0.5).abs() < 0.01);

        let signals = host.tick(start + FADE);
        assert_eq!(signals, vec![AnimationSignal::animated_in(toast)]);
        assert_eq!(host.opacity(), 1.0);
        assert!(!host.is_animating());
        assert!(host.tick(start + FADE * 2).is_empty());
    }

    #[test]
    fn fade_out_starts_from_current_opacity() {
        let mut host = host();
        let (toast, surface) = attach(&mut host, "hello");
        let start = Instant::now();

        host.animate_in(&surface, AnimationSignal::animated_in(toast));
        host.tick(start);
        host.tick(start + FADE / 2);

        host.animate_out(&surface, AnimationSignal::animated_out(toast));
        let resumed = start + FADE / 2;
        host.tick(resumed);
        assert!((host.opacity() - 0.5).abs() < 0.01);

        let signals = host.tick(resumed + FADE);
        assert_eq!(signals, vec![AnimationSignal::animated_out(toast)]);
        assert_eq!(host.opacity(), 0.0);
    }

    #[test]
    fn zero_fade_completes_on_next_tick() {
        let mut host = OverlayHost::new(Size::new(100.0, 100.0), Duration::ZERO);
        let (toast, surface) = attach(&mut host, "instant");
        host.animate_in(&surface, AnimationSignal::animated_in(toast));

        assert_eq!(host.tick(Instant::now()).len(), 1);
        assert_eq!(host.opacity(), 1.0);
    }

    #[test]
    fn detach_ignores_foreign_surfaces() {
        let mut host = host();
        let (_, surface) = attach(&mut host, "kept");
        host.detach_surface(OverlaySurface {
            toast: ToastId::new(),
        });
        assert_eq!(host.text(), Some("kept"));

        host.detach_surface(surface);
        assert_eq!(host.text(), None);
        assert_eq!(host.opacity(), 0.0);
    }

    #[test]
    fn resize_to_zero_blocks_new_toasts() {
        let mut host = host();
        host.resize(Size::new(0.0, 300.0));
        let result = host.attach_surface(ToastId::new(), &ToastRequest::with_text("hidden"));
        assert_eq!(result, Err(AttachError::NoDisplayContext));
    }

    #[test]
    fn drives_queue_through_full_lifecycle() {
        let mut host = host();
        let mut queue = ToastQueue::new();
        let start = Instant::now();

        let id = queue.enqueue(ToastRequest::with_text("Basic Toast"), &mut host, start);
        assert_eq!(queue.phase_of(id), ToastPhase::Showing);
        assert_eq!(host.text(), Some("Basic Toast"));

        let mut now = start;
        let end = start + Duration::from_secs(3);
        while now <= end {
            for signal in host.tick(now) {
                queue.animation_finished(signal, &mut host, now);
            }
            queue.tick(&mut host, now);
            now += Duration::from_millis(16);
        }

        assert_eq!(queue.phase_of(id), ToastPhase::Done);
        assert!(queue.is_idle());
        assert_eq!(host.text(), None);
    }
}
