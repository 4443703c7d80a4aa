// SPDX-License-Identifier: MPL-2.0
//! Toast scheduling queue.
//!
//! The `ToastQueue` serializes toast requests onto a single display slot:
//! requests are shown one at a time, in enqueue order, each waiting its own
//! delay once it reaches the head of the queue and staying visible for its
//! duration.
//!
//! The queue is a passive state machine. It never sleeps and never reads the
//! clock; its owner drives it by calling [`ToastQueue::tick`] with the current
//! instant and by forwarding the host's animation completion signals. All of
//! this must happen on one execution context. Other threads talk to the queue
//! through a [`ToastSender`], whose commands are applied by
//! [`ToastQueue::process_pending`].

use super::host::{AnimationKind, AnimationSignal, ContainerHost};
use super::request::{ToastId, ToastRequest, SHORT};
use super::timer::{TimerHandle, Timers};
use crate::diagnostics::{DiagnosticsHandle, DoneReason, ToastEvent, ToastEventKind};
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Lifecycle phase of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastPhase {
    /// Waiting in the pending queue.
    Queued,
    /// At the head of the queue, waiting for its delay to elapse.
    WaitingDelay,
    /// Attached to a surface and visible.
    Showing,
    /// Dismissal animation running.
    Dismissing,
    /// Finished, dropped or cancelled; no longer tracked by the queue.
    Done,
}

/// Payload of the queue's internal timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    DelayElapsed(ToastId),
    DurationElapsed(ToastId),
}

/// The request currently occupying the display slot.
#[derive(Debug)]
pub struct ActiveToast<S> {
    id: ToastId,
    request: ToastRequest,
    phase: ToastPhase,
    surface: Option<S>,
    timer: Option<TimerHandle>,
}

impl<S> ActiveToast<S> {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn request(&self) -> &ToastRequest {
        &self.request
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Surface the toast is presented on; `None` while waiting for its delay.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }
}

/// Commands marshaled onto the queue's execution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Enqueue a request.
    Show(ToastRequest),
    /// Cancel every pending request and dismiss the active one.
    CancelAll,
    /// Forward a host animation completion.
    AnimationFinished(AnimationSignal),
}

/// Cloneable, thread-safe handle for submitting commands to a queue.
///
/// Sending never blocks. Commands take effect when the owning context calls
/// [`ToastQueue::process_pending`] (or inside [`ToastRuntime`]).
///
/// [`ToastRuntime`]: super::ToastRuntime
#[derive(Debug, Clone)]
pub struct ToastSender {
    command_tx: UnboundedSender<Command>,
}

impl ToastSender {
    /// Requests that `request` be enqueued.
    ///
    /// The command is silently dropped if the queue no longer exists.
    pub fn show(&self, request: ToastRequest) {
        let _ = self.command_tx.send(Command::Show(request));
    }

    /// Requests that all toasts be cancelled.
    pub fn cancel_all(&self) {
        let _ = self.command_tx.send(Command::CancelAll);
    }

    /// Forwards an animation completion signal from a host.
    pub fn animation_finished(&self, signal: AnimationSignal) {
        let _ = self.command_tx.send(Command::AnimationFinished(signal));
    }
}

/// FIFO queue of toast requests with a single active display slot.
///
/// `S` is the surface type of the [`ContainerHost`] driving this queue. The
/// host is never stored; every operation that may touch it borrows it.
#[derive(Debug)]
pub struct ToastQueue<S> {
    /// Requests waiting for the display slot (oldest first).
    pending: VecDeque<(ToastId, ToastRequest)>,
    /// Request occupying the display slot.
    active: Option<ActiveToast<S>>,
    timers: Timers<TimerEvent>,
    /// Duration used by [`ToastQueue::show_text`].
    default_duration: Duration,
    /// Optional diagnostics handle for lifecycle events.
    diagnostics: Option<DiagnosticsHandle>,
    command_tx: UnboundedSender<Command>,
    command_rx: UnboundedReceiver<Command>,
}

impl<S> Default for ToastQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ToastQueue<S> {
    /// Creates an idle queue.
    #[must_use]
    pub fn new() -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        Self {
            pending: VecDeque::new(),
            active: None,
            timers: Timers::new(),
            default_duration: SHORT,
            diagnostics: None,
            command_tx,
            command_rx,
        }
    }

    /// Sets the diagnostics handle for lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Sets the duration used by [`ToastQueue::show_text`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `duration` is zero.
    pub fn set_default_duration(&mut self, duration: Duration) -> Result<()> {
        if duration.is_zero() {
            return Err(Error::InvalidArgument(
                "default duration must be greater than zero".to_string(),
            ));
        }
        self.default_duration = duration;
        Ok(())
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Returns a handle for submitting commands from other contexts.
    #[must_use]
    pub fn sender(&self) -> ToastSender {
        ToastSender {
            command_tx: self.command_tx.clone(),
        }
    }

    /// Returns the toast occupying the display slot.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveToast<S>> {
        self.active.as_ref()
    }

    /// Returns the phase of the active toast.
    #[must_use]
    pub fn active_phase(&self) -> Option<ToastPhase> {
        self.active.as_ref().map(ActiveToast::phase)
    }

    /// Returns the pending requests in display order.
    pub fn pending(&self) -> impl Iterator<Item = &ToastRequest> {
        self.pending.iter().map(|(_, request)| request)
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true when nothing is active and nothing is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }

    /// Returns the phase of `id`.
    ///
    /// Toasts the queue no longer tracks (finished, dropped, cancelled or
    /// unknown) report [`ToastPhase::Done`].
    #[must_use]
    pub fn phase_of(&self, id: ToastId) -> ToastPhase {
        match &self.active {
            Some(active) if active.id == id => active.phase,
            _ if self.pending.iter().any(|(pending, _)| *pending == id) => ToastPhase::Queued,
            _ => ToastPhase::Done,
        }
    }

    /// Returns the instant at which the next timer fires.
    ///
    /// Drivers can sleep until then instead of ticking at a fixed rate.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Enqueues a request.
    ///
    /// If the queue was idle, the request immediately starts waiting for its
    /// delay; a zero delay shows it before this call returns.
    pub fn enqueue<H>(&mut self, request: ToastRequest, host: &mut H, now: Instant) -> ToastId
    where
        H: ContainerHost<Surface = S>,
    {
        let id = ToastId::new();
        self.emit(
            now,
            ToastEventKind::Enqueued {
                toast: id,
                text: request.text().to_string(),
            },
        );
        self.pending.push_back((id, request));

        if self.active.is_none() {
            self.activate_next(now);
            self.tick(host, now);
        }
        id
    }

    /// Builds a request from its parts and enqueues it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `duration` is zero. The queue is
    /// left untouched.
    pub fn show<H>(
        &mut self,
        text: impl Into<String>,
        delay: Duration,
        duration: Duration,
        host: &mut H,
        now: Instant,
    ) -> Result<ToastId>
    where
        H: ContainerHost<Surface = S>,
    {
        let request = ToastRequest::new(text, delay, duration)?;
        Ok(self.enqueue(request, host, now))
    }

    /// Enqueues `text` with no delay and the default duration.
    pub fn show_text<H>(&mut self, text: impl Into<String>, host: &mut H, now: Instant) -> ToastId
    where
        H: ContainerHost<Surface = S>,
    {
        let request = ToastRequest::with_text(text).with_duration(self.default_duration);
        self.enqueue(request, host, now)
    }

    /// Fires every timer due at `now`.
    pub fn tick<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        loop {
            let fired = self.timers.poll_expired(now);
            if fired.is_empty() {
                break;
            }
            for (handle, event) in fired {
                self.on_timer(handle, event, host, now);
            }
        }
    }

    /// Handles an animation completion signal from the host.
    ///
    /// A dismissal signal for the active toast releases its surface and moves
    /// the next pending request into the display slot. Signals that do not
    /// match the active toast and phase are stale and ignored.
    pub fn animation_finished<H>(&mut self, signal: AnimationSignal, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        let phase = match &self.active {
            Some(active) if active.id == signal.toast => Some(active.phase),
            _ => None,
        };

        match (signal.kind, phase) {
            (AnimationKind::In, Some(ToastPhase::Showing | ToastPhase::Dismissing)) => {
                tracing::trace!(toast = signal.toast.value(), "toast appeared");
            }
            (AnimationKind::Out, Some(ToastPhase::Dismissing)) => {
                self.finish_active(host, now);
                self.tick(host, now);
            }
            _ => {
                tracing::debug!(
                    toast = signal.toast.value(),
                    kind = ?signal.kind,
                    "ignoring stale animation signal"
                );
                self.emit(
                    now,
                    ToastEventKind::StaleSignal {
                        toast: signal.toast,
                        kind: signal.kind,
                    },
                );
            }
        }
    }

    /// Cancels every pending request and the active toast.
    ///
    /// Timers already due at `now` fire first: a toast whose delay elapsed
    /// before the cancel was processed has begun showing, so it runs its
    /// dismissal animation and finishes when the host signals completion.
    /// Any other active toast is detached at once without animation. Calling
    /// this on an idle queue, or again while a dismissal is in flight, does
    /// nothing.
    pub fn cancel_all<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        let before = self.active.as_ref().map(|active| (active.id, active.phase));
        self.tick(host, now);
        let raced = self.active.as_ref().is_some_and(|active| {
            active.phase == ToastPhase::Showing
                && before != Some((active.id, ToastPhase::Showing))
        });

        let active_phase = self.active_phase();
        if self.pending.is_empty() && matches!(active_phase, None | Some(ToastPhase::Dismissing))
        {
            return;
        }

        let pending_cleared = self.pending.len();
        let cleared: Vec<ToastId> = self.pending.drain(..).map(|(id, _)| id).collect();
        for toast in cleared {
            self.emit(
                now,
                ToastEventKind::Done {
                    toast,
                    reason: DoneReason::Cancelled,
                },
            );
        }

        match active_phase {
            Some(ToastPhase::Showing) if raced => self.begin_dismiss(host, now),
            Some(ToastPhase::WaitingDelay | ToastPhase::Showing) => self.discard_active(host, now),
            _ => {}
        }

        self.emit(now, ToastEventKind::CancelledAll { pending_cleared });
    }

    /// Applies a single command.
    pub fn apply<H>(&mut self, command: Command, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        match command {
            Command::Show(request) => {
                self.enqueue(request, host, now);
            }
            Command::CancelAll => self.cancel_all(host, now),
            Command::AnimationFinished(signal) => self.animation_finished(signal, host, now),
        }
    }

    /// Applies every command received through [`ToastSender`]s, in order,
    /// then fires due timers.
    pub fn process_pending<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        while let Ok(command) = self.command_rx.try_recv() {
            self.apply(command, host, now);
        }
        self.tick(host, now);
    }

    /// Hands the queue's own command sender to the caller.
    ///
    /// Afterwards the command channel closes once every [`ToastSender`] is
    /// dropped, and senders created later by [`ToastQueue::sender`] are
    /// disconnected.
    pub(crate) fn release_sender(&mut self) -> ToastSender {
        let (detached, _) = mpsc::unbounded_channel();
        ToastSender {
            command_tx: std::mem::replace(&mut self.command_tx, detached),
        }
    }

    /// Waits for the next command from a [`ToastSender`].
    pub(crate) async fn next_command(&mut self) -> Option<Command> {
        self.command_rx.recv().await
    }

    fn on_timer<H>(&mut self, handle: TimerHandle, event: TimerEvent, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        match event {
            TimerEvent::DelayElapsed(id) => {
                if !self.is_active_timer(id, handle, ToastPhase::WaitingDelay) {
                    return;
                }
                self.present_active(host, now);
            }
            TimerEvent::DurationElapsed(id) => {
                if !self.is_active_timer(id, handle, ToastPhase::Showing) {
                    return;
                }
                if let Some(active) = self.active.as_mut() {
                    active.timer = None;
                }
                self.begin_dismiss(host, now);
            }
        }
    }

    fn is_active_timer(&self, id: ToastId, handle: TimerHandle, phase: ToastPhase) -> bool {
        matches!(
            &self.active,
            Some(active) if active.id == id && active.phase == phase && active.timer == Some(handle)
        )
    }

    /// `WaitingDelay → Showing`, or `WaitingDelay → Done` if attaching fails.
    fn present_active<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.timer = None;

        match host.attach_surface(active.id, &active.request) {
            Ok(surface) => {
                host.animate_in(&surface, AnimationSignal::animated_in(active.id));
                active.surface = Some(surface);
                active.phase = ToastPhase::Showing;
                active.timer = Some(self.timers.schedule(
                    now,
                    active.request.duration(),
                    TimerEvent::DurationElapsed(active.id),
                ));
                let toast = active.id;
                self.emit(now, ToastEventKind::Showing { toast });
            }
            Err(err) => {
                let toast = active.id;
                tracing::warn!(toast = toast.value(), error = %err, "dropping toast");
                self.active = None;
                self.emit(
                    now,
                    ToastEventKind::Done {
                        toast,
                        reason: DoneReason::Dropped { error: err.kind() },
                    },
                );
                self.activate_next(now);
            }
        }
    }

    /// `Showing → Dismissing`.
    fn begin_dismiss<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if let Some(timer) = active.timer.take() {
            self.timers.cancel(timer);
        }
        active.phase = ToastPhase::Dismissing;
        if let Some(surface) = &active.surface {
            host.animate_out(surface, AnimationSignal::animated_out(active.id));
        }
        let toast = active.id;
        self.emit(now, ToastEventKind::Dismissing { toast });
    }

    /// Ends the active toast without animation, reporting it as cancelled.
    fn discard_active<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        let Some(active) = self.active.take() else {
            return;
        };
        if let Some(timer) = active.timer {
            self.timers.cancel(timer);
        }
        if let Some(surface) = active.surface {
            self.emit(now, ToastEventKind::Dismissing { toast: active.id });
            host.detach_surface(surface);
        }
        self.emit(
            now,
            ToastEventKind::Done {
                toast: active.id,
                reason: DoneReason::Cancelled,
            },
        );
    }

    /// `Dismissing → Done`, then promotes the next pending request.
    fn finish_active<H>(&mut self, host: &mut H, now: Instant)
    where
        H: ContainerHost<Surface = S>,
    {
        let Some(active) = self.active.take() else {
            return;
        };
        if let Some(surface) = active.surface {
            host.detach_surface(surface);
        }
        self.emit(
            now,
            ToastEventKind::Done {
                toast: active.id,
                reason: DoneReason::Completed,
            },
        );
        self.activate_next(now);
    }

    /// Moves the head of `pending` into the display slot and starts its delay.
    fn activate_next(&mut self, now: Instant) {
        if self.active.is_some() {
            return;
        }
        let Some((id, request)) = self.pending.pop_front() else {
            return;
        };
        let timer = self
            .timers
            .schedule(now, request.delay(), TimerEvent::DelayElapsed(id));
        self.active = Some(ActiveToast {
            id,
            request,
            phase: ToastPhase::WaitingDelay,
            surface: None,
            timer: Some(timer),
        });
        self.emit(now, ToastEventKind::WaitingDelay { toast: id });
    }

    fn emit(&self, now: Instant, kind: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(ToastEvent::new(kind, now));
        }
    }
}
