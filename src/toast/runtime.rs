// SPDX-License-Identifier: MPL-2.0
//! Async driver that owns a queue and a host on a single tokio task.
//!
//! The driver sleeps until the queue's next timer deadline or the next
//! command, whichever comes first, so there is no fixed-rate polling. Every
//! state transition happens on the driver task; other tasks and threads only
//! send commands through a [`ToastSender`].
//!
//! Time is read from `tokio::time`, which lets tests run on a paused clock.

use super::host::ContainerHost;
use super::queue::{ToastQueue, ToastSender};
use std::time::Instant;
use tokio::time;

/// Runs a [`ToastQueue`] until every [`ToastSender`] connected to it is
/// dropped.
#[derive(Debug)]
pub struct ToastRuntime<S> {
    queue: ToastQueue<S>,
}

impl<S> ToastRuntime<S> {
    /// Wraps `queue` and returns a sender connected to it.
    #[must_use]
    pub fn new(mut queue: ToastQueue<S>) -> (ToastSender, Self) {
        let sender = queue.release_sender();
        (sender, Self { queue })
    }

    /// Drives the queue with `host`.
    ///
    /// The host reports animation completions through a [`ToastSender`]
    /// (see [`ToastSender::animation_finished`]). Returns once the command
    /// channel closes, which means every sender must be dropped, including
    /// any the host itself holds for reporting completions. A host that keeps
    /// a sender for its whole lifetime makes `run` loop until the task is
    /// aborted or the future is dropped.
    ///
    /// A command that arrives while a timer is also due is applied first;
    /// [`ToastQueue::cancel_all`] fires the due timer itself before
    /// cancelling, so a delay that elapsed first still wins.
    pub async fn run<H>(mut self, mut host: H)
    where
        H: ContainerHost<Surface = S>,
    {
        loop {
            match self.queue.next_deadline() {
                Some(deadline) => {
                    tokio::select! {
                        biased;

                        command = self.queue.next_command() => {
                            let Some(command) = command else { return };
                            let at = now();
                            self.queue.apply(command, &mut host, at);
                            self.queue.tick(&mut host, at);
                        }
                        () = time::sleep_until(time::Instant::from_std(deadline)) => {
                            self.queue.tick(&mut host, now());
                        }
                    }
                }
                None => {
                    let Some(command) = self.queue.next_command().await else {
                        return;
                    };
                    self.queue.apply(command, &mut host, now());
                }
            }
        }
    }
}

fn now() -> Instant {
    time::Instant::now().into_std()
}
