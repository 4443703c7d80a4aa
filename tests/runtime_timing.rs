// SPDX-License-Identifier: MPL-2.0
//! Runtime driver tests on a paused tokio clock.

use iced_toaster::error::AttachError;
use iced_toaster::test_utils::RecordingHost;
use iced_toaster::toast::{
    AnimationSignal, ContainerHost, ToastId, ToastQueue, ToastRequest, ToastRuntime, ToastSender,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{self, Instant};

const FADE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Attach(String, Instant),
    Detach(Instant),
}

/// Host whose fades complete after `FADE`, reported back through the
/// runtime's command channel.
struct ChannelHost {
    sender: ToastSender,
    log: Arc<Mutex<Vec<Entry>>>,
}

impl ChannelHost {
    fn finish_later(&self, signal: AnimationSignal) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            time::sleep(FADE).await;
            sender.animation_finished(signal);
        });
    }
}

impl ContainerHost for ChannelHost {
    type Surface = ToastId;

    fn attach_surface(
        &mut self,
        toast: ToastId,
        request: &ToastRequest,
    ) -> Result<ToastId, AttachError> {
        self.log
            .lock()
            .unwrap()
            .push(Entry::Attach(request.text().to_string(), Instant::now()));
        Ok(toast)
    }

    fn animate_in(&mut self, _surface: &ToastId, on_complete: AnimationSignal) {
        self.finish_later(on_complete);
    }

    fn animate_out(&mut self, _surface: &ToastId, on_complete: AnimationSignal) {
        self.finish_later(on_complete);
    }

    fn detach_surface(&mut self, _surface: ToastId) {
        self.log.lock().unwrap().push(Entry::Detach(Instant::now()));
    }
}

fn start_runtime() -> (ToastSender, ToastRuntime<ToastId>, ChannelHost, Arc<Mutex<Vec<Entry>>>) {
    let (sender, runtime) = ToastRuntime::new(ToastQueue::new());
    let log = Arc::new(Mutex::new(Vec::new()));
    let host = ChannelHost {
        sender: sender.clone(),
        log: Arc::clone(&log),
    };
    (sender, runtime, host, log)
}

#[tokio::test(start_paused = true)]
async fn three_one_second_toasts_are_serialized() {
    let (sender, runtime, host, log) = start_runtime();
    let start = Instant::now();

    for text in ["one", "two", "three"] {
        sender.show(
            ToastRequest::new(text, Duration::ZERO, Duration::from_secs(1))
                .expect("valid request"),
        );
    }

    tokio::select! {
        () = runtime.run(host) => panic!("runtime stopped while a sender is alive"),
        () = time::sleep(Duration::from_secs(6)) => {}
    }

    let log = log.lock().unwrap();
    let attaches: Vec<_> = log
        .iter()
        .filter_map(|entry| match entry {
            Entry::Attach(text, at) => Some((text.as_str(), *at)),
            Entry::Detach(_) => None,
        })
        .collect();
    assert_eq!(
        attaches.iter().map(|(text, _)| *text).collect::<Vec<_>>(),
        vec!["one", "two", "three"]
    );

    // Attach and detach strictly alternate.
    for pair in log.chunks(2) {
        assert!(matches!(pair, [Entry::Attach(..), Entry::Detach(_)]));
    }

    let Some(Entry::Detach(last_detach)) = log.last() else {
        panic!("last toast was never detached");
    };
    assert!(*last_detach - start >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn delay_is_waited_before_attaching() {
    let (sender, runtime, host, log) = start_runtime();
    let start = Instant::now();

    sender.show(
        ToastRequest::new("late", Duration::from_secs(2), Duration::from_secs(1))
            .expect("valid request"),
    );

    tokio::select! {
        () = runtime.run(host) => panic!("runtime stopped while a sender is alive"),
        () = time::sleep(Duration::from_secs(4)) => {}
    }

    let log = log.lock().unwrap();
    let Some(Entry::Attach(_, attached_at)) = log.first() else {
        panic!("toast was never attached");
    };
    assert!(*attached_at - start >= Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn cancel_all_during_delay_prevents_display() {
    let (sender, runtime, host, log) = start_runtime();

    sender.show(
        ToastRequest::new("never", Duration::from_secs(2), Duration::from_secs(1))
            .expect("valid request"),
    );
    let canceller = sender.clone();

    tokio::select! {
        () = runtime.run(host) => panic!("runtime stopped while a sender is alive"),
        () = async {
            time::sleep(Duration::from_secs(1)).await;
            canceller.cancel_all();
            time::sleep(Duration::from_secs(4)).await;
        } => {}
    }

    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancel_all_detaches_visible_toast_at_once() {
    let (sender, runtime, host, log) = start_runtime();
    let start = Instant::now();

    sender.show(
        ToastRequest::new("visible", Duration::ZERO, Duration::from_secs(5))
            .expect("valid request"),
    );
    let canceller = sender.clone();

    tokio::select! {
        () = runtime.run(host) => panic!("runtime stopped while a sender is alive"),
        () = async {
            time::sleep(Duration::from_secs(1)).await;
            canceller.cancel_all();
            time::sleep(Duration::from_secs(1)).await;
        } => {}
    }

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    let Some(Entry::Detach(detached_at)) = log.last() else {
        panic!("toast was never detached");
    };
    assert!(*detached_at - start < Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn runtime_stops_when_senders_are_dropped() {
    let (sender, runtime) = ToastRuntime::new(ToastQueue::new());
    sender.show(ToastRequest::with_text("last words"));
    drop(sender);

    let finished = time::timeout(Duration::from_secs(10), runtime.run(RecordingHost::new())).await;
    assert!(finished.is_ok());
}
