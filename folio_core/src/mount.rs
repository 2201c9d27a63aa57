//! Timer runtime for mounted components.
//!
//! Each [`Mounted`] instance owns one tokio task that sleeps for the
//! component's next delay, steps it, and publishes the new frame on a
//! `watch` channel. Only one sleep is ever pending per instance.
//! [`Mounted::unmount`] cancels the task and waits for it to exit, so a
//! step already running on another worker finishes before it returns.
//! Dropping the handle cancels without waiting.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::animation::Animated;
use crate::visibility::{VisibilitySignal, VisibilityWatcher};

/// Handle to a component running on its own timer.
pub struct Mounted<A: Animated> {
    label: String,
    frames: watch::Receiver<A::Frame>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<A: Animated> Mounted<A> {
    /// Starts ticking immediately.
    pub fn spawn(label: impl Into<String>, component: A) -> Self {
        Self::launch(label.into(), component, None)
    }

    /// Waits for `visibility` to latch, activates the component, then ticks.
    pub fn spawn_when_visible(
        label: impl Into<String>,
        component: A,
        visibility: &VisibilitySignal,
    ) -> Self {
        Self::launch(label.into(), component, Some(visibility.watcher()))
    }

    fn launch(label: String, component: A, gate: Option<VisibilityWatcher>) -> Self {
        let (tx, rx) = watch::channel(component.frame());
        let cancel = CancellationToken::new();
        tracing::debug!(component = %label, gated = gate.is_some(), "mounted");

        let task = tokio::spawn(drive(component, tx, gate, cancel.clone()));

        Self {
            label,
            frames: rx,
            cancel,
            task: Some(task),
        }
    }

    /// Latest published frame.
    pub fn current(&self) -> A::Frame {
        self.frames.borrow().clone()
    }

    /// A receiver for consumers that want to await frames themselves.
    pub fn subscribe(&self) -> watch::Receiver<A::Frame> {
        self.frames.clone()
    }

    /// Waits for the next frame. Returns false once the component has
    /// stopped ticking and no more frames will arrive.
    pub async fn changed(&mut self) -> bool {
        self.frames.changed().await.is_ok()
    }

    /// True while the timer task is alive.
    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    /// Tears the component down. No frame is published after this returns.
    pub async fn unmount(mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        self.cancel.cancel();
        task.abort();
        match task.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => {}
            Err(e) => tracing::warn!(component = %self.label, "timer task failed: {}", e),
        }
        tracing::debug!(component = %self.label, "unmounted");
    }
}

impl<A: Animated> Drop for Mounted<A> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            self.cancel.cancel();
            task.abort();
            tracing::debug!(component = %self.label, "dropped");
        }
    }
}

async fn drive<A: Animated>(
    mut component: A,
    frames: watch::Sender<A::Frame>,
    gate: Option<VisibilityWatcher>,
    cancel: CancellationToken,
) {
    if let Some(mut gate) = gate {
        let visible = tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            visible = gate.wait_visible() => visible,
        };
        if !visible {
            return;
        }
        component.activate();
        frames.send_replace(component.frame());
    }

    while let Some(delay) = component.next_delay() {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }
        if cancel.is_cancelled() {
            return;
        }
        component.step();
        frames.send_replace(component.frame());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{CounterTiming, CyclerTiming, ProgressCounter, TextCycler};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_cycler_types_on_its_own_schedule() {
        let cycler = TextCycler::new(["Go"], CyclerTiming::default());
        let hero = Mounted::spawn("hero", cycler);
        assert_eq!(hero.current().text, "");

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(hero.current().text, "G");

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(hero.current().text, "Go");
    }

    #[tokio::test(start_paused = true)]
    async fn test_inert_cycler_finishes_without_ticking() {
        let cycler = TextCycler::new(Vec::<String>::new(), CyclerTiming::default());
        let mut hero = Mounted::spawn("hero", cycler);
        assert!(!hero.changed().await);
        assert!(!hero.is_running());
        assert_eq!(hero.current().text, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_freezes_state() {
        let counter = ProgressCounter::new(100, CounterTiming::default());
        let signal = VisibilitySignal::new();
        let skill = Mounted::spawn_when_visible("skill", counter, &signal);
        let rx = skill.subscribe();

        signal.report(true);
        tokio::time::sleep(Duration::from_millis(500)).await;
        let frozen = *rx.borrow();
        assert!(frozen.value > 0 && frozen.value < 100);

        skill.unmount().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(*rx.borrow(), frozen);
    }

    /// Steps slowly on a blocking call so a step can be caught mid-flight.
    struct SlowStepper {
        steps: u32,
        stepping: Arc<AtomicBool>,
    }

    impl Animated for SlowStepper {
        type Frame = u32;

        fn frame(&self) -> u32 {
            self.steps
        }

        fn next_delay(&self) -> Option<Duration> {
            Some(Duration::from_millis(1))
        }

        fn step(&mut self) {
            self.stepping.store(true, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(20));
            self.steps += 1;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unmount_waits_for_step_on_another_worker() {
        let stepping = Arc::new(AtomicBool::new(false));
        let mounted = Mounted::spawn(
            "slow",
            SlowStepper {
                steps: 0,
                stepping: stepping.clone(),
            },
        );
        let rx = mounted.subscribe();

        while !stepping.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        mounted.unmount().await;
        let at_unmount = *rx.borrow();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*rx.borrow(), at_unmount);
    }
}
