use std::time::Duration;

use serde::Serialize;

use super::Animated;
use crate::constants::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

/// How long a counter takes to reach its target, and how often it ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTiming {
    pub duration: Duration,
    pub tick: Duration,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(COUNTER_DURATION_MS),
            tick: Duration::from_millis(COUNTER_TICK_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CounterStatus {
    /// Not yet started; waiting for the section to become visible.
    Waiting,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterFrame {
    pub value: u8,
    pub target: u8,
    pub finished: bool,
}

/// Counts a skill percentage up from zero once its section is on screen.
#[derive(Debug, Clone)]
pub struct ProgressCounter {
    target: u8,
    timing: CounterTiming,
    value: u8,
    accumulator: f64,
    increment: f64,
    status: CounterStatus,
}

impl ProgressCounter {
    /// Levels above 100 are clamped. A zero target is finished immediately.
    pub fn new(target: u8, timing: CounterTiming) -> Self {
        let target = target.min(100);
        Self {
            target,
            timing,
            value: 0,
            accumulator: 0.0,
            increment: 0.0,
            status: if target == 0 {
                CounterStatus::Finished
            } else {
                CounterStatus::Waiting
            },
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn status(&self) -> CounterStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == CounterStatus::Finished
    }

    /// Begins counting. Has no effect once started or finished. A duration
    /// no longer than one tick still waits a tick, then snaps to the target.
    pub fn start(&mut self) {
        if self.status != CounterStatus::Waiting {
            return;
        }

        let ticks = self.timing.duration.as_secs_f64() / self.timing.tick.as_secs_f64();
        if !ticks.is_finite() || ticks <= 0.0 {
            self.finish();
            return;
        }

        self.increment = f64::from(self.target) / ticks;
        self.status = CounterStatus::Running;
    }

    /// Applies one tick. Returns true while the counter is still running.
    pub fn tick(&mut self) -> bool {
        if self.status != CounterStatus::Running {
            return false;
        }

        self.accumulator += self.increment;
        if self.accumulator >= f64::from(self.target) {
            self.finish();
            return false;
        }

        // accumulator < target here, so the floor stays below it
        self.value = (self.accumulator.floor() as u8).min(self.target);
        true
    }

    fn finish(&mut self) {
        self.value = self.target;
        self.status = CounterStatus::Finished;
        tracing::debug!(target_level = self.target, "skill counter finished");
    }

    pub fn next_delay(&self) -> Option<Duration> {
        match self.status {
            CounterStatus::Running => Some(self.timing.tick),
            _ => None,
        }
    }

    pub fn frame(&self) -> CounterFrame {
        CounterFrame {
            value: self.value,
            target: self.target,
            finished: self.is_finished(),
        }
    }
}

impl Animated for ProgressCounter {
    type Frame = CounterFrame;

    fn frame(&self) -> CounterFrame {
        ProgressCounter::frame(self)
    }

    fn next_delay(&self) -> Option<Duration> {
        ProgressCounter::next_delay(self)
    }

    fn step(&mut self) {
        self.tick();
    }

    fn activate(&mut self) {
        self.start();
    }
}
