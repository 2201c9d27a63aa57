mod counter;
mod spring;
mod tilt;
mod typewriter;

use std::time::Duration;

pub use counter::{CounterFrame, CounterStatus, CounterTiming, ProgressCounter};
pub use spring::Spring;
pub use tilt::{linear_map, normalized_offset, Rotation, TiltCard};
pub use typewriter::{CyclePhase, CyclerFrame, CyclerTiming, TextCycler};

/// A component that advances on its own timer.
///
/// The mount runtime asks for the next delay, sleeps, calls `step`, and
/// publishes the new frame. Returning `None` from `next_delay` ends the
/// timer loop.
pub trait Animated: Send + 'static {
    type Frame: Clone + Send + Sync + 'static;

    fn frame(&self) -> Self::Frame;

    fn next_delay(&self) -> Option<Duration>;

    fn step(&mut self);

    /// Called once when a visibility-gated mount becomes visible.
    fn activate(&mut self) {}
}
