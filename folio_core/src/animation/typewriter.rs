//! Hero banner typewriter.
//!
//! Types each role one character at a time, holds the full text, deletes
//! it faster than it was typed, then moves on to the next role.

use std::time::Duration;

use serde::Serialize;

use super::Animated;
use crate::constants::{DELETE_TICK_MS, HOLD_MS, TYPE_TICK_MS};

/// Pacing for the typewriter. `delete_tick` should be shorter than `type_tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclerTiming {
    pub type_tick: Duration,
    pub delete_tick: Duration,
    pub hold: Duration,
}

impl Default for CyclerTiming {
    fn default() -> Self {
        Self {
            type_tick: Duration::from_millis(TYPE_TICK_MS),
            delete_tick: Duration::from_millis(DELETE_TICK_MS),
            hold: Duration::from_millis(HOLD_MS),
        }
    }
}

/// Which way the displayed text is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CyclePhase {
    #[default]
    Typing,
    /// Full role on screen; the next step starts deleting.
    Holding,
    Deleting,
}

/// Snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CyclerFrame {
    pub text: String,
    pub role_index: usize,
    pub phase: CyclePhase,
}

/// Typewriter state over a fixed list of roles.
#[derive(Debug, Clone)]
pub struct TextCycler {
    roles: Vec<String>,
    timing: CyclerTiming,
    active: usize,
    displayed: String,
    displayed_chars: usize,
    phase: CyclePhase,
}

impl TextCycler {
    /// Builds a cycler. An empty role list yields an inert cycler that
    /// shows nothing and never asks for a timer.
    pub fn new<I, S>(roles: I, timing: CyclerTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.is_empty() {
            tracing::warn!("text cycler created with no roles; rendering nothing");
        }
        Self {
            roles,
            timing,
            active: 0,
            displayed: String::new(),
            displayed_chars: 0,
            phase: CyclePhase::Typing,
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_role(&self) -> Option<&str> {
        self.roles.get(self.active).map(String::as_str)
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn is_inert(&self) -> bool {
        self.roles.is_empty()
    }

    fn active_len(&self) -> usize {
        self.active_role().map(|r| r.chars().count()).unwrap_or(0)
    }

    /// Delay before the next step, or `None` when nothing should be scheduled.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.is_inert() {
            return None;
        }
        Some(match self.phase {
            CyclePhase::Typing => self.timing.type_tick,
            CyclePhase::Holding => self.timing.hold,
            CyclePhase::Deleting => self.timing.delete_tick,
        })
    }

    /// Applies one timer firing.
    pub fn step(&mut self) {
        if self.is_inert() {
            return;
        }

        match self.phase {
            CyclePhase::Typing => {
                let next = self
                    .active_role()
                    .and_then(|role| role.chars().nth(self.displayed_chars));
                match next {
                    Some(ch) => {
                        self.displayed.push(ch);
                        self.displayed_chars += 1;
                    }
                    None => self.phase = CyclePhase::Holding,
                }
            }
            CyclePhase::Holding => self.phase = CyclePhase::Deleting,
            CyclePhase::Deleting => {
                if self.displayed.pop().is_some() {
                    self.displayed_chars -= 1;
                } else {
                    self.active = (self.active + 1) % self.roles.len();
                    self.phase = CyclePhase::Typing;
                    tracing::debug!(role_index = self.active, "typewriter advanced to next role");
                }
            }
        }

        debug_assert!(self.displayed_chars <= self.active_len());
    }

    pub fn frame(&self) -> CyclerFrame {
        CyclerFrame {
            text: self.displayed.clone(),
            role_index: self.active,
            phase: self.phase,
        }
    }
}

impl Animated for TextCycler {
    type Frame = CyclerFrame;

    fn frame(&self) -> CyclerFrame {
        TextCycler::frame(self)
    }

    fn next_delay(&self) -> Option<Duration> {
        TextCycler::next_delay(self)
    }

    fn step(&mut self) {
        TextCycler::step(self)
    }
}
