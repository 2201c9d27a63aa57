//! One-shot "scrolled into view" signal.
//!
//! A section reports visibility to a [`VisibilitySignal`]; the first `true`
//! latches and later reports are ignored, so animations gated on it start
//! at most once.

use std::sync::Arc;

use tokio::sync::watch;

use crate::constants::VISIBILITY_THRESHOLD;
use crate::geometry::Rect;

/// Latched visibility flag shared between a section and its animations.
#[derive(Debug, Clone)]
pub struct VisibilitySignal {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for VisibilitySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilitySignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Records an observation. Returns true only for the report that
    /// flips the latch.
    pub fn report(&self, visible: bool) -> bool {
        if !visible {
            return false;
        }
        let latched = self.tx.send_if_modified(|seen| {
            if *seen {
                false
            } else {
                *seen = true;
                true
            }
        });
        if latched {
            tracing::debug!("section became visible");
        }
        latched
    }

    pub fn is_visible(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn watcher(&self) -> VisibilityWatcher {
        VisibilityWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

/// Receiving end used by gated mounts.
#[derive(Debug)]
pub struct VisibilityWatcher {
    rx: watch::Receiver<bool>,
}

impl VisibilityWatcher {
    /// Resolves once the signal has latched. Returns false if every
    /// signal handle was dropped before that happened.
    pub async fn wait_visible(&mut self) -> bool {
        self.rx.wait_for(|seen| *seen).await.is_ok()
    }
}

/// Viewport geometry used to decide when a section counts as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub bounds: Rect,
    /// Fraction of the element's area that must be on screen.
    pub threshold: f32,
}

impl Viewport {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            threshold: VISIBILITY_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Share of `element` inside the viewport, from 0.0 to 1.0.
    pub fn intersection_ratio(&self, element: &Rect) -> f32 {
        let area = element.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.bounds
            .intersection(element)
            .map(|overlap| (overlap.area() / area).min(1.0))
            .unwrap_or(0.0)
    }

    pub fn is_visible(&self, element: &Rect) -> bool {
        let ratio = self.intersection_ratio(element);
        ratio > 0.0 && ratio >= self.threshold
    }

    /// Checks `element` and feeds the result to `signal`. Returns true if
    /// this observation latched the signal.
    pub fn observe(&self, element: &Rect, signal: &VisibilitySignal) -> bool {
        signal.report(self.is_visible(element))
    }
}
