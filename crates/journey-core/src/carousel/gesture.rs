//! Horizontal swipe detection.

use super::config::SWIPE_THRESHOLD_PX;

/// A completed swipe gesture, named by the direction the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next image.
    Left,
    /// Finger moved right: show the previous image.
    Right,
}

impl Swipe {
    /// Classifies `start - end`. Travel of exactly the threshold is not a swipe.
    pub fn classify(distance: f64) -> Option<Self> {
        if distance > SWIPE_THRESHOLD_PX {
            Some(Self::Left)
        } else if distance < -SWIPE_THRESHOLD_PX {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// Transient touch coordinates for one gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<f64>,
    end: Option<f64>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first contact point and forgets any stale end point.
    pub fn touch_start(&mut self, x: f64) {
        self.end = None;
        self.start = Some(x);
    }

    /// Records the latest contact point.
    pub fn touch_move(&mut self, x: f64) {
        self.end = Some(x);
    }

    /// Finishes the gesture and clears both coordinates.
    ///
    /// A tap (start without any move) never navigates.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let start = self.start.take();
        let end = self.end.take();
        match (start, end) {
            (Some(start), Some(end)) => Swipe::classify(start - end),
            _ => None,
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}
