//! Per-instance carousel state.

use std::collections::BTreeSet;
use std::fmt;

use crate::motion::MotionPreference;

use super::config::CarouselConfig;
use super::gesture::{Swipe, SwipeTracker};
use super::timer::AutoplayTick;

/// Direction of a single-step advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Explicit user navigation inputs. Every one of them cancels autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    Arrow,
    Dot,
    Swipe,
    Keyboard,
}

/// Automation axis of the carousel state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Automation {
    Manual,
    Autoplaying,
}

/// Hover axis of the carousel state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Unpaused,
    Paused,
}

/// Snapshot of both state machine axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselMode {
    pub automation: Automation,
    pub hover: Hover,
}

impl CarouselMode {
    pub const MANUAL: Self = Self {
        automation: Automation::Manual,
        hover: Hover::Unpaused,
    };

    pub const PLAYING: Self = Self {
        automation: Automation::Autoplaying,
        hover: Hover::Unpaused,
    };

    pub const PAUSED: Self = Self {
        automation: Automation::Autoplaying,
        hover: Hover::Paused,
    };
}

/// Receives the new index after every navigation, manual or automatic.
pub trait ImageChangeObserver {
    fn image_changed(&mut self, index: usize);
}

impl<F: FnMut(usize)> ImageChangeObserver for F {
    fn image_changed(&mut self, index: usize) {
        self(index)
    }
}

/// State owned by one carousel instance.
///
/// `images` is never empty: an empty input is replaced by the placeholder
/// list, so `current` is always a valid slot.
pub struct CarouselState {
    images: Vec<String>,
    placeholders: Vec<String>,
    current: usize,
    auto_playing: bool,
    paused: bool,
    swipe: SwipeTracker,
    failed: BTreeSet<usize>,
    generation: u64,
    observer: Option<Box<dyn ImageChangeObserver>>,
}

impl fmt::Debug for CarouselState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselState")
            .field("images", &self.images)
            .field("current", &self.current)
            .field("auto_playing", &self.auto_playing)
            .field("paused", &self.paused)
            .field("swipe", &self.swipe)
            .field("failed", &self.failed)
            .field("generation", &self.generation)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl CarouselState {
    /// Creates the state for one carousel, substituting placeholders for an
    /// empty image list.
    pub fn new(images: Vec<String>, config: &CarouselConfig) -> Self {
        let placeholders = config.placeholders();
        let images = if images.is_empty() {
            placeholders.clone()
        } else {
            images
        };

        Self {
            images,
            placeholders,
            current: 0,
            auto_playing: config.autoplay,
            paused: false,
            swipe: SwipeTracker::new(),
            failed: BTreeSet::new(),
            generation: 0,
            observer: None,
        }
    }

    /// Attaches an observer notified with the new index after each advance.
    pub fn with_observer(mut self, observer: impl ImageChangeObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl ImageChangeObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Replaces the image list, keeping the index valid for the new length.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = if images.is_empty() {
            self.placeholders.clone()
        } else {
            images
        };
        self.current %= self.images.len();
        self.failed.clear();
        self.swipe.clear();
        self.generation += 1;
    }

    /// Images actually displayed (after placeholder substitution).
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current position in the state machine.
    pub fn mode(&self) -> CarouselMode {
        CarouselMode {
            automation: if self.auto_playing {
                Automation::Autoplaying
            } else {
                Automation::Manual
            },
            hover: if self.paused {
                Hover::Paused
            } else {
                Hover::Unpaused
            },
        }
    }

    /// Counter bumped whenever the autoplay timer must be re-armed or dropped.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Shows the next image. Shared by arrows, swipes, keys and the timer.
    pub fn next(&mut self) -> Option<usize> {
        self.advance(Direction::Forward)
    }

    /// Shows the previous image.
    pub fn previous(&mut self) -> Option<usize> {
        self.advance(Direction::Backward)
    }

    /// Explicit one-step navigation: advances and cancels autoplay.
    pub fn navigate(&mut self, direction: Direction, input: NavInput) -> Option<usize> {
        let index = self.advance(direction);
        self.stop_autoplay(input);
        index
    }

    /// Jumps to `index` and cancels autoplay. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        self.jump(index, NavInput::Dot)
    }

    /// Starts or stops autoplay. Entering autoplay always clears the hover pause.
    pub fn toggle_autoplay(&mut self) -> bool {
        self.auto_playing = !self.auto_playing;
        self.paused = false;
        self.generation += 1;
        tracing::debug!(auto_playing = self.auto_playing, "Carousel autoplay toggled");
        self.auto_playing
    }

    pub fn pointer_enter(&mut self) {
        if !self.paused {
            self.paused = true;
            self.generation += 1;
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.paused {
            self.paused = false;
            self.generation += 1;
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.swipe.touch_move(x);
    }

    /// Completes a touch gesture, navigating if it travelled past the threshold.
    pub fn touch_end(&mut self) -> Option<usize> {
        match self.swipe.touch_end()? {
            Swipe::Left => self.navigate(Direction::Forward, NavInput::Swipe),
            Swipe::Right => self.navigate(Direction::Backward, NavInput::Swipe),
        }
    }

    /// Whether the autoplay timer should be running right now.
    pub fn should_autoplay(&self, motion: MotionPreference) -> bool {
        self.auto_playing && !self.paused && self.images.len() > 1 && !motion.is_reduced()
    }

    /// Generation a timer must be armed with, or `None` if no timer should run.
    pub fn armed_generation(&self, motion: MotionPreference) -> Option<u64> {
        self.should_autoplay(motion).then_some(self.generation)
    }

    /// Applies a timer tick. Ticks from a superseded timer, or arriving while
    /// autoplay is off, are dropped.
    pub fn tick(&mut self, tick: AutoplayTick, motion: MotionPreference) -> Option<usize> {
        if tick.generation != self.generation || !self.should_autoplay(motion) {
            tracing::trace!(
                tick_generation = tick.generation,
                generation = self.generation,
                "Dropping stale autoplay tick"
            );
            return None;
        }
        self.next()
    }

    /// Records that the image in `slot` failed to load.
    pub fn mark_load_failed(&mut self, slot: usize) {
        if slot < self.images.len() && self.failed.insert(slot) {
            tracing::warn!(slot, src = %self.images[slot], "Carousel image failed to load, using placeholder");
        }
    }

    pub fn is_slot_failed(&self, slot: usize) -> bool {
        self.failed.contains(&slot)
    }

    /// URL to render for `slot`: the image itself, or the first placeholder
    /// if it failed to load.
    pub fn source_for(&self, slot: usize) -> &str {
        if self.failed.contains(&slot) {
            return self
                .placeholders
                .first()
                .map(String::as_str)
                .unwrap_or_default();
        }
        self.images.get(slot).map(String::as_str).unwrap_or_default()
    }

    pub fn current_source(&self) -> &str {
        self.source_for(self.current)
    }

    pub(super) fn jump(&mut self, index: usize, input: NavInput) -> Option<usize> {
        if index >= self.images.len() {
            tracing::debug!(index, len = self.images.len(), "Ignoring out-of-range carousel jump");
            return None;
        }
        self.current = index;
        self.stop_autoplay(input);
        self.notify();
        Some(index)
    }

    fn advance(&mut self, direction: Direction) -> Option<usize> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        self.current = match direction {
            Direction::Forward => (self.current + 1) % len,
            Direction::Backward => (self.current + len - 1) % len,
        };
        self.notify();
        Some(self.current)
    }

    fn stop_autoplay(&mut self, input: NavInput) {
        if self.auto_playing {
            self.auto_playing = false;
            self.generation += 1;
            tracing::debug!(?input, "Explicit navigation cancelled autoplay");
        }
    }

    fn notify(&mut self) {
        let index = self.current;
        if let Some(observer) = self.observer.as_mut() {
            observer.image_changed(index);
        }
    }
}
