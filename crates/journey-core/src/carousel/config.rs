//! Carousel embedding options and fixed design constants.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default autoplay interval.
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Images shown when an event has no photos of its own.
pub const PLACEHOLDER_IMAGES: [&str; 3] = [
    "/images/IMG_1.jpg",
    "/images/IMG_2.jpg",
    "/images/IMG_1.jpg",
];

/// Options a host passes when embedding a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Start in `Autoplaying` rather than `Manual`.
    pub autoplay: bool,
    /// Milliseconds between autoplay ticks.
    pub interval_ms: u64,
    /// Show the play/pause button.
    pub show_controls: bool,
    /// Show one navigation dot per image.
    pub show_dots: bool,
    /// Show the "current / total" counter.
    pub show_counter: bool,
    /// Fallback list for empty events; its first entry also replaces images
    /// that fail to load.
    pub placeholder_images: Vec<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            show_controls: true,
            show_dots: true,
            show_counter: true,
            placeholder_images: PLACEHOLDER_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CarouselConfig {
    /// Autoplay interval as a duration. A zero interval is bumped to 1ms.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    /// Configured placeholders, or the built-in list if none were configured.
    pub fn placeholders(&self) -> Vec<String> {
        if self.placeholder_images.is_empty() {
            PLACEHOLDER_IMAGES.iter().map(|s| s.to_string()).collect()
        } else {
            self.placeholder_images.clone()
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }
}
