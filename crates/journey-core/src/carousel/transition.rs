//! Slide-in transition for the visible image.

use std::time::Duration;

use crate::motion::MotionPreference;

/// Starting pose and timing for an image entering the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub enter_opacity: f64,
    pub enter_offset_px: f64,
    pub duration: Duration,
    /// Scale applied to the frame while hovered; 1.0 disables the effect.
    pub hover_scale: f64,
}

impl SlideTransition {
    pub fn for_motion(motion: MotionPreference) -> Self {
        match motion {
            MotionPreference::Full => Self {
                enter_opacity: 0.0,
                enter_offset_px: 100.0,
                duration: Duration::from_millis(300),
                hover_scale: 1.01,
            },
            MotionPreference::Reduced => Self {
                enter_opacity: 1.0,
                enter_offset_px: 0.0,
                duration: Duration::from_millis(100),
                hover_scale: 1.0,
            },
        }
    }

    /// Inline CSS custom properties consumed by the `journey-slide-in` keyframes.
    pub fn css_vars(&self) -> String {
        format!(
            "--slide-from-opacity: {}; --slide-from-x: {}px; --slide-duration: {}ms; --hover-scale: {};",
            self.enter_opacity,
            self.enter_offset_px,
            self.duration.as_millis(),
            self.hover_scale
        )
    }
}

/// Inline CSS for the autoplay progress bar fill.
pub fn progress_bar_css(interval: Duration) -> String {
    format!("animation-duration: {}ms;", interval.as_millis())
}
