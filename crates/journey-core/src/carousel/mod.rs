//! Image carousel state machine.
//!
//! A carousel presents one image at a time from a list and advances either on
//! a timer or on user input. Automation and hover are two independent axes:
//!
//! ```text
//! Manual.*             no timer armed
//! Autoplaying.Unpaused timer armed, ticks advance the index
//! Autoplaying.Paused   timer disarmed while hovered, resumes on leave
//! ```
//!
//! Toggling autoplay always enters `Unpaused`. Any explicit navigation (dot,
//! arrow, swipe, keyboard) leaves `Autoplaying` for `Manual`; hover only
//! pauses.

mod a11y;
mod config;
mod gesture;
mod state;
mod timer;
mod transition;

pub use a11y::{CarouselKey, DotTarget, KeyCommand, KeyOrigin};
pub use config::{CarouselConfig, DEFAULT_INTERVAL_MS, PLACEHOLDER_IMAGES, SWIPE_THRESHOLD_PX};
pub use gesture::{Swipe, SwipeTracker};
pub use state::{
    Automation, CarouselMode, CarouselState, Direction, Hover, ImageChangeObserver, NavInput,
};
pub use timer::{AutoplayTick, AutoplayTimer};
pub use transition::{SlideTransition, progress_bar_css};
