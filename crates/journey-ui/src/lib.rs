//! Dioxus components for the journey timeline.
//!
//! The components only render and forward input; all behavior lives in
//! `journey-core`. Styles ship as [`SHARED_CSS`] and are injected by the
//! host into the page head.

pub mod app;
pub mod carousel;
pub mod modal;
pub mod motion;
pub mod page;
pub mod scroll;
pub mod timeline;

pub use app::JourneyApp;
pub use carousel::Carousel;
pub use modal::EventDetailModal;
pub use motion::{MOTION, MotionRoot, current_motion};
pub use page::{Footer, Hero, Navbar};
pub use scroll::{EntryRect, ScrollSnapshot};
pub use timeline::{Timeline, TimelineEntry};

/// Page styles: layout, carousel chrome, reveal blocks and keyframes.
pub const SHARED_CSS: &str = include_str!("../assets/journey.css");
