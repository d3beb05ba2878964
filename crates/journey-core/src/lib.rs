//! Core state for the journey timeline
//!
//! This crate holds everything in the timeline that has real behavior and no
//! markup:
//!
//! - **Event records**: the read-only list of past events the page renders
//! - **Carousel**: a cyclic image index with autoplay, hover pause, swipe
//!   gestures, keyboard navigation and per-slot image fallback
//! - **Autoplay timer**: a cancellable tokio ticker feeding the carousel
//! - **Reveal sequencer**: scroll-linked, step-ordered entrance animation for
//!   each timeline entry
//! - **Site config**: TOML configuration shared by the UI and the binary
//!
//! # Quick Start
//!
//! ```
//! use journey_core::carousel::{CarouselConfig, CarouselState};
//!
//! let mut carousel = CarouselState::new(Vec::new(), &CarouselConfig::default());
//! assert_eq!(carousel.counter_label(), "1 / 3");
//! carousel.next();
//! assert_eq!(carousel.current_index(), 1);
//! ```

pub mod carousel;
pub mod config;
pub mod error;
pub mod event;
pub mod motion;
pub mod reveal;

pub use carousel::{
    AutoplayTick, AutoplayTimer, CarouselConfig, CarouselKey, CarouselMode, CarouselState, Direction,
    KeyCommand, KeyOrigin, NavInput, Swipe, SwipeTracker,
};
pub use config::{MotionConfig, RevealConfig, SiteConfig, SiteInfo};
pub use error::{JourneyError, Result};
pub use event::{EventRecord, load_events, parse_events};
pub use motion::MotionPreference;
pub use reveal::{
    EntryGeometry, EntryHandles, EntryId, RevealFrame, RevealSequencer, RevealVariant, Side,
    TriggerWindow, Viewport,
};
