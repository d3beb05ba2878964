//! Scroll-linked reveal animation for timeline entries.
//!
//! Each registered entry gets its own progress value in `[0, 1]`, computed
//! from where the entry sits in the viewport. Progress is mapped through a
//! fixed, ordered list of steps:
//!
//! 1. metadata block fades in, slightly shrunk
//! 2. metadata block settles to full scale at its edge
//! 3. card block slides in
//! 4. card block settles to full scale
//! 5. connector line grows (connector variant only)
//!
//! The mapping is a pure function of progress, so scrubbing backwards and
//! forwards always lands on the same frame for the same scroll position.

mod sequencer;
mod steps;
mod window;

pub use sequencer::{EntryHandles, EntryId, EntryStatus, FrameUpdate, RevealEntry, RevealSequencer};
pub use steps::{BlockStyle, ConnectorStyle, Ease, RevealFrame, RevealStep, RevealVariant, Side, StepPlan};
pub use window::{EntryGeometry, TriggerWindow, Viewport};
