//! Registry of timeline entries and their reveal progress.

use std::collections::BTreeMap;
use std::fmt;

use crate::motion::MotionPreference;

use super::steps::{RevealFrame, RevealVariant, Side, StepPlan};
use super::window::{EntryGeometry, TriggerWindow, Viewport};

/// Identifier handed out at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry-{}", self.0)
    }
}

/// Structural references to an entry's animated sub-blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHandles<H> {
    pub meta: Option<H>,
    pub card: Option<H>,
    pub connector: Option<H>,
}

impl<H> EntryHandles<H> {
    pub fn new(meta: H, card: H) -> Self {
        Self {
            meta: Some(meta),
            card: Some(card),
            connector: None,
        }
    }

    pub fn with_connector(mut self, connector: H) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Both required blocks are present.
    pub fn is_complete(&self) -> bool {
        self.meta.is_some() && self.card.is_some()
    }
}

/// Whether an entry is animated or left in its natural, fully visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Animated,
    Skipped,
}

/// One registered timeline entry.
#[derive(Debug, Clone)]
pub struct RevealEntry<H> {
    id: EntryId,
    index: usize,
    side: Side,
    motion: MotionPreference,
    handles: EntryHandles<H>,
    plan: StepPlan,
    progress: f64,
    status: EntryStatus,
}

impl<H> RevealEntry<H> {
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Position of the entry in the timeline.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn handles(&self) -> &EntryHandles<H> {
        &self.handles
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    /// Frame for the entry's current progress, or `None` if it is skipped.
    pub fn frame(&self) -> Option<RevealFrame> {
        self.frame_at(self.progress)
    }

    /// Frame for an arbitrary progress value, honoring this entry's motion
    /// preference and connector presence.
    pub fn frame_at(&self, progress: f64) -> Option<RevealFrame> {
        if self.status == EntryStatus::Skipped {
            return None;
        }
        let mut frame = if self.motion.is_reduced() {
            self.plan.end_frame()
        } else {
            self.plan.frame_at(progress)
        };
        if self.handles.connector.is_none() {
            frame.connector = None;
        }
        Some(frame)
    }
}

/// A frame to apply after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    pub id: EntryId,
    pub index: usize,
    pub progress: f64,
    pub frame: RevealFrame,
}

/// Drives the reveal animation of every timeline entry from one scroll
/// listener.
///
/// `H` is whatever the host uses to address rendered elements (DOM ids in
/// the desktop UI, plain labels in tests).
#[derive(Debug, Clone)]
pub struct RevealSequencer<H> {
    variant: RevealVariant,
    window: TriggerWindow,
    entries: BTreeMap<EntryId, RevealEntry<H>>,
    next_id: u64,
    installed: bool,
}

impl<H> RevealSequencer<H> {
    pub fn new(variant: RevealVariant, window: TriggerWindow) -> Self {
        Self {
            variant,
            window,
            entries: BTreeMap::new(),
            next_id: 0,
            installed: false,
        }
    }

    /// Sequencer using the variant's default trigger window.
    pub fn for_variant(variant: RevealVariant) -> Self {
        Self::new(variant, variant.default_window())
    }

    /// Claims the single scroll listener. Returns `true` only the first time;
    /// callers bind the listener only when this returns `true`.
    pub fn install(&mut self) -> bool {
        if self.installed {
            tracing::debug!("Reveal scroll listener already installed");
            return false;
        }
        self.installed = true;
        tracing::info!(variant = ?self.variant, "Installed reveal scroll listener");
        true
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn variant(&self) -> RevealVariant {
        self.variant
    }

    pub fn window(&self) -> TriggerWindow {
        self.window
    }

    /// Registers an entry with a fresh progress tracker.
    ///
    /// The motion preference is captured here and kept for the entry's
    /// lifetime. Entries missing their meta or card block are registered as
    /// skipped: they never animate but do not disturb other entries.
    pub fn register(&mut self, index: usize, handles: EntryHandles<H>, motion: MotionPreference) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;

        let side = Side::for_index(index);
        let status = if handles.is_complete() {
            EntryStatus::Animated
        } else {
            tracing::warn!(%id, index, "Timeline entry is missing a sub-block, skipping its reveal");
            EntryStatus::Skipped
        };

        self.entries.insert(
            id,
            RevealEntry {
                id,
                index,
                side,
                motion,
                handles,
                plan: StepPlan::new(self.variant, side),
                progress: 0.0,
                status,
            },
        );
        tracing::debug!(%id, index, ?side, ?motion, "Registered timeline entry");
        id
    }

    /// Releases an entry. Unknown or already removed ids are a no-op.
    pub fn unregister(&mut self, id: EntryId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            tracing::debug!(%id, "Unregistered timeline entry");
        }
        removed
    }

    pub fn entry(&self, id: EntryId) -> Option<&RevealEntry<H>> {
        self.entries.get(&id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &RevealEntry<H>> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Progress for one entry at the given geometry.
    pub fn compute_progress(&self, geometry: EntryGeometry, viewport: Viewport) -> f64 {
        self.window.progress(geometry, viewport)
    }

    /// Recomputes one entry's progress and returns its frame.
    pub fn update(&mut self, id: EntryId, geometry: EntryGeometry, viewport: Viewport) -> Option<RevealFrame> {
        let progress = self.window.progress(geometry, viewport);
        let entry = self.entries.get_mut(&id)?;
        entry.progress = progress;
        entry.frame()
    }

    /// Recomputes every registered entry after a scroll event and returns
    /// the frames to apply.
    ///
    /// `geometry` looks up an entry's current bounding box; entries it cannot
    /// measure, and skipped entries, are left untouched.
    pub fn on_scroll<F>(&mut self, viewport: Viewport, geometry: F) -> Vec<FrameUpdate>
    where
        F: FnMut(&RevealEntry<H>) -> Option<EntryGeometry>,
    {
        let mut updates = Vec::with_capacity(self.entries.len());
        self.recompute(viewport, geometry, |entry, _| {
            if let Some(frame) = entry.frame() {
                updates.push(FrameUpdate {
                    id: entry.id,
                    index: entry.index,
                    progress: entry.progress,
                    frame,
                });
            }
        });
        updates
    }

    /// Like [`on_scroll`](Self::on_scroll) for callers that read frames back
    /// through [`entry`](Self::entry). Returns how many entries moved.
    pub fn refresh<F>(&mut self, viewport: Viewport, geometry: F) -> usize
    where
        F: FnMut(&RevealEntry<H>) -> Option<EntryGeometry>,
    {
        let mut moved = 0;
        self.recompute(viewport, geometry, |_, changed| {
            if changed {
                moved += 1;
            }
        });
        moved
    }

    fn recompute<F, E>(&mut self, viewport: Viewport, mut geometry: F, mut each: E)
    where
        F: FnMut(&RevealEntry<H>) -> Option<EntryGeometry>,
        E: FnMut(&RevealEntry<H>, bool),
    {
        let window = self.window;
        for entry in self.entries.values_mut() {
            if entry.status == EntryStatus::Skipped {
                continue;
            }
            let Some(rect) = geometry(entry) else {
                tracing::trace!(id = %entry.id, index = entry.index, "No geometry for entry");
                continue;
            };
            let progress = window.progress(rect, viewport);
            let changed = progress != entry.progress;
            entry.progress = progress;
            each(entry, changed);
        }
    }
}
