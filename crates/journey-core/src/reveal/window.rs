//! Trigger windows and scroll progress.

use serde::{Deserialize, Serialize};

/// Viewport dimensions at the time of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
}

/// An entry's bounding box relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryGeometry {
    /// Distance from the viewport's top edge to the entry's top edge.
    /// Negative once the entry has scrolled past the top.
    pub top: f64,
    pub height: f64,
}

impl EntryGeometry {
    /// Builds viewport-relative geometry from a document offset and scroll position.
    pub fn from_document(document_top: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            top: document_top - scroll_y,
            height,
        }
    }
}

/// Portion of the viewport over which an entry animates.
///
/// Progress is 0 when the entry's top edge reaches `start` (a fraction of the
/// viewport height from the top) and 1 when its bottom edge reaches `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerWindow {
    pub start: f64,
    pub end: f64,
}

impl TriggerWindow {
    /// "top 80%" to "bottom 20%".
    pub const CLASSIC: Self = Self { start: 0.8, end: 0.2 };

    /// "top 70%" to "bottom 40%".
    pub const CONNECTOR: Self = Self { start: 0.7, end: 0.4 };

    /// Checks that both edges lie in `(0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("start", self.start), ("end", self.end)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(format!("trigger window {name} must be in (0, 1], got {value}"));
            }
        }
        Ok(())
    }

    /// Normalized progress of an entry through this window, clamped to `[0, 1]`.
    pub fn progress(&self, geometry: EntryGeometry, viewport: Viewport) -> f64 {
        if !(geometry.top.is_finite() && geometry.height.is_finite() && viewport.height.is_finite()) {
            return 0.0;
        }

        let start_line = self.start * viewport.height;
        let end_line = self.end * viewport.height;
        let distance = start_line - end_line + geometry.height.max(0.0);

        if distance <= 0.0 {
            // Degenerate window: a step function at the start line
            return if geometry.top <= start_line { 1.0 } else { 0.0 };
        }

        ((start_line - geometry.top) / distance).clamp(0.0, 1.0)
    }
}

impl Default for TriggerWindow {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport { height: 1000.0 };

    #[test]
    fn test_progress_edges() {
        let window = TriggerWindow::CLASSIC;
        // Top edge exactly at 80% of the viewport
        let at_start = EntryGeometry { top: 800.0, height: 400.0 };
        assert_eq!(window.progress(at_start, VIEWPORT), 0.0);

        // Bottom edge exactly at 20%: top = 200 - 400
        let at_end = EntryGeometry { top: -200.0, height: 400.0 };
        assert_eq!(window.progress(at_end, VIEWPORT), 1.0);

        let halfway = EntryGeometry { top: 300.0, height: 400.0 };
        assert!((window.progress(halfway, VIEWPORT) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_progress_is_clamped() {
        let window = TriggerWindow::CONNECTOR;
        let below = EntryGeometry { top: 5000.0, height: 300.0 };
        let above = EntryGeometry { top: -5000.0, height: 300.0 };
        assert_eq!(window.progress(below, VIEWPORT), 0.0);
        assert_eq!(window.progress(above, VIEWPORT), 1.0);
    }

    #[test]
    fn test_progress_from_scroll_position() {
        let window = TriggerWindow::CLASSIC;
        let before = window.progress(EntryGeometry::from_document(2000.0, 400.0, 1000.0), VIEWPORT);
        let after = window.progress(EntryGeometry::from_document(2000.0, 400.0, 1500.0), VIEWPORT);
        assert!(before < after);
    }

    #[test]
    fn test_non_finite_input() {
        let window = TriggerWindow::CLASSIC;
        let geometry = EntryGeometry { top: f64::NAN, height: 100.0 };
        assert_eq!(window.progress(geometry, VIEWPORT), 0.0);
    }

    #[test]
    fn test_degenerate_window() {
        let window = TriggerWindow { start: 0.2, end: 0.8 };
        let tiny = EntryGeometry { top: 100.0, height: 0.0 };
        assert_eq!(window.progress(tiny, VIEWPORT), 1.0);
        let low = EntryGeometry { top: 900.0, height: 0.0 };
        assert_eq!(window.progress(low, VIEWPORT), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(TriggerWindow::CLASSIC.validate().is_ok());
        assert!(TriggerWindow { start: 0.0, end: 0.2 }.validate().is_err());
        assert!(TriggerWindow { start: 0.8, end: 1.5 }.validate().is_err());
        assert!(TriggerWindow { start: f64::NAN, end: 0.2 }.validate().is_err());
    }
}
