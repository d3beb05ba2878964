//! Bridge from webview scroll events to the reveal sequencer.
//!
//! One script measures every `[data-journey-entry]` element (at most once
//! per animation frame) on scroll, resize and DOM changes, and sends a
//! [`ScrollSnapshot`] back to Rust. Only one timeline in the process owns the
//! bridge at a time, see [`BridgeClaim`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use journey_core::{EntryGeometry, Viewport};
use serde::Deserialize;

/// Binds the listeners. A binding left behind by an earlier run is torn down
/// first, so the page never carries two sets.
pub(crate) const SCROLL_BRIDGE_SCRIPT: &str = r#"
if (window.__journeyBridge) {
    window.__journeyBridge.teardown();
}

let frame = 0;

function measure() {
    frame = 0;
    const entries = [];
    document.querySelectorAll("[data-journey-entry]").forEach((el) => {
        const rect = el.getBoundingClientRect();
        entries.push({
            index: Number(el.dataset.journeyEntry),
            top: rect.top,
            height: rect.height
        });
    });
    dioxus.send({ viewport_height: window.innerHeight, entries: entries });
}

function schedule() {
    if (frame) {
        return;
    }
    frame = requestAnimationFrame(measure);
}

const observer = new MutationObserver(schedule);
window.addEventListener("scroll", schedule, { passive: true });
window.addEventListener("resize", schedule, { passive: true });
observer.observe(document.body, { childList: true, subtree: true });

window.__journeyBridge = {
    teardown() {
        window.removeEventListener("scroll", schedule);
        window.removeEventListener("resize", schedule);
        observer.disconnect();
        if (frame) {
            cancelAnimationFrame(frame);
            frame = 0;
        }
        window.__journeyBridge = null;
    }
};

schedule();
await new Promise(() => {});
"#;

/// Unbinds the listeners installed by [`SCROLL_BRIDGE_SCRIPT`].
pub(crate) const SCROLL_BRIDGE_TEARDOWN: &str = r#"
if (window.__journeyBridge) {
    window.__journeyBridge.teardown();
}
"#;

static BRIDGE_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Process-wide ownership of the scroll bridge. Dropping it lets another
/// timeline claim the bridge.
#[derive(Debug)]
pub(crate) struct BridgeClaim(());

impl BridgeClaim {
    /// `None` while another timeline holds the bridge.
    pub(crate) fn acquire() -> Option<Self> {
        BRIDGE_CLAIMED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(()))
    }
}

impl Drop for BridgeClaim {
    fn drop(&mut self) {
        BRIDGE_CLAIMED.store(false, Ordering::Release);
    }
}

/// Bounding box of one timeline entry, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EntryRect {
    pub index: usize,
    pub top: f64,
    pub height: f64,
}

/// Everything measured in one animation frame.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScrollSnapshot {
    pub viewport_height: f64,
    #[serde(default)]
    pub entries: Vec<EntryRect>,
}

impl ScrollSnapshot {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            height: self.viewport_height,
        }
    }

    /// Geometry keyed by entry index.
    pub fn geometry(&self) -> HashMap<usize, EntryGeometry> {
        self.entries
            .iter()
            .map(|rect| {
                (
                    rect.index,
                    EntryGeometry {
                        top: rect.top,
                        height: rect.height,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let snapshot: ScrollSnapshot = serde_json::from_str(
            r#"{"viewport_height": 900, "entries": [
                {"index": 0, "top": -120.5, "height": 480},
                {"index": 1, "top": 610, "height": 455.25}
            ]}"#,
        )
        .unwrap();

        assert_eq!(snapshot.viewport(), Viewport { height: 900.0 });
        let geometry = snapshot.geometry();
        assert_eq!(geometry[&0], EntryGeometry { top: -120.5, height: 480.0 });
        assert_eq!(geometry[&1].height, 455.25);
        assert!(!geometry.contains_key(&2));
    }

    #[test]
    fn test_bridge_has_one_owner() {
        let claim = BridgeClaim::acquire().unwrap();
        assert!(BridgeClaim::acquire().is_none());
        drop(claim);

        let again = BridgeClaim::acquire();
        assert!(again.is_some());
    }

    #[test]
    fn test_bridge_script_replaces_and_tears_down() {
        let rebind = SCROLL_BRIDGE_SCRIPT.find("__journeyBridge.teardown()").unwrap();
        let bind = SCROLL_BRIDGE_SCRIPT.find("addEventListener(\"scroll\"").unwrap();
        assert!(rebind < bind);

        for unbind in ["removeEventListener(\"scroll\"", "removeEventListener(\"resize\"", "observer.disconnect()"] {
            assert!(SCROLL_BRIDGE_SCRIPT.contains(unbind), "{unbind}");
        }
        assert!(SCROLL_BRIDGE_TEARDOWN.contains("__journeyBridge.teardown()"));
    }

    #[test]
    fn test_snapshot_without_entries() {
        let snapshot: ScrollSnapshot = serde_json::from_str(r#"{"viewport_height": 720}"#).unwrap();
        assert!(snapshot.geometry().is_empty());
    }
}
