//! Event records shown on the timeline.
//!
//! Records are supplied by the page as a static JSON list and never mutated
//! by the carousel or the sequencer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{JourneyError, Result};

/// A single past event on the journey timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,

    #[serde(default)]
    pub about: String,

    #[serde(default)]
    pub description: String,

    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,

    /// Stable key; derived from the title when the data omits it.
    #[serde(default)]
    pub slug: String,

    /// Photo URLs. Empty lists fall back to the carousel placeholders.
    #[serde(default)]
    pub images: Vec<String>,

    /// Short heading for the metadata block, e.g. "2024" or "Mar 2024".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

impl EventRecord {
    /// Heading shown in the metadata block: the `timeline` label, else the date.
    pub fn heading(&self) -> &str {
        self.timeline.as_deref().unwrap_or(&self.date)
    }

    /// First four-digit run in the date, or an empty string.
    pub fn year(&self) -> &str {
        let bytes = self.date.as_bytes();
        bytes
            .windows(4)
            .position(|w| w.iter().all(u8::is_ascii_digit))
            .map(|start| &self.date[start..start + 4])
            .unwrap_or("")
    }

    /// Where the event happened: the location, else the hosting institute.
    pub fn venue(&self) -> Option<&str> {
        self.location
            .as_deref()
            .filter(|l| !l.is_empty())
            .or(self.institute.as_deref())
    }
}

/// Lowercase, dash-separated key built from a title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Parses a JSON array of event records, filling in missing slugs.
pub fn parse_events(json: &str) -> Result<Vec<EventRecord>> {
    let mut events: Vec<EventRecord> = serde_json::from_str(json)?;
    for event in &mut events {
        if event.slug.is_empty() {
            event.slug = slugify(&event.title);
        }
    }
    tracing::debug!(count = events.len(), "Parsed timeline events");
    Ok(events)
}

/// Reads and parses an events file.
pub fn load_events(path: &Path) -> Result<Vec<EventRecord>> {
    let json = std::fs::read_to_string(path).map_err(|source| JourneyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_events(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> EventRecord {
        EventRecord {
            title: "DevFest".to_string(),
            about: String::new(),
            description: String::new(),
            date: date.to_string(),
            time: None,
            location: None,
            institute: None,
            slug: String::new(),
            images: Vec::new(),
            timeline: None,
        }
    }

    #[test]
    fn test_year_extraction() {
        assert_eq!(record("14 December 2024").year(), "2024");
        assert_eq!(record("2023-03-11").year(), "2023");
        assert_eq!(record("TBA").year(), "");
        assert_eq!(record("").year(), "");
    }

    #[test]
    fn test_heading_falls_back_to_date() {
        let mut event = record("14 December 2024");
        assert_eq!(event.heading(), "14 December 2024");
        event.timeline = Some("Dec 2024".to_string());
        assert_eq!(event.heading(), "Dec 2024");
    }

    #[test]
    fn test_venue_prefers_location() {
        let mut event = record("2024");
        assert_eq!(event.venue(), None);
        event.institute = Some("BIT Mesra".to_string());
        assert_eq!(event.venue(), Some("BIT Mesra"));
        event.location = Some("Ranchi".to_string());
        assert_eq!(event.venue(), Some("Ranchi"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("DevFest Ranchi 2024"), "devfest-ranchi-2024");
        assert_eq!(slugify("  Build with AI!  "), "build-with-ai");
        assert_eq!(slugify("I/O Extended -- Cloud"), "i-o-extended-cloud");
    }

    #[test]
    fn test_parse_events_fills_slug_and_defaults() {
        let json = r#"[
            {"title":"Study Jam","date":"5 May 2023","images":["/a.jpg"]},
            {"title":"DevFest","date":"2024","slug":"df24","location":"Ranchi","time":"10 AM"}
        ]"#;
        let events = parse_events(json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].slug, "study-jam");
        assert_eq!(events[0].images, vec!["/a.jpg".to_string()]);
        assert!(events[0].about.is_empty());
        assert_eq!(events[1].slug, "df24");
        assert!(events[1].images.is_empty());
        assert_eq!(events[1].time.as_deref(), Some("10 AM"));
    }

    #[test]
    fn test_parse_events_rejects_malformed() {
        let err = parse_events(r#"[{"date":"2024"}]"#).unwrap_err();
        assert!(matches!(err, JourneyError::EventsParse(_)));
    }

    #[test]
    fn test_load_events_missing_file() {
        let err = load_events(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, JourneyError::Io { .. }));
    }
}
