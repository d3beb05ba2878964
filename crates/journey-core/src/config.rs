//! Site configuration
//!
//! Loaded from TOML. Every section and key is optional; missing values fall
//! back to the defaults below.
//!
//! ```toml
//! events_path = "events.json"
//!
//! [carousel]
//! autoplay = true
//! interval_ms = 4000
//!
//! [reveal]
//! variant = "connector"
//!
//! [motion]
//! reduced_motion = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselConfig;
use crate::error::{JourneyError, Result};
use crate::motion::MotionPreference;
use crate::reveal::{RevealVariant, TriggerWindow};

/// Text for the page shell around the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub join_url: Option<String>,
    pub section_title: String,
    pub section_subtitle: String,
    pub footer_blurb: String,
    pub copyright_holder: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "GDG Ranchi".to_string(),
            title: "Google Developer Groups Ranchi".to_string(),
            tagline: "Jharkhand • Building a community of developers, innovators, and learners."
                .to_string(),
            join_url: None,
            section_title: "Our Journey".to_string(),
            section_subtitle:
                "A quick look at our milestones and the events that shaped GDG Ranchi.".to_string(),
            footer_blurb: "Building a vibrant developer community in Jharkhand 🚀".to_string(),
            copyright_holder: "Google Developer Group Ranchi".to_string(),
        }
    }
}

/// Reveal animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub variant: RevealVariant,
    pub classic_window: TriggerWindow,
    pub connector_window: TriggerWindow,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            variant: RevealVariant::default(),
            classic_window: TriggerWindow::CLASSIC,
            connector_window: TriggerWindow::CONNECTOR,
        }
    }
}

impl RevealConfig {
    /// Trigger window for the configured variant.
    pub fn window(&self) -> TriggerWindow {
        self.window_for(self.variant)
    }

    pub fn window_for(&self, variant: RevealVariant) -> TriggerWindow {
        match variant {
            RevealVariant::Classic => self.classic_window,
            RevealVariant::Connector => self.connector_window,
        }
    }
}

/// Motion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Forces the reduced-motion preference on or off. When unset the
    /// platform's `prefers-reduced-motion` setting is used.
    pub reduced_motion: Option<bool>,
}

impl MotionConfig {
    /// The forced preference, if any.
    pub fn forced(&self) -> Option<MotionPreference> {
        self.reduced_motion.map(MotionPreference::from_reduced)
    }
}

/// Top-level configuration for the journey site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// JSON file of event records. The bundled timeline is used when unset.
    pub events_path: Option<PathBuf>,
    pub site: SiteInfo,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub motion: MotionConfig,
}

impl SiteConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| JourneyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects values the carousel or the sequencer cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.carousel.interval_ms == 0 {
            return Err(JourneyError::InvalidConfig(
                "carousel.interval_ms must be greater than 0".to_string(),
            ));
        }
        self.reveal
            .classic_window
            .validate()
            .map_err(|e| JourneyError::InvalidConfig(format!("reveal.classic_window: {e}")))?;
        self.reveal
            .connector_window
            .validate()
            .map_err(|e| JourneyError::InvalidConfig(format!("reveal.connector_window: {e}")))?;
        Ok(())
    }
}
