//! Error types for the journey timeline

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or event data.
///
/// Nothing in the carousel or the reveal sequencer produces an error: their
/// failure modes degrade silently. These variants only cover startup I/O.
#[derive(Debug, Error)]
pub enum JourneyError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Events parse error: {0}")]
    EventsParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for journey operations
pub type Result<T> = std::result::Result<T, JourneyError>;
