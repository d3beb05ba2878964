//! Logging setup for the journey timeline
//!
//! One subscriber for the whole process, assembled from a [`LogConfig`]:
//!
//! - **Console**: JSON lines by default, or human-readable with
//!   [`LogConfig::development`]
//! - **File**: JSON lines through a non-blocking, optionally rotating
//!   appender from `tracing-appender`
//! - **Filtering**: `RUST_LOG` wins when set; otherwise the configured
//!   default level plus per-target directives
//!
//! # Quick Start
//!
//! ```no_run
//! use journey_logging::{FileConfig, JourneySubscriberBuilder, LogConfig};
//!
//! let _guard = JourneySubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .with_file_output(FileConfig::in_dir("./logs"))
//!     .init()
//!     .expect("logging already initialized");
//!
//! tracing::info!("Journey site starting");
//! ```

pub mod config;

pub use config::{ConsoleConfig, FileConfig, LogConfig, RotationStrategy};
pub use tracing_appender::non_blocking::WorkerGuard;

use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the global subscriber
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Builder for configuring and installing the journey logging subscriber
///
/// By default, console output uses JSON lines. Use `LogConfig::development()`
/// for human-readable output.
#[derive(Debug, Clone, Default)]
pub struct JourneySubscriberBuilder {
    config: LogConfig,
}

impl JourneySubscriberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Switch the console between pretty and JSON lines
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self.config.console.ansi = pretty;
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Installs the subscriber globally.
    ///
    /// When file output is configured the returned guard flushes the
    /// background writer on drop and must be held until exit.
    pub fn init(self) -> Result<Option<WorkerGuard>, LogError> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(self.config.directives())?,
        };

        let (file_writer, guard) = match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = file_writer(file_config)?;
                (Some(writer), Some(guard))
            }
            None => (None, None),
        };

        let console = &self.config.console;
        let pretty_layer = (console.enabled && console.pretty).then(|| {
            fmt::layer()
                .with_ansi(console.ansi)
                .with_target(true)
                .with_file(console.include_location)
                .with_line_number(console.include_location)
        });
        let json_layer = (console.enabled && !console.pretty).then(|| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .with_file(console.include_location)
                .with_line_number(console.include_location)
        });
        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
        });

        Registry::default()
            .with(filter)
            .with(pretty_layer)
            .with(json_layer)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }
}

fn file_writer(config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LogError> {
    std::fs::create_dir_all(&config.directory)?;

    let rotation = match config.rotation {
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
        RotationStrategy::Never => Rotation::NEVER,
    };
    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(config.prefix.as_str())
        .filename_suffix("log");
    if let Some(max_files) = config.max_files {
        builder = builder.max_log_files(max_files);
    }

    let appender = builder.build(&config.directory)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Installs minimal logging for tests; later calls are ignored.
pub fn init_testing() {
    let _ = JourneySubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = JourneySubscriberBuilder::new();
        assert_eq!(builder.config().default_level, "info");
        assert!(!builder.config().console.pretty);
    }

    #[test]
    fn test_builder_with_config() {
        let builder = JourneySubscriberBuilder::new().with_config(LogConfig::development());
        assert_eq!(builder.config().default_level, "debug");
        assert!(builder.config().console.pretty);
    }

    #[test]
    fn test_builder_overrides() {
        let builder = JourneySubscriberBuilder::new()
            .with_level("trace")
            .with_pretty(true)
            .with_console(false)
            .with_file_output(FileConfig::in_dir("/tmp/journey-logs"));
        let config = builder.config();
        assert_eq!(config.default_level, "trace");
        assert!(config.console.pretty && config.console.ansi);
        assert!(!config.console.enabled);
        assert_eq!(config.file.as_ref().unwrap().prefix, "journey");
    }

    #[test]
    fn test_invalid_directive_is_rejected() {
        let config = LogConfig::default().with_target("journey_core", "not-a-level");
        assert!(EnvFilter::try_new(config.directives()).is_err());
    }
}
