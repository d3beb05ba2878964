//! Command line arguments and startup loading.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use journey_core::{EventRecord, RevealVariant, SiteConfig, load_events, parse_events};
use journey_logging::{FileConfig, JourneySubscriberBuilder, LogConfig, WorkerGuard};

/// Timeline bundled with the binary, used when no events file is given or
/// the given one cannot be read.
const BUNDLED_EVENTS: &str = include_str!("../assets/timeline.json");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "journey-site")]
#[command(about = "Community journey timeline with scroll-revealed events and photo carousels")]
pub struct Args {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file of event records (overrides `events_path` in the config)
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Start every carousel in autoplay
    #[arg(long)]
    pub autoplay: bool,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    pub interval: Option<u64>,

    /// Force reduced motion regardless of the platform setting
    #[arg(long)]
    pub reduced_motion: bool,

    /// Reveal animation: classic or connector
    #[arg(long)]
    pub variant: Option<RevealVariant>,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Also write JSON logs to daily files in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Human-readable console logs instead of JSON lines
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Reads the config file (if any), applies flag overrides and validates.
    pub fn site_config(&self) -> anyhow::Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SiteConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate().context("invalid configuration after CLI overrides")?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut SiteConfig) {
        if self.autoplay {
            config.carousel.autoplay = true;
        }
        if let Some(interval) = self.interval {
            config.carousel.interval_ms = interval;
        }
        if self.reduced_motion {
            config.motion.reduced_motion = Some(true);
        }
        if let Some(variant) = self.variant {
            config.reveal.variant = variant;
        }
        if let Some(events) = &self.events {
            config.events_path = Some(events.clone());
        }
    }

    /// Installs the global subscriber. The guard must live until exit.
    pub fn init_logging(&self) -> anyhow::Result<Option<WorkerGuard>> {
        let mut builder = JourneySubscriberBuilder::new()
            .with_config(LogConfig::default())
            .with_level(self.log_level.clone())
            .with_pretty(self.pretty);
        if let Some(dir) = &self.log_dir {
            builder = builder.with_file_output(FileConfig::in_dir(dir));
        }
        builder.init().context("initializing logging")
    }
}

/// Loads event records, falling back to the bundled timeline.
pub fn load_timeline(path: Option<&Path>) -> anyhow::Result<Vec<EventRecord>> {
    if let Some(path) = path {
        match load_events(path) {
            Ok(events) => {
                tracing::info!(path = %path.display(), count = events.len(), "Loaded timeline events");
                return Ok(events);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not load events, using bundled timeline");
            }
        }
    }
    let events = parse_events(BUNDLED_EVENTS).context("parsing bundled timeline")?;
    tracing::info!(count = events.len(), "Using bundled timeline");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("journey-site").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let config = args.site_config().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_flag_overrides() {
        let args = parse(&[
            "--autoplay",
            "--interval",
            "4500",
            "--reduced-motion",
            "--variant",
            "connector",
            "--events",
            "events.json",
        ]);
        let config = args.site_config().unwrap();
        assert!(config.carousel.autoplay);
        assert_eq!(config.carousel.interval_ms, 4500);
        assert_eq!(config.motion.reduced_motion, Some(true));
        assert_eq!(config.reveal.variant, RevealVariant::Connector);
        assert_eq!(config.events_path, Some(PathBuf::from("events.json")));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let args = parse(&["--interval", "0"]);
        assert!(args.site_config().is_err());
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result = Args::try_parse_from(["journey-site", "--variant", "spiral"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[carousel]\nautoplay = false\ninterval_ms = 2000").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = parse(&["--config", &path, "--interval", "5000"]);
        let config = args.site_config().unwrap();
        assert!(!config.carousel.autoplay);
        assert_eq!(config.carousel.interval_ms, 5000);
    }

    #[test]
    fn test_bundled_timeline() {
        let events = load_timeline(None).unwrap();
        assert!(!events.is_empty());
        assert!(events.iter().all(|e| !e.slug.is_empty()));
    }

    #[test]
    fn test_missing_events_file_falls_back() {
        let events = load_timeline(Some(Path::new("/definitely/not/here.json"))).unwrap();
        assert_eq!(events, load_timeline(None).unwrap());
    }

    #[test]
    fn test_events_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Women Techmakers", "date": "March 2025"}}]"#).unwrap();

        let events = load_timeline(Some(file.path())).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].slug, "women-techmakers");
    }
}
