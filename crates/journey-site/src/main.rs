//! Entry point for the journey timeline.
//!
//! Parses arguments, loads the site config and event records, installs
//! logging and opens the desktop window.

mod cli;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use journey_core::{EventRecord, SiteConfig};
use journey_ui::{JourneyApp, SHARED_CSS};

use crate::cli::{Args, load_timeline};

/// Config and events resolved before launch.
static STARTUP: OnceLock<(SiteConfig, Vec<EventRecord>)> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = args.init_logging()?;

    tracing::info!("Starting journey site");

    let config = args.site_config()?;
    let events = load_timeline(config.events_path.as_deref())?;
    tracing::info!(
        events = events.len(),
        variant = ?config.reveal.variant,
        autoplay = config.carousel.autoplay,
        "Site ready"
    );

    let title = format!("{} - Our Journey", config.site.name);
    STARTUP.set((config, events)).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1280, 900)),
                )
                .with_custom_head(format!(
                    r#"
                    <meta name="viewport" content="width=device-width, initial-scale=1">
                    <style>{}</style>
                    "#,
                    SHARED_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component handing the startup data to the page.
#[component]
fn RootApp() -> Element {
    let (config, events) = STARTUP.get().cloned().unwrap_or_default();

    use_drop(|| {
        tracing::info!("Shutting down journey site");
    });

    rsx! {
        JourneyApp { config, events }
    }
}
