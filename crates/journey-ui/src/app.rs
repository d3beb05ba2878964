//! Top-level page composition.

use dioxus::prelude::*;
use journey_core::{EventRecord, SiteConfig};

use crate::motion::MotionRoot;
use crate::page::{Footer, Hero, Navbar};
use crate::timeline::Timeline;

/// The whole single-page site.
#[component]
pub fn JourneyApp(config: SiteConfig, events: Vec<EventRecord>) -> Element {
    let reveal = config.reveal;

    rsx! {
        MotionRoot { forced: config.motion.forced(),
            main { class: "journey-page",
                Navbar { site: config.site.clone() }
                Hero { site: config.site.clone() }
                Timeline {
                    events,
                    title: config.site.section_title.clone(),
                    subtitle: config.site.section_subtitle.clone(),
                    carousel: config.carousel.clone(),
                    variant: reveal.variant,
                    window: reveal.window(),
                }
                Footer { site: config.site.clone() }
            }
        }
    }
}
