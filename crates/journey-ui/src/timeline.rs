//! Scroll-revealed timeline of events.

use std::rc::Rc;

use dioxus::prelude::*;
use journey_core::reveal::{EntryHandles, RevealSequencer, RevealVariant, Side, TriggerWindow};
use journey_core::{CarouselConfig, EventRecord};

use crate::carousel::Carousel;
use crate::modal::EventDetailModal;
use crate::motion::current_motion;
use crate::scroll::{BridgeClaim, SCROLL_BRIDGE_SCRIPT, SCROLL_BRIDGE_TEARDOWN, ScrollSnapshot};

/// Sequencer shared by every entry of one timeline.
#[derive(Clone, Copy)]
struct RevealContext {
    sequencer: Signal<RevealSequencer<String>>,
}

/// The "Our Journey" section.
#[component]
pub fn Timeline(
    events: Vec<EventRecord>,
    title: String,
    subtitle: String,
    #[props(default)] carousel: CarouselConfig,
    #[props(default)] variant: RevealVariant,
    #[props(default)] window: TriggerWindow,
) -> Element {
    let mut sequencer = use_signal(|| RevealSequencer::new(variant, window));
    use_context_provider(|| RevealContext { sequencer });
    let mut selected = use_signal(|| None::<EventRecord>);

    let claim = use_hook(|| Rc::new(BridgeClaim::acquire()));
    let owns_bridge = claim.is_some();

    use_future(move || async move {
        if !owns_bridge {
            tracing::warn!("Scroll bridge is owned by another timeline, entries will not reveal");
            return;
        }
        if !sequencer.write().install() {
            return;
        }
        let mut bridge = document::eval(SCROLL_BRIDGE_SCRIPT);
        loop {
            match bridge.recv::<ScrollSnapshot>().await {
                Ok(snapshot) => {
                    let geometry = snapshot.geometry();
                    let moved = sequencer
                        .write()
                        .refresh(snapshot.viewport(), |entry| geometry.get(&entry.index()).copied());
                    tracing::trace!(moved, "Refreshed reveal progress");
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "Scroll bridge closed");
                    break;
                }
            }
        }
    });

    use_drop(move || {
        if owns_bridge {
            document::eval(SCROLL_BRIDGE_TEARDOWN);
            tracing::debug!("Scroll bridge released");
        }
    });

    let last = events.len().saturating_sub(1);
    let variant_name = variant_class(variant);

    rsx! {
        section { id: "timeline", class: "timeline variant-{variant_name}",
            div { class: "timeline-header",
                h2 { "{title}" }
                p { "{subtitle}" }
            }

            div { class: "timeline-body",
                div { class: "timeline-spine", aria_hidden: "true" }
                for (index, event) in events.into_iter().enumerate() {
                    TimelineEntry {
                        key: "{event.slug}-{index}",
                        index,
                        has_connector: variant.has_connector() && index < last,
                        event: event.clone(),
                        carousel: carousel.clone(),
                        on_read_more: move |event: EventRecord| selected.set(Some(event)),
                    }
                }
            }

            if let Some(event) = selected() {
                EventDetailModal {
                    event,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

fn variant_class(variant: RevealVariant) -> &'static str {
    match variant {
        RevealVariant::Classic => "classic",
        RevealVariant::Connector => "connector",
    }
}

/// One event on the timeline: metadata block, center dot (and connector),
/// and the card with its carousel.
#[component]
pub fn TimelineEntry(
    index: usize,
    event: EventRecord,
    has_connector: bool,
    carousel: CarouselConfig,
    on_read_more: EventHandler<EventRecord>,
) -> Element {
    let RevealContext { mut sequencer } = use_context();

    let id = use_hook(|| {
        let mut handles =
            EntryHandles::new(format!("journey-meta-{index}"), format!("journey-card-{index}"));
        if has_connector {
            handles = handles.with_connector(format!("journey-connector-{index}"));
        }
        sequencer.write().register(index, handles, current_motion())
    });

    use_drop(move || {
        if let Ok(mut sequencer) = sequencer.try_write() {
            sequencer.unregister(id);
        }
    });

    let frame = use_memo(move || sequencer.read().entry(id).and_then(|entry| entry.frame()));
    let meta_style = frame().map(|f| f.meta.css()).unwrap_or_default();
    let card_style = frame().map(|f| f.card.css()).unwrap_or_default();
    let connector_style = frame()
        .and_then(|f| f.connector)
        .map(|c| c.css())
        .unwrap_or_default();

    let side = match Side::for_index(index) {
        Side::Left => "left",
        Side::Right => "right",
    };
    let heading = event.heading().to_string();
    let venue = event.venue().map(str::to_string);
    let detail = event.clone();

    rsx! {
        div {
            class: "timeline-event side-{side}",
            "data-journey-entry": "{index}",

            div { id: "journey-meta-{index}", class: "timeline-meta", style: "{meta_style}",
                div { class: "timeline-meta-label", "Year" }
                div { class: "timeline-meta-heading", "{heading}" }
                div { class: "timeline-meta-details",
                    div { class: "timeline-meta-row", "📅 {event.date}" }
                    if let Some(time) = &event.time {
                        div { class: "timeline-meta-row", "🕒 {time}" }
                    }
                    div { class: "timeline-meta-title", "{event.title}" }
                    if let Some(venue) = venue {
                        div { class: "timeline-meta-venue", "{venue}" }
                    }
                }
            }

            div { class: "timeline-center",
                div { class: "timeline-dot" }
                if has_connector {
                    div {
                        id: "journey-connector-{index}",
                        class: "timeline-connector",
                        style: "{connector_style}",
                    }
                }
            }

            div { id: "journey-card-{index}", class: "timeline-card", style: "{card_style}",
                article { class: "timeline-card-body",
                    header { class: "timeline-card-header",
                        span { class: "timeline-card-icon", "🎓" }
                        h3 { "{event.title}" }
                    }
                    div { class: "timeline-card-media",
                        Carousel {
                            images: event.images.clone(),
                            alt: event.title.clone(),
                            config: carousel,
                        }
                    }
                    p { class: "timeline-card-about", "{event.about}" }
                    button {
                        class: "timeline-read-more",
                        onclick: move |_| on_read_more.call(detail.clone()),
                        "Read More →"
                    }
                }
            }
        }
    }
}
