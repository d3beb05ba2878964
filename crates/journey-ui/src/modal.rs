//! Event detail overlay opened by "Read More".

use dioxus::prelude::*;
use journey_core::EventRecord;

/// Full details for one event. Closes on the backdrop, the close button or
/// Escape.
#[component]
pub fn EventDetailModal(event: EventRecord, on_close: EventHandler<()>) -> Element {
    let venue = event.venue().map(str::to_string);

    rsx! {
        div {
            class: "modal-overlay",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{event.title}",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }

            div { class: "modal-panel",
                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }

                h3 { class: "modal-title", "{event.title}" }

                div { class: "modal-meta",
                    div { "📅 {event.date}" }
                    if let Some(time) = &event.time {
                        div { "🕒 {time}" }
                    }
                    if let Some(venue) = venue {
                        div { "📍 {venue}" }
                    }
                }

                section { class: "modal-section",
                    h4 { "About" }
                    p { "{event.about}" }
                }

                section { class: "modal-section",
                    h4 { "Description" }
                    p { "{event.description}" }
                }

                if !event.images.is_empty() {
                    div { class: "modal-gallery",
                        for (n, src) in event.images.iter().enumerate().map(|(i, src)| (i + 1, src)) {
                            img {
                                key: "{n}",
                                src: "{src}",
                                alt: "{event.title} {n}",
                                loading: "lazy",
                            }
                        }
                    }
                }
            }
        }
    }
}
