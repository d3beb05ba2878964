//! Image carousel component.
//!
//! Renders a [`CarouselState`] and feeds it pointer, touch, keyboard and
//! timer input. The autoplay timer is re-armed whenever the state's armed
//! generation changes and is dropped (aborting its task) with the component.

use dioxus::prelude::*;
use futures::StreamExt;
use journey_core::carousel::{
    AutoplayTick, AutoplayTimer, CarouselConfig, CarouselKey, CarouselState, Direction, KeyCommand,
    KeyOrigin, NavInput, SlideTransition, progress_bar_css,
};

use crate::motion::current_motion;

/// Photo carousel for one event.
#[component]
pub fn Carousel(
    images: Vec<String>,
    alt: String,
    #[props(default)] config: CarouselConfig,
    #[props(optional)] on_image_change: Option<EventHandler<usize>>,
) -> Element {
    let motion = current_motion();
    let interval = config.interval();

    let mut state = use_signal(|| {
        let mut state = CarouselState::new(images.clone(), &config);
        if let Some(handler) = on_image_change {
            state.set_observer(move |index: usize| handler.call(index));
        }
        state
    });

    // Re-clamp when the host swaps the image list
    let mut last_images = use_signal(|| images.clone());
    use_effect(use_reactive((&images,), move |(images,)| {
        if *last_images.peek() != images {
            state.write().set_images(images.clone());
            last_images.set(images);
        }
    }));

    let ticks = use_coroutine(move |mut rx: UnboundedReceiver<AutoplayTick>| async move {
        while let Some(tick) = rx.next().await {
            state.write().tick(tick, current_motion());
        }
    });

    let mut timer = use_signal(|| None::<AutoplayTimer>);
    use_effect(move || {
        let armed = state.read().armed_generation(current_motion());
        match armed {
            Some(generation) => {
                let current = timer
                    .peek()
                    .as_ref()
                    .is_some_and(|timer| timer.matches(generation, interval));
                if !current {
                    let tx = ticks.tx();
                    timer.set(Some(AutoplayTimer::arm(interval, generation, move |tick| {
                        tx.unbounded_send(tick).is_ok()
                    })));
                }
            }
            None => {
                if timer.peek().is_some() {
                    timer.set(None);
                }
            }
        }
    });

    let transition = SlideTransition::for_motion(motion);
    let carousel = state.read();
    let current = carousel.current_index();
    let source = carousel.current_source().to_string();
    let image_alt = carousel.image_alt(&alt, current);
    let counter = carousel.counter_label();
    let toggle_label = carousel.toggle_label();
    let auto_playing = carousel.is_auto_playing();
    let show_badge = carousel.shows_auto_badge();
    let show_progress = carousel.should_autoplay(motion);
    let has_navigation = carousel.has_navigation();
    let dots = carousel.dots();
    drop(carousel);

    rsx! {
        div {
            class: "carousel",
            style: "{transition.css_vars()}",
            tabindex: "0",
            role: "region",
            "aria-roledescription": "carousel",
            aria_label: "{alt}",
            onmouseenter: move |_| state.write().pointer_enter(),
            onmouseleave: move |_| state.write().pointer_leave(),
            ontouchstart: move |evt: TouchEvent| {
                if let Some(touch) = evt.target_touches().first() {
                    state.write().touch_start(touch.client_coordinates().x);
                }
            },
            ontouchmove: move |evt: TouchEvent| {
                if let Some(touch) = evt.target_touches().first() {
                    state.write().touch_move(touch.client_coordinates().x);
                }
            },
            ontouchend: move |_| {
                state.write().touch_end();
            },
            onkeydown: move |evt: KeyboardEvent| handle_key(state, evt, KeyOrigin::Container),

            img {
                key: "{current}",
                class: "carousel-image",
                src: "{source}",
                alt: "{image_alt}",
                loading: "lazy",
                draggable: "false",
                onerror: move |_| state.write().mark_load_failed(current),
            }

            if config.show_controls && has_navigation {
                button {
                    class: "carousel-toggle",
                    title: "{toggle_label}",
                    aria_label: "{toggle_label}",
                    onkeydown: move |evt: KeyboardEvent| handle_key(state, evt, KeyOrigin::Control),
                    onclick: move |_| {
                        state.write().toggle_autoplay();
                    },
                    if auto_playing { "❚❚" } else { "▶" }
                }
            }

            if has_navigation {
                div { class: "carousel-swipe-hint", aria_hidden: "true", "👆 Swipe to navigate" }
            }

            if show_progress {
                div { class: "carousel-progress",
                    div {
                        key: "{current}",
                        class: "carousel-progress-fill",
                        style: "{progress_bar_css(interval)}",
                    }
                }
            }

            if config.show_dots && has_navigation {
                div { class: "carousel-dots",
                    for dot in dots {
                        {
                            let index = dot.index;
                            rsx! {
                                button {
                                    key: "{index}",
                                    class: if dot.active { "carousel-dot active" } else { "carousel-dot" },
                                    aria_label: "{dot.label}",
                                    onkeydown: move |evt: KeyboardEvent| handle_key(state, evt, KeyOrigin::Control),
                                    onclick: move |_| {
                                        state.write().go_to(index);
                                    },
                                }
                            }
                        }
                    }
                }
            }

            if has_navigation {
                button {
                    class: "carousel-arrow prev",
                    aria_label: "Previous image",
                    onkeydown: move |evt: KeyboardEvent| handle_key(state, evt, KeyOrigin::Control),
                    onclick: move |_| {
                        state.write().navigate(Direction::Backward, NavInput::Arrow);
                    },
                    "‹"
                }
                button {
                    class: "carousel-arrow next",
                    aria_label: "Next image",
                    onkeydown: move |evt: KeyboardEvent| handle_key(state, evt, KeyOrigin::Control),
                    onclick: move |_| {
                        state.write().navigate(Direction::Forward, NavInput::Arrow);
                    },
                    "›"
                }
            }

            if config.show_counter {
                div { class: "carousel-status",
                    div { class: "carousel-counter", "{counter}" }
                    if show_badge {
                        div { class: "carousel-auto",
                            span { class: "carousel-auto-pulse" }
                            "AUTO"
                        }
                    }
                }
            }
        }
    }
}

/// Keyboard input from the carousel or one of its buttons.
///
/// Key presses on a button stop there, so the container never sees them
/// twice and Space or Enter still reach the button's own click.
fn handle_key(mut state: Signal<CarouselState>, evt: KeyboardEvent, origin: KeyOrigin) {
    if origin == KeyOrigin::Control {
        evt.stop_propagation();
    }
    let Some(command) = carousel_key(&evt.key()).and_then(|key| KeyCommand::resolve(key, origin)) else {
        return;
    };
    evt.prevent_default();
    state.write().apply_key(command);
}

fn carousel_key(key: &Key) -> Option<CarouselKey> {
    match key {
        Key::ArrowLeft => Some(CarouselKey::ArrowLeft),
        Key::ArrowRight => Some(CarouselKey::ArrowRight),
        Key::Home => Some(CarouselKey::Home),
        Key::End => Some(CarouselKey::End),
        Key::Enter => Some(CarouselKey::Enter),
        Key::Character(c) if c == " " => Some(CarouselKey::Space),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_keys() {
        assert_eq!(carousel_key(&Key::ArrowLeft), Some(CarouselKey::ArrowLeft));
        assert_eq!(carousel_key(&Key::End), Some(CarouselKey::End));
        assert_eq!(carousel_key(&Key::Enter), Some(CarouselKey::Enter));
        assert_eq!(carousel_key(&Key::Character(" ".into())), Some(CarouselKey::Space));
        assert_eq!(carousel_key(&Key::Character("a".into())), None);
        assert_eq!(carousel_key(&Key::Tab), None);
    }

    #[test]
    fn test_enter_on_button_leaves_navigation_to_click() {
        let command = carousel_key(&Key::Enter).and_then(|key| KeyCommand::resolve(key, KeyOrigin::Control));
        assert_eq!(command, None);
        let command = carousel_key(&Key::Enter).and_then(|key| KeyCommand::resolve(key, KeyOrigin::Container));
        assert_eq!(command, Some(KeyCommand::ToggleAutoplay));
    }
}
