//! End-to-end carousel behavior with a real (paused) autoplay timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use journey_core::carousel::{
    AutoplayTick, AutoplayTimer, CarouselConfig, CarouselMode, CarouselState, PLACEHOLDER_IMAGES,
};
use journey_core::MotionPreference;
use tokio::sync::mpsc;

const FULL: MotionPreference = MotionPreference::Full;

fn three_images() -> Vec<String> {
    vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()]
}

fn arm(state: &CarouselState, interval: Duration) -> (AutoplayTimer, mpsc::UnboundedReceiver<AutoplayTick>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let generation = state.armed_generation(FULL).expect("carousel should be autoplaying");
    let timer = AutoplayTimer::arm(interval, generation, move |tick| tx.send(tick).is_ok());
    (timer, rx)
}

#[tokio::test(start_paused = true)]
async fn autoplay_tick_then_swipe_stops_autoplay() {
    let config = CarouselConfig::default().with_autoplay(true);
    let mut state = CarouselState::new(three_images(), &config);
    assert_eq!(state.mode(), CarouselMode::PLAYING);

    let (_timer, mut rx) = arm(&state, config.interval());

    // First tick arrives after one interval
    let tick = rx.recv().await.unwrap();
    assert_eq!(state.tick(tick, FULL), Some(1));

    // 80px swipe to the left
    state.touch_start(300.0);
    state.touch_move(220.0);
    assert_eq!(state.touch_end(), Some(2));
    assert_eq!(state.mode(), CarouselMode::MANUAL);
    assert_eq!(state.armed_generation(FULL), None);

    // The old timer is still alive here; its ticks must not move the index
    for _ in 0..3 {
        let tick = rx.recv().await.unwrap();
        assert_eq!(state.tick(tick, FULL), None);
    }
    assert_eq!(state.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn hover_pauses_and_resumes_with_new_generation() {
    let config = CarouselConfig::default().with_autoplay(true).with_interval_ms(1000);
    let mut state = CarouselState::new(three_images(), &config);

    let (timer, mut rx) = arm(&state, config.interval());
    state.pointer_enter();
    assert_eq!(state.mode(), CarouselMode::PAUSED);
    assert_eq!(state.armed_generation(FULL), None);

    let tick = rx.recv().await.unwrap();
    assert_eq!(state.tick(tick, FULL), None);
    timer.disarm();

    state.pointer_leave();
    let (_timer, mut rx) = arm(&state, config.interval());
    let tick = rx.recv().await.unwrap();
    assert_eq!(state.tick(tick, FULL), Some(1));
    assert_eq!(state.mode(), CarouselMode::PLAYING);
}

#[tokio::test(start_paused = true)]
async fn observer_sees_every_index() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let config = CarouselConfig::default().with_autoplay(true);
    let mut state = CarouselState::new(three_images(), &config)
        .with_observer(move |index: usize| sink.lock().unwrap().push(index));

    let (_timer, mut rx) = arm(&state, config.interval());
    for _ in 0..4 {
        let tick = rx.recv().await.unwrap();
        state.tick(tick, FULL);
    }
    state.go_to(0);

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0, 1, 0]);
}

#[test]
fn empty_event_uses_placeholders() {
    let mut state = CarouselState::new(Vec::new(), &CarouselConfig::default());
    assert_eq!(state.len(), 3);
    assert_eq!(state.counter_label(), "1 / 3");
    assert_eq!(state.images()[1], PLACEHOLDER_IMAGES[1]);
    assert_eq!(state.dots().len(), 3);

    state.previous();
    assert_eq!(state.counter_label(), "3 / 3");
}

#[test]
fn reduced_motion_never_arms() {
    let config = CarouselConfig::default().with_autoplay(true);
    let state = CarouselState::new(three_images(), &config);
    assert!(state.is_auto_playing());
    assert_eq!(state.armed_generation(MotionPreference::Reduced), None);
}

#[test]
fn broken_image_falls_back_without_touching_others() {
    let mut state = CarouselState::new(three_images(), &CarouselConfig::default());
    state.mark_load_failed(1);
    assert_eq!(state.source_for(0), "a.jpg");
    assert_eq!(state.source_for(1), PLACEHOLDER_IMAGES[0]);
    assert_eq!(state.source_for(2), "c.jpg");
}
