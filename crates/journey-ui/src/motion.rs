//! Motion preference for the whole page.
//!
//! Resolved once at startup, either from a forced value (config or CLI) or
//! from the platform's `prefers-reduced-motion` media query.

use dioxus::prelude::*;
use journey_core::MotionPreference;

/// Resolved motion preference; `None` until the root has resolved it.
pub static MOTION: GlobalSignal<Option<MotionPreference>> = GlobalSignal::new(|| None);

const REDUCED_MOTION_SCRIPT: &str = r#"
dioxus.send(window.matchMedia("(prefers-reduced-motion: reduce)").matches);
"#;

/// Current motion preference, `Full` until resolved.
pub fn current_motion() -> MotionPreference {
    MOTION.read().unwrap_or_default()
}

/// Root wrapper that resolves the motion preference before rendering its
/// children, so every carousel and timeline entry sees the final value.
#[component]
pub fn MotionRoot(forced: Option<MotionPreference>, children: Element) -> Element {
    use_future(move || async move {
        let preference = match forced {
            Some(preference) => preference,
            None => query_platform_preference().await,
        };
        tracing::info!(?preference, forced = forced.is_some(), "Motion preference resolved");
        *MOTION.write() = Some(preference);
    });

    let motion = *MOTION.read();
    let motion_attr = match motion {
        Some(MotionPreference::Reduced) => "reduced",
        Some(MotionPreference::Full) => "full",
        None => "pending",
    };

    rsx! {
        div {
            class: "journey-root",
            "data-motion": "{motion_attr}",
            if motion.is_some() {
                {children}
            }
        }
    }
}

async fn query_platform_preference() -> MotionPreference {
    let mut eval = document::eval(REDUCED_MOTION_SCRIPT);
    match eval.recv::<bool>().await {
        Ok(reduced) => MotionPreference::from_reduced(reduced),
        Err(e) => {
            tracing::warn!(error = ?e, "Could not query prefers-reduced-motion, assuming full motion");
            MotionPreference::Full
        }
    }
}
