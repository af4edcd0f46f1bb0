use gloo_timers::callback::Timeout;
use serde_json::json;
use web_sys::Element;
use yew::prelude::*;

use super::browser::{scroll_offset, VisibilityObserver, WindowListener};
use crate::{
    reveal::RevealLatch,
    telemetry::{log_event, LogLevel},
    typing::TypingState,
};

/// Drives the typing engine with one pending timeout, dropped on every state change
/// and on unmount.
#[hook]
pub fn use_typing(rotation: &'static [&'static str]) -> TypingState {
    let state = use_state(TypingState::new);

    {
        let handle = state.clone();
        use_effect_with((*state).clone(), move |current| {
            let next = current.step(rotation);
            let delay = current.delay_ms().round().clamp(0.0, f64::from(u32::MAX)) as u32;
            let timeout = Timeout::new(delay, move || handle.set(next));
            move || drop(timeout)
        });
    }

    (*state).clone()
}

/// Reports the vertical scroll offset on mount and on every scroll event.
#[hook]
pub fn use_scroll_offset(on_scroll: Callback<f64>) {
    use_effect_with((), move |_| {
        let report = move || on_scroll.emit(scroll_offset());
        report();
        let listener = WindowListener::attach("scroll", report);
        move || drop(listener)
    });
}

/// Returns a node ref to attach and whether it has been revealed.
///
/// Flips to `true` once, the first time the node is at least `threshold` visible.
/// Without an `IntersectionObserver` the node is revealed immediately.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let mut latch = RevealLatch::new(threshold);
            let threshold = latch.threshold();

            let observer = node.cast::<Element>().and_then(|element| {
                let on_reveal = revealed.clone();
                VisibilityObserver::observe(&element, threshold, move |intersecting, ratio| {
                    if latch.observe(intersecting, ratio) {
                        on_reveal.set(true);
                    }
                    latch.is_revealed()
                })
                .map_err(|_| {
                    log_event(
                        LogLevel::Info,
                        "reveal_observer_unavailable",
                        json!({ "threshold": threshold }),
                    );
                })
                .ok()
            });

            if observer.is_none() && latch.force() {
                revealed.set(true);
            }

            move || drop(observer)
        });
    }

    (node, *revealed)
}
