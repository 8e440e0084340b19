//! One-shot entrance animation for a block of content.
//!
//! Wraps children in a `div` whose style follows a [`MotionPhase`]. Blocks
//! revealed on scroll watch themselves with an `IntersectionObserver` and
//! disconnect after the first intersection, so the animation never replays.
//! Without observer support the block is shown immediately.

use leptos::prelude::*;

use crate::util::motion::{Motion, MotionPhase};
#[cfg(feature = "hydrate")]
use crate::util::motion::{MotionTrigger, RevealOn};

/// Fraction of the block that must be visible before it reveals.
#[cfg(feature = "hydrate")]
const REVEAL_THRESHOLD: f64 = 0.15;

#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let phase = RwSignal::new(MotionPhase::Initial);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    watch(node, phase, motion.reveal_on);

    view! {
        <div node_ref=node class=format!("reveal {class}") style=move || motion.style(phase.get())>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn advance(phase: RwSignal<MotionPhase>, trigger: MotionTrigger, reveal_on: RevealOn) {
    phase.try_update(|p| *p = p.on(trigger, reveal_on));
}

#[cfg(feature = "hydrate")]
fn watch(node: NodeRef<leptos::html::Div>, phase: RwSignal<MotionPhase>, reveal_on: RevealOn) {
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };
        if phase.get_untracked() != MotionPhase::Initial {
            return;
        }
        if reveal_on == RevealOn::Mount {
            advance(phase, MotionTrigger::Mount, reveal_on);
            return;
        }

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if hit {
                advance(phase, MotionTrigger::ScrollIntoView, reveal_on);
                observer.disconnect();
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        // Ownership moves to the JS side; collected with the observer.
        let callback = callback.into_js_value();

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        match IntersectionObserver::new_with_options(callback.unchecked_ref(), &init) {
            Ok(observer) => observer.observe(&el),
            Err(err) => {
                log::warn!("reveal: IntersectionObserver unavailable, showing content: {err:?}");
                advance(phase, MotionTrigger::ScrollIntoView, reveal_on);
            }
        }
    });
}
