//! Fixed full-viewport canvas hosting the decorative scene.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scene reads the theme flag and nothing else. It sits behind all
//! content and ignores pointer input. If the canvas has no 2D context the
//! failure is logged and the background stays blank; the page never waits
//! on it.

#[cfg(test)]
#[path = "scene_layer_test.rs"]
mod scene_layer_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "hydrate"))]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use scene::engine::Scene;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::state::theme::use_theme;

#[cfg(feature = "hydrate")]
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[cfg(feature = "hydrate")]
fn differs(a: f64, b: f64) -> bool {
    (a - b).abs() > 1e-6
}

/// Match the backing store to the window size and pixel ratio.
#[cfg(feature = "hydrate")]
fn sync_viewport(scene: &mut Scene) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let dpr = window.device_pixel_ratio();
    let core = &scene.core;
    if differs(width, core.viewport_width) || differs(height, core.viewport_height) || differs(dpr, core.dpr) {
        scene.set_viewport(width, height, dpr);
    }
}

#[cfg(feature = "hydrate")]
fn request_frame(window: &web_sys::Window, slot: &FrameSlot) {
    if let Some(cb) = slot.borrow().as_ref() {
        if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("scene: requestAnimationFrame failed: {err:?}");
        }
    }
}

/// Empty a self-referencing slot. The frame callback holds a clone of its own
/// slot, so the pair is only freed once the slot lets go.
#[cfg(any(test, feature = "hydrate"))]
fn vacate<T>(slot: &Rc<RefCell<Option<T>>>) -> Option<T> {
    slot.borrow_mut().take()
}

/// Stop the loop for good. The callback is still running, so it is dropped
/// on the next task.
#[cfg(feature = "hydrate")]
fn release(slot: &FrameSlot) {
    let cb = vacate(slot);
    leptos::task::spawn_local(async move { drop(cb) });
}

/// Drive `scene` from `requestAnimationFrame` until `alive` clears or a
/// frame fails, then free the loop and the scene it holds.
#[cfg(feature = "hydrate")]
fn start_loop(scene: Rc<RefCell<Option<Scene>>>, alive: Arc<AtomicBool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            *scene.borrow_mut() = None;
            release(&slot_for_cb);
            return;
        }
        if let Some(active) = scene.borrow_mut().as_mut() {
            sync_viewport(active);
            if let Err(err) = active.frame(ts) {
                log::warn!("scene: frame failed, stopping: {err:?}");
                release(&slot_for_cb);
                return;
            }
        }
        request_frame(&window_for_cb, &slot_for_cb);
    }) as Box<dyn FnMut(f64)>);
    *slot.borrow_mut() = Some(cb);
    request_frame(&window, &slot);
}

#[component]
pub fn SceneLayer() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let theme = use_theme();
        let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(None));
        let alive = Arc::new(AtomicBool::new(true));

        {
            let scene = Rc::clone(&scene);
            let alive = Arc::clone(&alive);
            Effect::new(move || {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if scene.borrow().is_some() {
                    return;
                }
                match Scene::new(canvas) {
                    Ok(mut instance) => {
                        instance.set_dark(theme.signal().get_untracked().is_dark());
                        sync_viewport(&mut instance);
                        *scene.borrow_mut() = Some(instance);
                        start_loop(Rc::clone(&scene), Arc::clone(&alive));
                    }
                    Err(err) => log::warn!("scene: init failed, background left blank: {err:?}"),
                }
            });
        }

        {
            let scene = Rc::clone(&scene);
            Effect::new(move || {
                let dark = theme.flag().is_dark();
                if let Some(scene) = scene.borrow_mut().as_mut() {
                    scene.set_dark(dark);
                }
            });
        }

        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="canvas-container" aria-hidden="true">
            <canvas node_ref=canvas_ref></canvas>
        </div>
    }
}
