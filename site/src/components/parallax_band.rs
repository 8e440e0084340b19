//! Full-width band whose background image drifts against the scroll.

use leptos::prelude::*;

use crate::state::theme::use_theme;
use crate::util::parallax::shift_style;
#[cfg(feature = "hydrate")]
use crate::util::parallax::background_shift;

#[component]
pub fn ParallaxBand(
    image: &'static str,
    /// Background shift per pixel of distance from the viewport center.
    #[prop(default = 0.3)]
    factor: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let band_ref = NodeRef::<leptos::html::Section>::new();
    let shift = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let Some(band) = band_ref.get_untracked() else {
                return;
            };
            let Some(viewport_height) =
                web_sys::window().and_then(|w| w.inner_height().ok()).and_then(|v| v.as_f64())
            else {
                return;
            };
            let rect = band.get_bounding_client_rect();
            shift.set(background_shift(viewport_height, rect.top(), rect.height(), factor));
        };
        Effect::new(move || {
            if band_ref.get().is_some() {
                measure();
            }
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| measure());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = factor;
    }

    view! {
        <section node_ref=band_ref class=format!("relative overflow-hidden {class}")>
            <div
                class="absolute inset-x-0 -inset-y-40 bg-cover bg-center will-change-transform"
                style=move || format!("background-image:url('{image}');{}", shift_style(shift.get()))
            ></div>
            <div class=move || format!("absolute inset-0 transition-colors duration-300 {}", theme.palette().hero_overlay)></div>
            <div class="relative">{children()}</div>
        </section>
    }
}
