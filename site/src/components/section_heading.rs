//! Centered section title with a supporting line, revealed on scroll.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::theme::use_theme;

#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <Reveal class="text-center mb-16">
            <h2 class=move || format!("text-3xl md:text-4xl font-bold mb-6 {}", theme.palette().heading)>{title}</h2>
            {subtitle
                .map(|text| {
                    view! {
                        <p class=move || format!("text-lg max-w-2xl mx-auto {}", theme.palette().body)>{text}</p>
                    }
                })}
        </Reveal>
    }
}
