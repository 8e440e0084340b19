//! Fallback for paths outside the route table.

use leptos::prelude::*;

use crate::state::theme::use_theme;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let theme = use_theme();

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <section class=move || {
            format!("min-h-[70vh] flex items-center transition-colors duration-300 {}", theme.palette().section)
        }>
            <div class="container mx-auto px-4 text-center">
                <p class=move || format!("text-7xl font-bold mb-4 {}", theme.palette().accent_text)>"404"</p>
                <h1 class=move || format!("text-3xl font-bold mb-4 {}", theme.palette().heading)>"Page Not Found"</h1>
                <p class=move || format!("text-lg mb-8 {}", theme.palette().body)>
                    "The page you are looking for doesn't exist or has moved."
                </p>
                <a
                    href="/"
                    class=move || format!("inline-block px-6 py-3 rounded-lg font-medium {}", theme.palette().button_primary)
                >
                    "Back to Home"
                </a>
            </div>
        </section>
    }
}
