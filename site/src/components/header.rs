//! Persistent top navigation with theme toggle and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links come from the static route table so navigation and routing cannot
//! drift apart. The header observes the theme and may request a flip; it
//! never owns the flag.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::company;
use crate::components::icon::{Icon, IconKind};
use crate::state::route::{PageRoute, ROUTE_TABLE};
use crate::state::theme::use_theme;

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            class=move || format!("p-2 rounded-lg transition-colors {}", theme.palette().chip)
            on:click=move |_| theme.toggle()
            aria-label=move || theme.flag().toggle_label()
            title=move || theme.flag().toggle_label()
        >
            {move || {
                let kind = if theme.flag().is_dark() { IconKind::Sun } else { IconKind::Moon };
                view! { <Icon kind=kind class="w-5 h-5"/> }
            }}
        </button>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let location = use_location();
    let menu_open = RwSignal::new(false);
    let active = Memo::new(move |_| PageRoute::resolve(&location.pathname.get()));

    // Any navigation closes the mobile menu.
    Effect::new(move || {
        active.track();
        menu_open.set(false);
    });

    let link_class = move |route: PageRoute| {
        let palette = theme.palette();
        if active.get() == route { palette.nav_link_active } else { palette.nav_link }
    };

    let links = move |extra: &'static str| {
        ROUTE_TABLE
            .iter()
            .map(|entry| {
                let route = entry.route;
                view! {
                    <a
                        href=entry.path
                        class=move || format!("transition-colors {extra} {}", link_class(route))
                        aria-current=move || (active.get() == route).then_some("page")
                    >
                        {entry.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 inset-x-0 z-50 border-b backdrop-blur-md transition-colors duration-300 {}",
                theme.palette().nav,
            )
        }>
            <nav class="container mx-auto px-4 h-16 flex items-center justify-between" aria-label="Main">
                <a href="/" class="flex items-center gap-2 text-xl font-bold">
                    <span class=move || {
                        format!(
                            "inline-flex w-9 h-9 items-center justify-center rounded-lg text-white {}",
                            theme.palette().accent_solid,
                        )
                    }>"J"</span>
                    {company::NAME}
                </a>

                <div class="hidden md:flex items-center gap-8">
                    {links("text-sm")}
                    <ThemeToggle/>
                </div>

                <div class="flex md:hidden items-center gap-2">
                    <ThemeToggle/>
                    <button
                        type="button"
                        class="p-2 rounded-lg"
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let kind = if menu_open.get() { IconKind::X } else { IconKind::Menu };
                            view! { <Icon kind=kind class="w-6 h-6"/> }
                        }}
                    </button>
                </div>
            </nav>

            <Show when=move || menu_open.get()>
                <div class=move || format!("md:hidden border-t {}", theme.palette().divider)>
                    <div class="container mx-auto px-4 py-4 flex flex-col gap-4">{links("text-base")}</div>
                </div>
            </Show>
        </header>
    }
}
