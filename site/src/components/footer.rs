//! Site footer: blurb, quick links and contact details.

use leptos::prelude::*;

use crate::company;
use crate::components::icon::{Icon, IconKind};
use crate::state::route::ROUTE_TABLE;
use crate::state::theme::use_theme;

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    let heading = move || format!("text-lg font-semibold mb-4 {}", theme.palette().heading);
    let accent = move || format!("shrink-0 {}", theme.palette().accent_text);

    view! {
        <footer class=move || format!("relative transition-colors duration-300 {}", theme.palette().footer)>
            <div class="container mx-auto px-4 py-16 grid grid-cols-1 md:grid-cols-3 gap-12">
                <div>
                    <h3 class=heading>{company::NAME}</h3>
                    <p>{company::TAGLINE}</p>
                </div>
                <div>
                    <h3 class=heading>"Quick Links"</h3>
                    <ul class="space-y-2">
                        {ROUTE_TABLE
                            .iter()
                            .map(|entry| {
                                view! {
                                    <li>
                                        <a
                                            href=entry.path
                                            class=move || format!("transition-colors {}", theme.palette().nav_link)
                                        >
                                            {entry.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3 class=heading>"Contact"</h3>
                    <ul class="space-y-3">
                        <li class="flex items-start gap-3">
                            <span class=accent>
                                <Icon kind=IconKind::MapPin class="w-4 h-4"/>
                            </span>
                            <span>{company::ADDRESS}</span>
                        </li>
                        <li class="flex items-center gap-3">
                            <span class=accent>
                                <Icon kind=IconKind::Phone class="w-4 h-4"/>
                            </span>
                            <span>{company::PHONE}</span>
                        </li>
                        <li class="flex items-center gap-3">
                            <span class=accent>
                                <Icon kind=IconKind::Mail class="w-4 h-4"/>
                            </span>
                            <a href=format!("mailto:{}", company::EMAIL)>{company::EMAIL}</a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class=move || format!("border-t {}", theme.palette().divider)>
                <p class="container mx-auto px-4 py-6 text-sm text-center">
                    "© " {company::NAME} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}
