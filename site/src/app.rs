//! Root application component with routing and the theme provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::company;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::scene_layer::SceneLayer;
use crate::components::transition_shell::TransitionShell;
use crate::state::theme::{ThemeContext, ThemeFlag};

/// Shows reveal-animated content when scripts are disabled.
const NOSCRIPT_CSS: &str = ".page-shell,.reveal{opacity:1!important;transform:none!important;animation:none!important}";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=company::TAGLINE/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the theme flag and provides it to every descendant. The router owns
/// the active path; pages are mounted by [`TransitionShell`], so the routes
/// below only register paths and render nothing themselves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = ThemeContext::provide(ThemeFlag::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/jeil-site.css"/>
        <Title text=company::NAME/>

        <Router>
            <div class=move || format!("relative min-h-screen transition-colors duration-300 {}", theme.palette().page)>
                <SceneLayer/>
                <Header/>
                <Routes fallback=|| ()>
                    <Route path=StaticSegment("") view=|| ()/>
                    <Route path=StaticSegment("about") view=|| ()/>
                    <Route path=StaticSegment("products") view=|| ()/>
                    <Route path=StaticSegment("gallery") view=|| ()/>
                    <Route path=StaticSegment("contact") view=|| ()/>
                    <Route path=StaticSegment("materials") view=|| ()/>
                </Routes>
                <TransitionShell/>
                <Footer/>
            </div>
        </Router>
    }
}
