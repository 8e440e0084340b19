//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a static composition of sections whose only input is the
//! theme flag read from context. [`render_page`] is the single place a
//! [`PageRoute`] becomes a view.

#[cfg(all(test, feature = "ssr"))]
#[path = "mod_test.rs"]
mod mod_test;

pub mod about;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod materials;
pub mod not_found;
pub mod products;

use leptos::prelude::*;

use crate::state::route::PageRoute;
use about::AboutPage;
use contact::ContactPage;
use gallery::GalleryPage;
use home::HomePage;
use materials::MaterialsPage;
use not_found::NotFoundPage;
use products::ProductsPage;

/// The page component for `route`.
pub fn render_page(route: PageRoute) -> AnyView {
    match route {
        PageRoute::Home => view! { <HomePage/> }.into_any(),
        PageRoute::About => view! { <AboutPage/> }.into_any(),
        PageRoute::Products => view! { <ProductsPage/> }.into_any(),
        PageRoute::Gallery => view! { <GalleryPage/> }.into_any(),
        PageRoute::Contact => view! { <ContactPage/> }.into_any(),
        PageRoute::Materials => view! { <MaterialsPage/> }.into_any(),
        PageRoute::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
