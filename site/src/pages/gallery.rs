//! Photo gallery with a category filter and a lightbox.
//!
//! The lightbox holds an index into the filtered list. Previous/next wrap
//! around at either end; changing the filter closes it.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::company::images;
use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::state::theme::use_theme;
use crate::util::motion::{Motion, stagger};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GalleryCategory {
    Facility,
    Production,
    Products,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 3] =
        [GalleryCategory::Facility, GalleryCategory::Production, GalleryCategory::Products];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GalleryCategory::Facility => "Facility",
            GalleryCategory::Production => "Production",
            GalleryCategory::Products => "Products",
        }
    }
}

#[derive(Debug)]
pub struct GalleryItem {
    pub title: &'static str,
    pub category: GalleryCategory,
    pub image: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem { title: "Main Warehouse", category: GalleryCategory::Facility, image: images::WAREHOUSE },
    GalleryItem { title: "Manufacturing Floor", category: GalleryCategory::Facility, image: images::FACILITY },
    GalleryItem { title: "Corrugator Line", category: GalleryCategory::Production, image: images::FACILITY },
    GalleryItem { title: "Quality Inspection", category: GalleryCategory::Production, image: images::FACILITY },
    GalleryItem { title: "Palletized Orders", category: GalleryCategory::Products, image: images::WAREHOUSE },
    GalleryItem { title: "Outbound Shipping", category: GalleryCategory::Products, image: images::WAREHOUSE },
];

/// Items in `category`, or all of them for `None`, in gallery order.
#[must_use]
pub fn filter_gallery(category: Option<GalleryCategory>) -> Vec<&'static GalleryItem> {
    GALLERY.iter().filter(|item| category.is_none_or(|c| c == item.category)).collect()
}

/// Lightbox navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Previous,
    Next,
}

impl LightboxAction {
    /// Keyboard binding for `key` (a `KeyboardEvent.key` value).
    #[must_use]
    pub fn from_key(key: &str) -> Option<LightboxAction> {
        match key {
            "Escape" => Some(LightboxAction::Close),
            "ArrowLeft" => Some(LightboxAction::Previous),
            "ArrowRight" => Some(LightboxAction::Next),
            _ => None,
        }
    }
}

/// Lightbox state after `action`, for a list of `len` items.
///
/// A closed lightbox stays closed; an index past the end closes it.
#[must_use]
pub fn lightbox_step(open: Option<usize>, action: LightboxAction, len: usize) -> Option<usize> {
    let index = open.filter(|&i| i < len)?;
    match action {
        LightboxAction::Close => None,
        LightboxAction::Previous => Some(if index == 0 { len - 1 } else { index - 1 }),
        LightboxAction::Next => Some((index + 1) % len),
    }
}

#[component]
fn Lightbox(category: RwSignal<Option<GalleryCategory>>, open: RwSignal<Option<usize>>) -> impl IntoView {
    let act = move |action: LightboxAction| {
        let len = filter_gallery(category.get_untracked()).len();
        open.update(|o| *o = lightbox_step(*o, action, len));
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if open.get_untracked().is_none() {
                return;
            }
            if let Some(action) = LightboxAction::from_key(&ev.key()) {
                ev.prevent_default();
                act(action);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let current = move || open.get().and_then(|i| filter_gallery(category.get()).get(i).copied());
    let button = "absolute p-3 rounded-full bg-white/10 hover:bg-white/20 text-white transition-colors";

    view! {
        {move || {
            current()
                .map(|item| {
                    view! {
                        <div
                            class="fixed inset-0 z-[60] bg-black/90 flex items-center justify-center p-4"
                            role="dialog"
                            aria-modal="true"
                            aria-label=item.title
                            on:click=move |_| act(LightboxAction::Close)
                        >
                            <figure class="max-w-5xl w-full" on:click=|ev| ev.stop_propagation()>
                                <img src=item.image alt=item.title class="w-full max-h-[80vh] object-contain rounded-lg"/>
                                <figcaption class="mt-4 text-center text-white">
                                    <span class="text-lg font-semibold">{item.title}</span>
                                    <span class="ml-3 text-gray-400">{item.category.label()}</span>
                                </figcaption>
                            </figure>
                            <button
                                type="button"
                                class=format!("{button} top-4 right-4")
                                aria-label="Close"
                                on:click=move |_| act(LightboxAction::Close)
                            >
                                <Icon kind=IconKind::X class="w-6 h-6"/>
                            </button>
                            <button
                                type="button"
                                class=format!("{button} left-4 top-1/2 -translate-y-1/2")
                                aria-label="Previous image"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    act(LightboxAction::Previous);
                                }
                            >
                                <Icon kind=IconKind::ChevronLeft class="w-6 h-6"/>
                            </button>
                            <button
                                type="button"
                                class=format!("{button} right-4 top-1/2 -translate-y-1/2")
                                aria-label="Next image"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    act(LightboxAction::Next);
                                }
                            >
                                <Icon kind=IconKind::ChevronRight class="w-6 h-6"/>
                            </button>
                        </div>
                    }
                })
        }}
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let theme = use_theme();
    let category = RwSignal::new(None::<GalleryCategory>);
    let open = RwSignal::new(None::<usize>);

    let options = std::iter::once(None).chain(GalleryCategory::ALL.into_iter().map(Some));

    view! {
        <section class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section)>
            <div class="container mx-auto px-4">
                <SectionHeading title="Gallery" subtitle="A look inside our facility, our production lines and finished work"/>

                <div class="flex flex-wrap justify-center gap-3 mb-12" role="group" aria-label="Filter by category">
                    {options
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        let palette = theme.palette();
                                        let tone = if category.get() == option { palette.chip_active } else { palette.chip };
                                        format!("px-5 py-2 rounded-full text-sm font-medium transition-colors {tone}")
                                    }
                                    aria-pressed=move || (category.get() == option).to_string()
                                    on:click=move |_| {
                                        category.set(option);
                                        open.set(None);
                                    }
                                >
                                    {option.map_or("All", GalleryCategory::label)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        filter_gallery(category.get())
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <Reveal motion=Motion::default().delay(stagger(index, 80)).on_mount()>
                                        <button
                                            type="button"
                                            class="group relative block w-full aspect-[4/3] overflow-hidden rounded-xl shadow-xl"
                                            aria-label=format!("Open {}", item.title)
                                            on:click=move |_| open.set(Some(index))
                                        >
                                            <img
                                                src=item.image
                                                alt=item.title
                                                loading="lazy"
                                                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                                            />
                                            <span class="absolute inset-x-0 bottom-0 p-4 text-left text-white bg-gradient-to-t from-black/70 to-transparent">
                                                <span class="block font-semibold">{item.title}</span>
                                                <span class="block text-sm text-gray-300">{item.category.label()}</span>
                                            </span>
                                        </button>
                                    </Reveal>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
        <Lightbox category=category open=open/>
    }
}
