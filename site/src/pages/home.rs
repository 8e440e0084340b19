//! Landing page: hero, parallax bands, feature grid and innovation block.

use leptos::prelude::*;

use crate::company::images;
use crate::components::icon::{Icon, IconKind};
use crate::components::parallax_band::ParallaxBand;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::state::theme::use_theme;
use crate::util::motion::{Motion, stagger};

struct Feature {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Package,
        title: "Premium Quality",
        description: "Industry-leading packaging solutions crafted with precision",
    },
    Feature {
        icon: IconKind::Shield,
        title: "ISO Certified",
        description: "Internationally recognized quality management systems",
    },
    Feature {
        icon: IconKind::Truck,
        title: "Global Delivery",
        description: "Reliable shipping to destinations worldwide",
    },
    Feature {
        icon: IconKind::Users,
        title: "Expert Support",
        description: "Dedicated team of packaging specialists at your service",
    },
];

const INNOVATIONS: &[&str] = &[
    "State-of-the-art manufacturing facility",
    "Rigorous quality control processes",
    "Environmentally conscious practices",
    "Custom solutions for unique requirements",
];

const PRODUCT_HIGHLIGHTS: &[(&str, &str)] = &[
    ("Corrugated Boxes", "Shipping and display boxes built to carry weight and protect contents"),
    ("Retail Bags", "Paper and poly bags printed to your brand standards"),
    ("Labels & Tags", "Durable labels for products, logistics and compliance"),
];

const MATERIAL_HIGHLIGHTS: &[&str] = &["Kraft Paper", "Corrugated Board", "Recycled Fiber", "Soy-Based Inks"];

const HERO_MS: u32 = 800;

#[component]
fn Hero() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section class="relative min-h-screen -mt-16">
            <div
                class="absolute inset-0 bg-cover bg-center bg-fixed"
                style=format!("background-image:url('{}')", images::WAREHOUSE)
            >
                <div class=move || format!("absolute inset-0 transition-colors duration-300 {}", theme.palette().hero_overlay)></div>
            </div>

            <div class="relative h-screen flex items-center justify-center text-center">
                <div class="container mx-auto px-4">
                    <Reveal motion=Motion::rise(20.0).duration(HERO_MS).on_mount() class="max-w-4xl mx-auto">
                        <Reveal motion=Motion::rise(-20.0).duration(HERO_MS).on_mount()>
                            <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">
                                "Innovative Packaging Solutions"
                            </h1>
                        </Reveal>
                        <Reveal motion=Motion::fade().duration(HERO_MS).delay(300).on_mount()>
                            <p class="text-xl md:text-2xl text-gray-200 mb-12 max-w-2xl mx-auto">
                                "Elevating your products with premium quality packaging solutions for the modern industry"
                            </p>
                        </Reveal>
                        <Reveal
                            motion=Motion::fade().delay(600).on_mount()
                            class="flex flex-col sm:flex-row items-center justify-center gap-4"
                        >
                            <a
                                href="/products"
                                class=move || {
                                    format!(
                                        "px-8 py-4 rounded-lg text-lg font-medium transition-all hover:scale-105 active:scale-95 {}",
                                        theme.palette().button_primary,
                                    )
                                }
                            >
                                "Explore Products"
                            </a>
                            <a
                                href="/contact"
                                class="px-8 py-4 rounded-lg text-lg font-medium border-2 border-white text-white hover:bg-white/10 transition-all hover:scale-105 active:scale-95"
                            >
                                "Contact Us"
                            </a>
                        </Reveal>
                    </Reveal>
                </div>
            </div>

            <a
                href="#why-jeil"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-white animate-bounce"
                aria-label="Scroll to content"
            >
                <Icon kind=IconKind::ChevronDown class="w-8 h-8"/>
            </a>
        </section>
    }
}

#[component]
fn ProductsBand() -> impl IntoView {
    view! {
        <ParallaxBand image=images::FACILITY class="py-32">
            <div class="container mx-auto px-4 text-white">
                <Reveal class="text-center mb-12">
                    <h2 class="text-3xl md:text-5xl font-bold mb-4">"Packaging for Every Product"</h2>
                    <p class="text-lg text-gray-200 max-w-2xl mx-auto">
                        "From single retail units to full pallet loads, we design the container around what goes in it."
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {PRODUCT_HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, text))| {
                            view! {
                                <Reveal
                                    motion=Motion::default().delay(stagger(i, 150))
                                    class="p-6 rounded-xl bg-white/10 backdrop-blur-sm border border-white/20"
                                >
                                    <h3 class="text-xl font-semibold mb-2">{*title}</h3>
                                    <p class="text-gray-200">{*text}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <a href="/products" class="inline-flex items-center gap-2 font-medium underline underline-offset-4">
                        "View the catalog"
                        <Icon kind=IconKind::ChevronRight class="w-4 h-4"/>
                    </a>
                </div>
            </div>
        </ParallaxBand>
    }
}

#[component]
fn Features() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id="why-jeil" class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section)>
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Why Choose JEIL?"
                    subtitle="We combine innovation with expertise to deliver packaging solutions that exceed expectations"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            view! {
                                <Reveal motion=Motion::default().delay(stagger(i, 100))>
                                    <div class=move || format!("h-full p-6 rounded-xl {}", theme.palette().card)>
                                        <div class=move || {
                                            format!(
                                                "w-16 h-16 rounded-full flex items-center justify-center mb-6 mx-auto {} {}",
                                                theme.palette().accent_soft,
                                                theme.palette().accent_text,
                                            )
                                        }>
                                            <Icon kind=feature.icon class="w-8 h-8"/>
                                        </div>
                                        <h3 class=move || {
                                            format!("text-xl font-semibold mb-3 text-center {}", theme.palette().heading)
                                        }>{feature.title}</h3>
                                        <p class=move || format!("text-center {}", theme.palette().body)>
                                            {feature.description}
                                        </p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn MaterialsBand() -> impl IntoView {
    view! {
        <ParallaxBand image=images::WAREHOUSE factor=0.2 class="py-28">
            <div class="container mx-auto px-4 text-white text-center">
                <Reveal>
                    <h2 class="text-3xl md:text-5xl font-bold mb-4">"Responsibly Sourced Raw Materials"</h2>
                    <p class="text-lg text-gray-200 max-w-2xl mx-auto mb-10">
                        "Every order starts with fiber, board and ink we can trace back to the mill."
                    </p>
                </Reveal>
                <div class="flex flex-wrap justify-center gap-4 mb-10">
                    {MATERIAL_HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, name)| {
                            view! {
                                <Reveal
                                    motion=Motion::fade().delay(stagger(i, 100))
                                    class="px-5 py-2 rounded-full bg-white/15 border border-white/30"
                                >
                                    {*name}
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <a href="/materials" class="inline-flex items-center gap-2 font-medium underline underline-offset-4">
                    "Learn about our materials"
                    <Icon kind=IconKind::ChevronRight class="w-4 h-4"/>
                </a>
            </div>
        </ParallaxBand>
    }
}

#[component]
fn Innovation() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section_alt)>
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <Reveal motion=Motion::slide_x(-20.0)>
                        <h2 class=move || format!("text-3xl md:text-4xl font-bold mb-6 {}", theme.palette().heading)>
                            "Leading the Industry in Innovation"
                        </h2>
                        <p class=move || format!("text-lg mb-8 {}", theme.palette().body)>
                            "With over a decade of experience, we've established ourselves as pioneers in the packaging industry. "
                            "Our commitment to quality and innovation drives us to continuously improve and evolve our solutions."
                        </p>
                        <ul class="space-y-4">
                            {INNOVATIONS
                                .iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    view! {
                                        <li class=move || theme.palette().body>
                                            <Reveal
                                                motion=Motion::slide_x(-20.0).delay(stagger(i, 100))
                                                class="flex items-center"
                                            >
                                                <span class=move || {
                                                    format!("w-2 h-2 rounded-full mr-3 {}", theme.palette().accent_solid)
                                                }></span>
                                                {*item}
                                            </Reveal>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>
                    <Reveal motion=Motion::slide_x(20.0) class="relative">
                        <img src=images::FACILITY alt="Manufacturing facility" class="rounded-lg shadow-2xl"/>
                        <div class=move || {
                            format!("absolute -bottom-6 -right-6 p-6 rounded-lg text-white {}", theme.palette().accent_solid)
                        }>
                            <p class="text-3xl font-bold">"10+"</p>
                            <p class="text-sm">"Years of Excellence"</p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <ProductsBand/>
        <Features/>
        <MaterialsBand/>
        <Innovation/>
    }
}
