//! Company story, headline figures, values and milestones.

use leptos::prelude::*;

use crate::company::images;
use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::state::theme::use_theme;
use crate::util::motion::{Motion, stagger};

const STATS: &[(&str, &str)] = &[
    ("10+", "Years in business"),
    ("500+", "Active clients"),
    ("30+", "Countries served"),
    ("1M+", "Units shipped monthly"),
];

const VALUES: &[(IconKind, &str, &str)] = &[
    (IconKind::Award, "Quality First", "Every run is checked against the approved sample before it ships."),
    (IconKind::Leaf, "Sustainability", "Recycled fiber, water-based inks and plastic-free alternatives by default."),
    (IconKind::Users, "Partnership", "A dedicated specialist follows each account from design to delivery."),
    (IconKind::Shield, "Reliability", "ISO-certified processes and on-time delivery you can plan around."),
];

const MILESTONES: &[(&str, &str, &str)] = &[
    ("2013", "Founded", "JEIL opens its first converting line for corrugated boxes."),
    ("2016", "ISO certification", "Quality management system certified to international standards."),
    ("2019", "Facility expansion", "A second plant adds printing, bag making and label lines."),
    ("2022", "Going green", "Transition to recycled board and soy-based inks across the range."),
    ("2024", "Global reach", "Export partnerships bring JEIL packaging to over 30 countries."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let theme = use_theme();
    let heading = move |size: &'static str| format!("{size} {}", theme.palette().heading);

    view! {
        <section class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section)>
            <div class="container mx-auto px-4 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <Reveal motion=Motion::slide_x(-20.0).on_mount()>
                    <p class=move || format!("font-semibold mb-3 {}", theme.palette().accent_text)>"About JEIL"</p>
                    <h1 class=move || heading("text-4xl md:text-5xl font-bold mb-6")>"Packaging Built on Experience"</h1>
                    <p class=move || format!("text-lg mb-4 {}", theme.palette().body)>
                        "JEIL Packaging began as a small corrugated box workshop and grew into a full-service "
                        "packaging manufacturer. Today we design, print and convert boxes, bags and labels for "
                        "brands across food, retail, electronics and industry."
                    </p>
                    <p class=move || format!("text-lg {}", theme.palette().body)>
                        "What has not changed is how we work: close to our customers, careful with materials, "
                        "and proud of every box that leaves the plant."
                    </p>
                </Reveal>
                <Reveal motion=Motion::slide_x(20.0).on_mount()>
                    <img src=images::FACILITY alt="JEIL production facility" class="rounded-lg shadow-2xl"/>
                </Reveal>
            </div>
        </section>

        <section class=move || format!("py-16 transition-colors duration-300 {}", theme.palette().section_alt)>
            <div class="container mx-auto px-4 grid grid-cols-2 lg:grid-cols-4 gap-8 text-center">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(i, (value, label))| {
                        view! {
                            <Reveal motion=Motion::default().delay(stagger(i, 100))>
                                <p class=move || format!("text-4xl font-bold mb-2 {}", theme.palette().accent_text)>{*value}</p>
                                <p class=move || theme.palette().muted>{*label}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section)>
            <div class="container mx-auto px-4">
                <SectionHeading title="Our Values" subtitle="The principles behind every order we take on"/>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {VALUES
                        .iter()
                        .enumerate()
                        .map(|(i, &(icon, title, text))| {
                            view! {
                                <Reveal motion=Motion::default().delay(stagger(i, 100))>
                                    <div class=move || format!("h-full p-6 rounded-xl {}", theme.palette().card)>
                                        <div class=move || format!("mb-4 {}", theme.palette().accent_text)>
                                            <Icon kind=icon class="w-10 h-10"/>
                                        </div>
                                        <h3 class=move || heading("text-xl font-semibold mb-2")>{title}</h3>
                                        <p class=move || theme.palette().body>{text}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section_alt)>
            <div class="container mx-auto px-4 max-w-3xl">
                <SectionHeading title="Our Journey"/>
                <ol class=move || format!("relative border-l-2 ml-4 {}", theme.palette().divider)>
                    {MILESTONES
                        .iter()
                        .enumerate()
                        .map(|(i, &(year, title, text))| {
                            view! {
                                <li class="mb-10 ml-8">
                                    <span class=move || {
                                        format!(
                                            "absolute -left-[9px] w-4 h-4 rounded-full {}",
                                            theme.palette().accent_solid,
                                        )
                                    }></span>
                                    <Reveal motion=Motion::slide_x(20.0).delay(stagger(i, 80))>
                                        <p class=move || format!("text-sm font-semibold {}", theme.palette().accent_text)>{year}</p>
                                        <h3 class=move || heading("text-xl font-semibold mb-1")>{title}</h3>
                                        <p class=move || theme.palette().body>{text}</p>
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
