//! Raw materials we convert, with properties and sourcing notes.

#[cfg(test)]
#[path = "materials_test.rs"]
mod materials_test;

use leptos::prelude::*;

use crate::company::images;
use crate::components::icon::{Icon, IconKind};
use crate::components::parallax_band::ParallaxBand;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::state::theme::use_theme;
use crate::util::motion::{Motion, stagger};

#[derive(Debug)]
pub struct Material {
    pub name: &'static str,
    pub summary: &'static str,
    pub properties: &'static [&'static str],
    pub applications: &'static [&'static str],
    /// Recycled content as a whole percentage.
    pub recycled_pct: u8,
}

pub const MATERIALS: &[Material] = &[
    Material {
        name: "Kraft Paper",
        summary: "Unbleached long-fiber paper with high tear resistance.",
        properties: &["80-200 gsm", "High tensile strength", "Natural brown finish"],
        applications: &["Carrier bags", "Wrapping", "Sack plies"],
        recycled_pct: 40,
    },
    Material {
        name: "Corrugated Board",
        summary: "Fluted medium between liners, in single, double or triple wall.",
        properties: &["B, C, E and BC flutes", "Edge crush tested", "Printable liners"],
        applications: &["Shipping boxes", "Displays", "Inserts"],
        recycled_pct: 70,
    },
    Material {
        name: "Folding Boxboard",
        summary: "Multi-ply virgin board with a smooth coated top side.",
        properties: &["250-450 gsm", "Excellent print surface", "Food contact grades"],
        applications: &["Retail cartons", "Cosmetics", "Confectionery"],
        recycled_pct: 0,
    },
    Material {
        name: "Recycled Fiber Board",
        summary: "Board made entirely from post-consumer recovered paper.",
        properties: &["Grey or white lined", "Rigid", "Cost effective"],
        applications: &["Rigid boxes", "Partitions", "Tubes"],
        recycled_pct: 100,
    },
    Material {
        name: "Label Stock",
        summary: "Face paper or film laminated to adhesive and release liner.",
        properties: &["Permanent or removable adhesive", "Thermal grades", "Weatherproof films"],
        applications: &["Product labels", "Logistics tags", "Seals"],
        recycled_pct: 30,
    },
    Material {
        name: "Molded Pulp",
        summary: "Wet-formed fiber shaped into protective trays and cushions.",
        properties: &["Shock absorbing", "Compostable", "Plastic-free"],
        applications: &["Electronics trays", "Egg and fruit packs", "Corner guards"],
        recycled_pct: 100,
    },
];

/// Short sourcing note for a recycled share.
#[must_use]
pub fn recycled_label(pct: u8) -> String {
    match pct {
        0 => "Virgin fiber, FSC-certified".to_owned(),
        100 => "100% recycled content".to_owned(),
        pct => format!("{}% recycled content", pct.min(100)),
    }
}

#[component]
fn MaterialCard(material: &'static Material, index: usize) -> impl IntoView {
    let theme = use_theme();
    let list = move |title: &'static str, items: &'static [&'static str]| {
        view! {
            <div>
                <h4 class=move || format!("text-sm font-semibold uppercase tracking-wide mb-2 {}", theme.palette().muted)>
                    {title}
                </h4>
                <ul class="space-y-1">
                    {items
                        .iter()
                        .map(|item| view! { <li class=move || theme.palette().body>{*item}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    };

    view! {
        <Reveal motion=Motion::default().delay(stagger(index % 3, 100))>
            <article class=move || format!("h-full p-6 rounded-xl flex flex-col gap-5 {}", theme.palette().card)>
                <div class="flex items-center gap-3">
                    <div class=move || {
                        format!(
                            "w-12 h-12 rounded-lg flex items-center justify-center {} {}",
                            theme.palette().accent_soft,
                            theme.palette().accent_text,
                        )
                    }>
                        <Icon kind=IconKind::Layers class="w-6 h-6"/>
                    </div>
                    <h3 class=move || format!("text-xl font-semibold {}", theme.palette().heading)>{material.name}</h3>
                </div>
                <p class=move || theme.palette().body>{material.summary}</p>
                <div class="grid grid-cols-2 gap-4">
                    {list("Properties", material.properties)}
                    {list("Used for", material.applications)}
                </div>
                <p class=move || format!("mt-auto flex items-center gap-2 text-sm {}", theme.palette().accent_text)>
                    <Icon kind=IconKind::Leaf class="w-4 h-4"/>
                    {recycled_label(material.recycled_pct)}
                </p>
            </article>
        </Reveal>
    }
}

#[component]
pub fn MaterialsPage() -> impl IntoView {
    let theme = use_theme();
    view! {
        <ParallaxBand image=images::WAREHOUSE class="pt-48 pb-32 -mt-16">
            <div class="container mx-auto px-4 text-center text-white">
                <Reveal motion=Motion::rise(20.0).on_mount()>
                    <h1 class="text-4xl md:text-6xl font-bold mb-4">"Raw Materials"</h1>
                    <p class="text-lg md:text-xl text-gray-200 max-w-2xl mx-auto">
                        "Good packaging starts long before the press. These are the substrates we source, test and convert."
                    </p>
                </Reveal>
            </div>
        </ParallaxBand>
        <section class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section)>
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="What We Work With"
                    subtitle="Every material is qualified in our lab before it reaches production"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {MATERIALS
                        .iter()
                        .enumerate()
                        .map(|(index, material)| view! { <MaterialCard material=material index=index/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
