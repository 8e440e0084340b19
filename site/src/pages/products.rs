//! Product catalog with a category filter.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::state::theme::use_theme;
use crate::util::motion::{Motion, stagger};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Boxes,
    Bags,
    Labels,
    Custom,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] =
        [ProductCategory::Boxes, ProductCategory::Bags, ProductCategory::Labels, ProductCategory::Custom];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ProductCategory::Boxes => "Boxes",
            ProductCategory::Bags => "Bags",
            ProductCategory::Labels => "Labels",
            ProductCategory::Custom => "Custom",
        }
    }

    const fn icon(self) -> IconKind {
        match self {
            ProductCategory::Boxes => IconKind::Package,
            ProductCategory::Bags => IconKind::Layers,
            ProductCategory::Labels => IconKind::Award,
            ProductCategory::Custom => IconKind::Shield,
        }
    }
}

/// Catalog filter. `All` shows every product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Every filter in display order.
    #[must_use]
    pub fn options() -> [CategoryFilter; 5] {
        let [a, b, c, d] = ProductCategory::ALL;
        [
            CategoryFilter::All,
            CategoryFilter::Only(a),
            CategoryFilter::Only(b),
            CategoryFilter::Only(c),
            CategoryFilter::Only(d),
        ]
    }
}

#[derive(Debug)]
pub struct Product {
    pub name: &'static str,
    pub category: ProductCategory,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Corrugated Shipping Boxes",
        category: ProductCategory::Boxes,
        description: "Single, double and triple wall boxes for safe transit of heavy goods.",
        highlights: &["Custom dimensions", "High burst strength", "Recyclable board"],
    },
    Product {
        name: "Retail Display Boxes",
        category: ProductCategory::Boxes,
        description: "Printed folding cartons that sell the product from the shelf.",
        highlights: &["Full-color printing", "Window cut-outs", "Easy assembly"],
    },
    Product {
        name: "Kraft Paper Bags",
        category: ProductCategory::Bags,
        description: "Sturdy paper carrier bags with twisted or flat handles.",
        highlights: &["FSC-certified paper", "Branded printing", "Reinforced base"],
    },
    Product {
        name: "Industrial Sacks",
        category: ProductCategory::Bags,
        description: "Multi-wall sacks for powders, grains and building materials.",
        highlights: &["Moisture barrier", "Valve or open mouth", "Palletizing friendly"],
    },
    Product {
        name: "Product Labels",
        category: ProductCategory::Labels,
        description: "Self-adhesive labels on paper or film for any container shape.",
        highlights: &["Roll or sheet supply", "Water resistant", "Variable data"],
    },
    Product {
        name: "Logistics Tags",
        category: ProductCategory::Labels,
        description: "Barcode and shipping tags that survive the warehouse floor.",
        highlights: &["Thermal printable", "Strong adhesive", "Scannable at speed"],
    },
    Product {
        name: "Bespoke Packaging",
        category: ProductCategory::Custom,
        description: "Structures engineered from scratch around your product and process.",
        highlights: &["Structural design", "Prototyping", "Small to large runs"],
    },
    Product {
        name: "Protective Inserts",
        category: ProductCategory::Custom,
        description: "Die-cut board and molded pulp inserts that keep contents in place.",
        highlights: &["Plastic-free options", "Precision fit", "Drop tested"],
    },
];

/// Products passing `filter`, in catalog order.
#[must_use]
pub fn filter_products(filter: CategoryFilter) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|product| filter.matches(product.category)).collect()
}

#[component]
fn ProductCard(product: &'static Product, index: usize) -> impl IntoView {
    let theme = use_theme();
    view! {
        <Reveal motion=Motion::default().delay(stagger(index, 80)).on_mount()>
            <article class=move || format!("h-full p-6 rounded-xl {}", theme.palette().card)>
                <div class=move || {
                    format!(
                        "w-12 h-12 rounded-lg flex items-center justify-center mb-4 {} {}",
                        theme.palette().accent_soft,
                        theme.palette().accent_text,
                    )
                }>
                    <Icon kind=product.category.icon() class="w-6 h-6"/>
                </div>
                <p class=move || format!("text-xs uppercase tracking-wide mb-1 {}", theme.palette().muted)>
                    {product.category.label()}
                </p>
                <h3 class=move || format!("text-xl font-semibold mb-3 {}", theme.palette().heading)>{product.name}</h3>
                <p class=move || format!("mb-4 {}", theme.palette().body)>{product.description}</p>
                <ul class="space-y-2">
                    {product
                        .highlights
                        .iter()
                        .map(|item| {
                            view! {
                                <li class=move || format!("flex items-center gap-2 text-sm {}", theme.palette().body)>
                                    <span class=move || theme.palette().accent_text>
                                        <Icon kind=IconKind::CheckCircle class="w-4 h-4"/>
                                    </span>
                                    {*item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </article>
        </Reveal>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let theme = use_theme();
    let filter = RwSignal::new(CategoryFilter::All);

    view! {
        <section class=move || format!("py-24 transition-colors duration-300 {}", theme.palette().section)>
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Our Products"
                    subtitle="Boxes, bags, labels and custom structures, made in-house to your requirements"
                />

                <div class="flex flex-wrap justify-center gap-3 mb-12" role="group" aria-label="Filter by category">
                    {CategoryFilter::options()
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        let palette = theme.palette();
                                        let tone = if filter.get() == option { palette.chip_active } else { palette.chip };
                                        format!("px-5 py-2 rounded-full text-sm font-medium transition-colors {tone}")
                                    }
                                    aria-pressed=move || (filter.get() == option).to_string()
                                    on:click=move |_| filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter_products(filter.get())
                            .into_iter()
                            .enumerate()
                            .map(|(index, product)| view! { <ProductCard product=product index=index/> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
