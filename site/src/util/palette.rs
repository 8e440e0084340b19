//! Themed class table.
//!
//! Every element whose look depends on the theme takes its classes from one
//! of these two tables, so a page can never mix light and dark styling.
//! Class strings are literals so the Tailwind scanner picks them up.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub section: &'static str,
    pub section_alt: &'static str,
    pub card: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub accent_text: &'static str,
    pub accent_soft: &'static str,
    pub accent_solid: &'static str,
    pub button_primary: &'static str,
    pub hero_overlay: &'static str,
    pub nav: &'static str,
    pub nav_link: &'static str,
    pub nav_link_active: &'static str,
    pub footer: &'static str,
    pub input: &'static str,
    pub chip: &'static str,
    pub chip_active: &'static str,
    pub divider: &'static str,
}

pub const LIGHT: Palette = Palette {
    page: "bg-gray-50 text-gray-900",
    section: "bg-gray-50",
    section_alt: "bg-white",
    card: "bg-white shadow-xl",
    heading: "text-gray-900",
    body: "text-gray-600",
    muted: "text-gray-500",
    accent_text: "text-red-600",
    accent_soft: "bg-red-100",
    accent_solid: "bg-red-600",
    button_primary: "bg-red-600 text-white hover:bg-red-700",
    hero_overlay: "bg-black/50",
    nav: "bg-white/80 text-gray-900 border-gray-200",
    nav_link: "text-gray-600 hover:text-red-600",
    nav_link_active: "text-red-600 font-semibold",
    footer: "bg-gray-100 text-gray-600",
    input: "bg-white border-gray-300 text-gray-900 placeholder-gray-400",
    chip: "bg-gray-200 text-gray-700 hover:bg-gray-300",
    chip_active: "bg-red-600 text-white",
    divider: "border-gray-200",
};

pub const DARK: Palette = Palette {
    page: "bg-gray-900 text-white",
    section: "bg-gray-900",
    section_alt: "bg-gray-800",
    card: "bg-gray-800 shadow-xl shadow-black/30",
    heading: "text-white",
    body: "text-gray-300",
    muted: "text-gray-400",
    accent_text: "text-red-400",
    accent_soft: "bg-red-500/20",
    accent_solid: "bg-red-500",
    button_primary: "bg-red-500 text-white hover:bg-red-600",
    hero_overlay: "bg-black/70",
    nav: "bg-gray-900/80 text-white border-gray-800",
    nav_link: "text-gray-300 hover:text-red-400",
    nav_link_active: "text-red-400 font-semibold",
    footer: "bg-gray-950 text-gray-400",
    input: "bg-gray-800 border-gray-700 text-white placeholder-gray-500",
    chip: "bg-gray-700 text-gray-200 hover:bg-gray-600",
    chip_active: "bg-red-500 text-white",
    divider: "border-gray-700",
};

impl Palette {
    /// All roles as `(name, classes)` pairs, in declaration order.
    #[must_use]
    pub fn roles(&self) -> [(&'static str, &'static str); 20] {
        [
            ("page", self.page),
            ("section", self.section),
            ("section_alt", self.section_alt),
            ("card", self.card),
            ("heading", self.heading),
            ("body", self.body),
            ("muted", self.muted),
            ("accent_text", self.accent_text),
            ("accent_soft", self.accent_soft),
            ("accent_solid", self.accent_solid),
            ("button_primary", self.button_primary),
            ("hero_overlay", self.hero_overlay),
            ("nav", self.nav),
            ("nav_link", self.nav_link),
            ("nav_link_active", self.nav_link_active),
            ("footer", self.footer),
            ("input", self.input),
            ("chip", self.chip),
            ("chip_active", self.chip_active),
            ("divider", self.divider),
        ]
    }
}
