//! Light and dark color sets for the decorative field.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba()` string with `alpha` clamped to `[0, 1]`.
    #[must_use]
    pub fn css(self, alpha: f64) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePalette {
    /// Wireframe box edges.
    pub edge: Rgb,
    /// Accent used for the front-most edges of each box.
    pub accent: Rgb,
    pub particle: Rgb,
    /// Multiplier applied to every alpha; dark backgrounds need less.
    pub intensity: f64,
}

pub const LIGHT: ScenePalette = ScenePalette {
    edge: Rgb::new(75, 85, 99),
    accent: Rgb::new(220, 38, 38),
    particle: Rgb::new(156, 163, 175),
    intensity: 0.55,
};

pub const DARK: ScenePalette = ScenePalette {
    edge: Rgb::new(209, 213, 219),
    accent: Rgb::new(248, 113, 113),
    particle: Rgb::new(229, 231, 235),
    intensity: 0.4,
};

impl ScenePalette {
    #[must_use]
    pub fn for_dark(is_dark: bool) -> &'static ScenePalette {
        if is_dark { &DARK } else { &LIGHT }
    }
}
