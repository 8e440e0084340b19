#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::{CRATE_COUNT, EDGE_WIDTH_PX, FIELD_SEED, MAX_FRAME_STEP_MS, PARTICLE_COUNT, PARTICLE_RADIUS_PX};
use crate::field::{BOX_EDGES, Field};
use crate::palette::ScenePalette;
use crate::render;

/// One thing to draw. Colors are pre-resolved CSS strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, width: f64, color: String },
    Dot { center: Point, radius: f64, color: String },
}

pub type DrawList = Vec<Primitive>;

/// Core scene state: everything that doesn't depend on the canvas element.
///
/// Separated from [`Scene`] so it can be tested without
/// WASM/browser dependencies.
pub struct SceneCore {
    pub field: Field,
    pub camera: Camera,
    pub is_dark: bool,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    last_timestamp_ms: Option<f64>,
}

impl Default for SceneCore {
    fn default() -> Self {
        Self {
            field: Field::generate(FIELD_SEED, CRATE_COUNT, PARTICLE_COUNT),
            camera: Camera::default(),
            is_dark: false,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            last_timestamp_ms: None,
        }
    }
}

impl SceneCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dark(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
    }

    #[must_use]
    pub fn palette(&self) -> &'static ScenePalette {
        ScenePalette::for_dark(self.is_dark)
    }

    /// Advance the clock to `timestamp_ms` (a `requestAnimationFrame` timestamp).
    ///
    /// The first call only records the timestamp. Steps are clamped to
    /// [`MAX_FRAME_STEP_MS`] so a long-hidden tab doesn't jump the field.
    pub fn tick(&mut self, timestamp_ms: f64) {
        let step = match self.last_timestamp_ms {
            Some(last) => (timestamp_ms - last).clamp(0.0, MAX_FRAME_STEP_MS),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        self.field.advance(step / 1000.0);
    }

    /// Compose the current frame. Empty when the viewport has no area.
    #[must_use]
    pub fn draw_list(&self) -> DrawList {
        let (w, h) = (self.viewport_width, self.viewport_height);
        if w <= 0.0 || h <= 0.0 {
            return Vec::new();
        }
        let palette = self.palette();
        let mut out = Vec::with_capacity(self.field.boxes.len() * BOX_EDGES.len() + self.field.particles.len());

        for p in &self.field.particles {
            if let Some(proj) = self.camera.project(p.position, w, h) {
                out.push(Primitive::Dot {
                    center: proj.point,
                    radius: PARTICLE_RADIUS_PX * proj.scale,
                    color: palette.particle.css(palette.intensity * depth_fade(proj.scale)),
                });
            }
        }

        for b in &self.field.boxes {
            let corners = b.corners();
            let nearest_z = corners.iter().map(|c| c.z).fold(f64::NEG_INFINITY, f64::max);
            for (i, j) in BOX_EDGES {
                let (Some(a), Some(c)) = (self.camera.project(corners[i], w, h), self.camera.project(corners[j], w, h))
                else {
                    continue;
                };
                let front = corners[i].z >= nearest_z - f64::EPSILON || corners[j].z >= nearest_z - f64::EPSILON;
                let rgb = if front { palette.accent } else { palette.edge };
                let scale = (a.scale + c.scale) * 0.5;
                out.push(Primitive::Line {
                    from: a.point,
                    to: c.point,
                    width: EDGE_WIDTH_PX * scale,
                    color: rgb.css(palette.intensity * depth_fade(scale)),
                });
            }
        }
        out
    }
}

/// Fade far geometry so the field reads as depth rather than clutter.
fn depth_fade(scale: f64) -> f64 {
    (scale * scale).clamp(0.15, 1.0)
}

/// The full scene. Wraps [`SceneCore`] and owns the browser canvas element.
pub struct Scene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: SceneCore,
}

impl Scene {
    /// Bind a new scene to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context (unsupported browser,
    /// or the element already hosts a WebGL context).
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: SceneCore::new() })
    }

    pub fn set_dark(&mut self, is_dark: bool) {
        self.core.set_dark(is_dark);
    }

    /// Resize the backing store to `width_css` x `height_css` at `dpr`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
    }

    /// Advance to `timestamp_ms` and draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        self.core.tick(timestamp_ms);
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(
            &self.ctx,
            &self.core.draw_list(),
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }
}
