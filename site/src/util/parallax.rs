//! Scroll-linked offsets for parallax bands.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Largest background shift in either direction, in CSS pixels.
pub const MAX_SHIFT_PX: f64 = 160.0;

/// Vertical background shift for a band whose bounding box starts at
/// `rect_top` (viewport-relative, as from `getBoundingClientRect`) and is
/// `rect_height` tall, inside a viewport `viewport_height` tall.
///
/// Zero when the band is centered in the viewport; proportional to the
/// distance from center otherwise, scaled by `factor` and clamped to
/// [`MAX_SHIFT_PX`].
#[must_use]
pub fn background_shift(viewport_height: f64, rect_top: f64, rect_height: f64, factor: f64) -> f64 {
    let band_center = rect_top + rect_height * 0.5;
    let distance = band_center - viewport_height * 0.5;
    (distance * factor).clamp(-MAX_SHIFT_PX, MAX_SHIFT_PX)
}

/// Inline style that shifts a background layer by `shift_px`.
#[must_use]
pub fn shift_style(shift_px: f64) -> String {
    format!("transform:translate3d(0,{shift_px:.1}px,0)")
}
