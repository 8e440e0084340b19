#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn centered_band_has_no_shift() {
    assert_eq!(background_shift(800.0, 200.0, 400.0, 0.3), 0.0);
}

#[test]
fn band_below_center_shifts_down() {
    let shift = background_shift(800.0, 400.0, 400.0, 0.25);
    assert_eq!(shift, 50.0);
}

#[test]
fn band_above_center_shifts_up() {
    let shift = background_shift(800.0, -200.0, 400.0, 0.25);
    assert_eq!(shift, -100.0);
}

#[test]
fn shift_is_clamped() {
    assert_eq!(background_shift(800.0, 10_000.0, 400.0, 0.5), MAX_SHIFT_PX);
    assert_eq!(background_shift(800.0, -10_000.0, 400.0, 0.5), -MAX_SHIFT_PX);
}

#[test]
fn shift_style_formats_one_decimal() {
    assert_eq!(shift_style(12.345), "transform:translate3d(0,12.3px,0)");
    assert_eq!(shift_style(-4.0), "transform:translate3d(0,-4.0px,0)");
}
