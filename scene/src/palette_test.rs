use super::*;

#[test]
fn css_formats_rgba() {
    assert_eq!(Rgb::new(1, 2, 3).css(0.5), "rgba(1,2,3,0.500)");
}

#[test]
fn css_clamps_alpha() {
    assert_eq!(Rgb::new(0, 0, 0).css(4.0), "rgba(0,0,0,1.000)");
    assert_eq!(Rgb::new(0, 0, 0).css(-1.0), "rgba(0,0,0,0.000)");
}

#[test]
fn for_dark_selects_matching_palette() {
    assert_eq!(*ScenePalette::for_dark(false), LIGHT);
    assert_eq!(*ScenePalette::for_dark(true), DARK);
}

#[test]
fn palettes_do_not_share_colors() {
    assert_ne!(LIGHT.edge, DARK.edge);
    assert_ne!(LIGHT.accent, DARK.accent);
    assert_ne!(LIGHT.particle, DARK.particle);
}
