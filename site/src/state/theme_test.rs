use super::*;

// =============================================================
// ThemeFlag
// =============================================================

#[test]
fn default_is_light() {
    assert_eq!(ThemeFlag::default(), ThemeFlag::Light);
}

#[test]
fn toggled_flips_value() {
    assert_eq!(ThemeFlag::Light.toggled(), ThemeFlag::Dark);
    assert_eq!(ThemeFlag::Dark.toggled(), ThemeFlag::Light);
}

#[test]
fn toggling_twice_is_identity() {
    for flag in [ThemeFlag::Light, ThemeFlag::Dark] {
        assert_eq!(flag.toggled().toggled(), flag);
    }
}

#[test]
fn is_dark_matches_variant() {
    assert!(!ThemeFlag::Light.is_dark());
    assert!(ThemeFlag::Dark.is_dark());
}

#[test]
fn as_str_values() {
    assert_eq!(ThemeFlag::Light.as_str(), "light");
    assert_eq!(ThemeFlag::Dark.as_str(), "dark");
}

#[test]
fn palette_follows_flag() {
    assert_eq!(*ThemeFlag::Light.palette(), LIGHT);
    assert_eq!(*ThemeFlag::Dark.palette(), DARK);
}

#[test]
fn toggle_label_names_the_other_mode() {
    assert!(ThemeFlag::Light.toggle_label().contains("dark"));
    assert!(ThemeFlag::Dark.toggle_label().contains("light"));
}

// =============================================================
// ThemeContext
// =============================================================

#[test]
fn context_starts_at_initial_value() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::provide(ThemeFlag::Light);
        assert_eq!(ctx.signal().get_untracked(), ThemeFlag::Light);
    });
}

#[test]
fn context_toggle_flips_and_returns() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::provide(ThemeFlag::Light);
        ctx.toggle();
        assert_eq!(ctx.signal().get_untracked(), ThemeFlag::Dark);
        ctx.toggle();
        assert_eq!(ctx.signal().get_untracked(), ThemeFlag::Light);
    });
}

#[test]
fn provided_context_is_reachable_from_descendants() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::provide(ThemeFlag::Dark);
        let child = Owner::new();
        child.with(|| {
            let seen = use_theme();
            assert_eq!(seen.signal().get_untracked(), ThemeFlag::Dark);
            seen.toggle();
        });
        assert_eq!(ctx.signal().get_untracked(), ThemeFlag::Light);
    });
}
