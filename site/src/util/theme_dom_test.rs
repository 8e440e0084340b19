use super::*;

#[test]
fn light_root_has_no_dark_class() {
    assert_eq!(root_theme(ThemeFlag::Light), RootTheme { data_theme: "light", dark_class: false });
}

#[test]
fn dark_root_sets_dark_class() {
    assert_eq!(root_theme(ThemeFlag::Dark), RootTheme { data_theme: "dark", dark_class: true });
}

#[test]
fn toggling_flips_both_root_markers() {
    for flag in [ThemeFlag::Light, ThemeFlag::Dark] {
        let before = root_theme(flag);
        let after = root_theme(flag.toggled());
        assert_ne!(before.data_theme, after.data_theme);
        assert_ne!(before.dark_class, after.dark_class);
    }
}
