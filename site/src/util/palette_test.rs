use std::collections::HashSet;

use super::*;

#[test]
fn roles_are_listed_in_the_same_order_for_both_themes() {
    let light = LIGHT.roles().map(|(name, _)| name);
    let dark = DARK.roles().map(|(name, _)| name);
    assert_eq!(light, dark);
}

#[test]
fn role_names_are_unique() {
    let names = LIGHT.roles().map(|(name, _)| name);
    let unique = names.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn no_role_shares_classes_between_themes() {
    for ((name, light), (_, dark)) in LIGHT.roles().into_iter().zip(DARK.roles()) {
        assert_ne!(light, dark, "role {name} is identical in both themes");
    }
}

#[test]
fn every_role_has_classes() {
    for palette in [LIGHT, DARK] {
        for (name, classes) in palette.roles() {
            assert!(!classes.trim().is_empty(), "role {name} is empty");
        }
    }
}

#[test]
fn dark_surfaces_never_use_light_backgrounds() {
    let light_backgrounds = ["bg-white ", "bg-gray-50", "bg-gray-100"];
    for (name, classes) in DARK.roles() {
        let padded = format!("{classes} ");
        for bg in light_backgrounds {
            assert!(!padded.contains(bg), "dark role {name} uses {bg}");
        }
    }
}
