use super::*;

#[test]
fn no_filter_shows_everything() {
    assert_eq!(filter_gallery(None).len(), GALLERY.len());
}

#[test]
fn category_filter_keeps_only_that_category() {
    for category in GalleryCategory::ALL {
        let items = filter_gallery(Some(category));
        assert!(!items.is_empty());
        assert!(items.iter().all(|item| item.category == category));
    }
}

#[test]
fn next_wraps_from_last_to_first() {
    assert_eq!(lightbox_step(Some(2), LightboxAction::Next, 3), Some(0));
    assert_eq!(lightbox_step(Some(0), LightboxAction::Next, 3), Some(1));
}

#[test]
fn previous_wraps_from_first_to_last() {
    assert_eq!(lightbox_step(Some(0), LightboxAction::Previous, 3), Some(2));
    assert_eq!(lightbox_step(Some(2), LightboxAction::Previous, 3), Some(1));
}

#[test]
fn single_item_wraps_onto_itself() {
    assert_eq!(lightbox_step(Some(0), LightboxAction::Next, 1), Some(0));
    assert_eq!(lightbox_step(Some(0), LightboxAction::Previous, 1), Some(0));
}

#[test]
fn close_empties_the_lightbox() {
    assert_eq!(lightbox_step(Some(1), LightboxAction::Close, 3), None);
}

#[test]
fn closed_lightbox_ignores_navigation() {
    assert_eq!(lightbox_step(None, LightboxAction::Next, 3), None);
    assert_eq!(lightbox_step(None, LightboxAction::Previous, 3), None);
}

#[test]
fn out_of_range_index_closes() {
    assert_eq!(lightbox_step(Some(5), LightboxAction::Next, 3), None);
    assert_eq!(lightbox_step(Some(0), LightboxAction::Next, 0), None);
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(LightboxAction::from_key("Escape"), Some(LightboxAction::Close));
    assert_eq!(LightboxAction::from_key("ArrowLeft"), Some(LightboxAction::Previous));
    assert_eq!(LightboxAction::from_key("ArrowRight"), Some(LightboxAction::Next));
    assert_eq!(LightboxAction::from_key("Enter"), None);
}
