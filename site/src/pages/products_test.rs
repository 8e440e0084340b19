use super::*;

#[test]
fn all_filter_shows_whole_catalog() {
    assert_eq!(filter_products(CategoryFilter::All).len(), PRODUCTS.len());
}

#[test]
fn category_filter_keeps_only_that_category() {
    for category in ProductCategory::ALL {
        let shown = filter_products(CategoryFilter::Only(category));
        assert!(!shown.is_empty(), "{category:?} has no products");
        assert!(shown.iter().all(|p| p.category == category));
    }
}

#[test]
fn categories_partition_the_catalog() {
    let total: usize = ProductCategory::ALL
        .into_iter()
        .map(|c| filter_products(CategoryFilter::Only(c)).len())
        .sum();
    assert_eq!(total, PRODUCTS.len());
}

#[test]
fn filter_preserves_catalog_order() {
    let boxes = filter_products(CategoryFilter::Only(ProductCategory::Boxes));
    let names: Vec<_> = boxes.iter().map(|p| p.name).collect();
    assert_eq!(names, ["Corrugated Shipping Boxes", "Retail Display Boxes"]);
}

#[test]
fn options_start_with_all_and_list_each_category_once() {
    let options = CategoryFilter::options();
    assert_eq!(options[0], CategoryFilter::All);
    let labels: Vec<_> = options.iter().map(|o| o.label()).collect();
    assert_eq!(labels, ["All", "Boxes", "Bags", "Labels", "Custom"]);
}

#[test]
fn every_product_lists_highlights() {
    assert!(PRODUCTS.iter().all(|p| !p.highlights.is_empty()));
}
