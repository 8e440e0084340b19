use super::*;
use crate::state::route::ROUTE_TABLE;
use crate::state::theme::{ThemeContext, ThemeFlag};
use crate::state::transition::{TransitionCommand, TransitionState};

fn all_routes() -> Vec<PageRoute> {
    ROUTE_TABLE.iter().map(|entry| entry.route).chain([PageRoute::NotFound]).collect()
}

fn has_class(html: &str, class: &str) -> bool {
    html.split(|c: char| c.is_whitespace() || c == '"').any(|token| token == class)
}

/// Render `route` under a freshly provided theme.
fn render(route: PageRoute, flag: ThemeFlag) -> String {
    let owner = Owner::new();
    owner.with(|| {
        ThemeContext::provide(flag);
        render_page(route).to_html()
    })
}

// =============================================================
// Themed rendering
// =============================================================

#[test]
fn every_page_renders_in_both_themes() {
    for route in all_routes() {
        for flag in [ThemeFlag::Light, ThemeFlag::Dark] {
            let html = render(route, flag);
            assert!(!html.is_empty(), "{route:?} rendered nothing in {flag:?}");
            assert!(
                has_class(&html, flag.palette().section),
                "{route:?} in {flag:?} is missing {}",
                flag.palette().section
            );
            assert!(
                !has_class(&html, flag.toggled().palette().section),
                "{route:?} in {flag:?} leaked {}",
                flag.toggled().palette().section
            );
        }
    }
}

#[test]
fn home_renders_light_with_hero_copy() {
    let html = render(PageRoute::resolve("/"), ThemeFlag::default());
    assert!(html.contains("Innovative Packaging Solutions"));
    assert!(html.contains("Explore Products"));
    assert!(has_class(&html, ThemeFlag::Light.palette().body));
    assert!(!has_class(&html, ThemeFlag::Dark.palette().section));
}

#[test]
fn not_found_page_shows_way_home() {
    let html = render(PageRoute::resolve("/nowhere"), ThemeFlag::Light);
    assert!(html.contains("404"));
    assert!(html.contains("Back to Home"));
}

// =============================================================
// Theme toggle while a page is shown
// =============================================================

#[test]
fn toggle_on_about_rerenders_dark_without_route_change() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = ThemeContext::provide(ThemeFlag::Light);
        let route = PageRoute::resolve("/about");
        let mut state = TransitionState::new(route);
        let epoch = state.epoch();
        assert!(state.enter(epoch));

        let before = render_page(state.displayed()).to_html();
        assert!(has_class(&before, ThemeFlag::Light.palette().section));

        ctx.toggle();
        assert_eq!(ctx.signal().get_untracked(), ThemeFlag::Dark);

        // The location is unchanged, so the shell sees the same route again.
        assert_eq!(state.navigate(PageRoute::resolve("/about")), TransitionCommand::None);
        assert_eq!(state.displayed(), PageRoute::About);
        assert_eq!(state.epoch(), epoch);

        let after = render_page(state.displayed()).to_html();
        assert!(has_class(&after, ThemeFlag::Dark.palette().section));
        assert!(!has_class(&after, ThemeFlag::Light.palette().section));
        assert!(after.contains("Packaging Built on Experience"));
    });
}
