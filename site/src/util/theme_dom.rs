//! Mirror the theme flag onto the document root.
//!
//! Sets `data-theme` and the Tailwind `dark` class on `<html>` so styles
//! outside the component tree (scrollbars, the body background behind the
//! scene canvas) follow the theme. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Nothing is written to storage: the theme lives for the page session only
//! and a reload starts from the default again. SSR paths no-op to keep server
//! rendering deterministic.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use crate::state::theme::ThemeFlag;

/// What the `<html>` element carries for a given flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootTheme {
    pub data_theme: &'static str,
    pub dark_class: bool,
}

#[must_use]
pub const fn root_theme(flag: ThemeFlag) -> RootTheme {
    RootTheme { data_theme: flag.as_str(), dark_class: flag.is_dark() }
}

/// Apply `flag` to the `<html>` element.
pub fn apply(flag: ThemeFlag) {
    let root = root_theme(flag);
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(err) = el.set_attribute("data-theme", root.data_theme) {
                log::warn!("theme: failed to set data-theme: {err:?}");
            }
            let classes = el.class_list();
            let result = if root.dark_class { classes.add_1("dark") } else { classes.remove_1("dark") };
            if let Err(err) = result {
                log::warn!("theme: failed to update root class: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = root;
    }
}
