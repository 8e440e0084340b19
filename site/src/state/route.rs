//! Static route table.
//!
//! Paths map to [`PageRoute`] variants through a fixed table resolved in one
//! place. Anything the table doesn't list resolves to
//! [`PageRoute::NotFound`]; the page for each variant is chosen by an
//! exhaustive match in `pages`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// One navigable page, or the not-found fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageRoute {
    Home,
    About,
    Products,
    Gallery,
    Contact,
    Materials,
    NotFound,
}

/// A row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub route: PageRoute,
    pub path: &'static str,
    /// Navigation link text.
    pub label: &'static str,
    /// Document title suffix.
    pub title: &'static str,
}

/// Every navigable route, in navigation order.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { route: PageRoute::Home, path: "/", label: "Home", title: "Innovative Packaging Solutions" },
    RouteEntry { route: PageRoute::About, path: "/about", label: "About", title: "About Us" },
    RouteEntry { route: PageRoute::Products, path: "/products", label: "Products", title: "Products" },
    RouteEntry { route: PageRoute::Materials, path: "/materials", label: "Materials", title: "Raw Materials" },
    RouteEntry { route: PageRoute::Gallery, path: "/gallery", label: "Gallery", title: "Gallery" },
    RouteEntry { route: PageRoute::Contact, path: "/contact", label: "Contact", title: "Contact" },
];

const NOT_FOUND_TITLE: &str = "Page Not Found";

impl PageRoute {
    /// Resolve a location path to a route.
    ///
    /// Query strings, fragments and one trailing slash are ignored.
    #[must_use]
    pub fn resolve(path: &str) -> PageRoute {
        let path = normalize_path(path);
        ROUTE_TABLE
            .iter()
            .find(|entry| entry.path == path)
            .map_or(PageRoute::NotFound, |entry| entry.route)
    }

    /// This route's table row; `None` for [`PageRoute::NotFound`].
    #[must_use]
    pub fn entry(self) -> Option<&'static RouteEntry> {
        ROUTE_TABLE.iter().find(|entry| entry.route == self)
    }

    #[must_use]
    pub fn path(self) -> Option<&'static str> {
        self.entry().map(|entry| entry.path)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        self.entry().map_or(NOT_FOUND_TITLE, |entry| entry.title)
    }
}

/// Strip query, fragment and a trailing slash (except for the root).
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}
