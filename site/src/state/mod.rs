//! Application state shared across the component tree.
//!
//! DESIGN
//! ======
//! Only two pieces of state exist: the theme flag, owned by the root
//! component, and the active route, owned by the router. Everything here is
//! plain data plus pure transitions so it can be tested without a browser;
//! components wire it to signals and timers.

pub mod route;
pub mod theme;
pub mod transition;
