//! Utility helpers shared across site UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and styling tables
//! from page and component logic to improve reuse and testability.

pub mod motion;
pub mod palette;
pub mod parallax;
pub mod theme_dom;
