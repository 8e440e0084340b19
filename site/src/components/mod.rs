//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the persistent chrome, the page transition wrapper and
//! the background scene, reading the theme from the context provided by the
//! root component.

pub mod footer;
pub mod header;
pub mod icon;
pub mod parallax_band;
pub mod reveal;
pub mod scene_layer;
pub mod section_heading;
pub mod transition_shell;
