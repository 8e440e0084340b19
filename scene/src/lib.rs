//! Decorative background scene for the JEIL site.
//!
//! This crate is compiled to WebAssembly and runs in the browser behind all
//! page content. It draws a slowly turning field of wireframe boxes and
//! drifting particles onto a 2D canvas. The only input from the application
//! is the light/dark flag; nothing flows back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Scene`] and testable [`engine::SceneCore`] |
//! | [`field`] | Box and particle layout, per-frame motion |
//! | [`camera`] | 3D points, rotation, and perspective projection |
//! | [`palette`] | Light and dark color sets |
//! | [`render`] | Draws a composed frame to `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants (field size, camera, stroke widths) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod field;
pub mod palette;
pub mod render;
