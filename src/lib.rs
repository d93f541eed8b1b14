//! ascii-heart library crate.
//!
//! Renders the implicit heart surface as shaded ASCII art. The binary in
//! `main.rs` streams the default picture to stdout; the modules are exposed
//! for testing.

pub mod config;
pub mod depth;
pub mod field;
pub mod glyph;
pub mod rasterizer;
pub mod renderer;
pub mod shading;
