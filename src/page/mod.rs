//! Gallery page rendering.
//!
//! Turns an ordered dataset listing into one self-contained HTML document:
//! thumbnail strip, detail panel, stylesheet, and the page controller script
//! with its data island.

pub mod escape;
pub mod render;

pub use render::{PageOptions, RenderError, render_page};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
