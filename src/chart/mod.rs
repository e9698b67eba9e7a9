// src/chart/mod.rs
//! Grouped bar chart: geometry in `layout` (pure, testable), pixels in
//! `render` (via the `image` crate), glyphs in `font`.
pub mod font;
pub mod layout;
pub mod render;
