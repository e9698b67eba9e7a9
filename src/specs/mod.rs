// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where the ground truth lives in one page's HTML and how to
//! get it out: which table, which header row, what "not found" means.
//!
//! Specs are pure: they take fetched markup and return a `store::DataSet`.
//! Fetching, persistence and cleaning live in `pipeline`.
//!
//! ## Conventions
//! - Case-insensitive tag detection via `core::html`; no document-wide regexes.
//! - Tables are found by `id` through `core::tables::TableIndex`, which also
//!   sees tables hidden inside comments (sports-reference does this to most
//!   tables below the first one).
//! - Specs should be testable offline against captured markup.
pub mod shooting;
