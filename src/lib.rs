// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod error;
pub mod config;
pub mod core;
pub mod specs;
pub mod schema;
pub mod record;
pub mod pipeline;
pub mod chart;

pub mod csv;
pub mod file;
pub mod progress;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "gui")]
pub mod viewer;

pub use error::{Error, Result};
