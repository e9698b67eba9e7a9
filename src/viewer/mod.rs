// src/viewer/mod.rs
//! Desktop window over the pipeline's artifacts: the goals-vs-xG chart, the
//! cleaned season table, and a button to re-run the whole pipeline.
pub mod app;
pub mod progress;
pub mod table;

pub use app::run;
