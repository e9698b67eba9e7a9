// src/config/mod.rs
pub mod consts;
pub mod file;
pub mod options;

use std::path::PathBuf;

use consts::{CONFIG_ENV, CONFIG_FILE};
use options::PipelineOptions;

/// Options from `$SHOT_SCRAPE_CONFIG`, else `./shot_scrape.cfg`, else defaults.
pub fn load_options() -> PipelineOptions {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    file::load(&path)
}
