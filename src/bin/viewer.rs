// src/bin/viewer.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use shot_scrape::{config, log, viewer};

fn main() {
    log::init();
    if let Err(e) = viewer::run(config::load_options()) {
        eprintln!("Viewer failed: {e}");
        std::process::exit(1);
    }
}
