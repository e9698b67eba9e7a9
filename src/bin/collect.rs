// src/bin/collect.rs
use shot_scrape::{cli, pipeline::Stage};

fn main() {
    if let Err(e) = cli::run(Some(Stage::Collect)) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
