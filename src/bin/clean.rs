// src/bin/clean.rs
use shot_scrape::{cli, pipeline::Stage};

fn main() {
    if let Err(e) = cli::run(Some(Stage::Clean)) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
