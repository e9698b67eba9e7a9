// src/bin/pipeline.rs
use shot_scrape::cli;

fn main() {
    if let Err(e) = cli::run(None) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
