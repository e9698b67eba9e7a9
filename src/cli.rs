// src/cli.rs
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result};

use crate::{
    config::{self, options::PipelineOptions},
    core::{net, tables::Duplicates},
    error::Error,
    pipeline::{self, Stage},
    progress::Progress,
    specs::shooting,
};

/// Command-line overrides, applied on top of the config file.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub url: Option<String>,
    pub player: Option<String>,
    pub table_id: Option<String>,
    pub last_wins: bool,
    pub no_show: bool,
    pub help: bool,
}

impl Args {
    pub fn apply(&self, opts: &mut PipelineOptions) {
        if let Some(u) = &self.url { opts.source.url = u.clone(); }
        if let Some(p) = &self.player { opts.source.player = p.clone(); }
        if let Some(t) = &self.table_id { opts.source.table_id = t.clone(); }
        if self.last_wins { opts.source.duplicates = Duplicates::LastWins; }
        if self.no_show { opts.show_chart = false; }
    }
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut out = Args::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| eyre!("Missing value for {flag}"));
        match a.as_str() {
            "-c" | "--config" => out.config = Some(PathBuf::from(value(a.as_str())?)),
            "-u" | "--url" => out.url = Some(value(a.as_str())?),
            "-p" | "--player" => out.player = Some(value(a.as_str())?),
            "--table" => out.table_id = Some(value(a.as_str())?),
            "--last-wins" => out.last_wins = true,
            "--no-show" => out.no_show = true,
            "-h" | "--help" => out.help = true,
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }
    Ok(out)
}

/// Entry point for every binary. `None` runs all three stages.
pub fn run(stage: Option<Stage>) -> Result<()> {
    color_eyre::install()?;
    crate::log::init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    let mut opts = match &args.config {
        Some(path) => config::file::load(path),
        None => config::load_options(),
    };
    args.apply(&mut opts);
    logd!("Options: {opts:?}");

    match stage {
        None => {
            let fetcher = net::fetcher_for(&opts.source.url, &opts.fetch)?;
            let mut progress = ConsoleProgress::default();
            let summary = pipeline::run_all(&opts, fetcher.as_ref(), Some(&mut progress))?;
            println!(
                "{} rows extracted, {} season records cleaned, chart: {}",
                summary.rows_extracted,
                summary.records.len(),
                summary.chart.path.display()
            );
            show(&opts)
        }
        Some(Stage::Collect) => {
            let fetcher = net::fetcher_for(&opts.source.url, &opts.fetch)?;
            let ds = pipeline::collect(&opts, fetcher.as_ref())?;
            println!("{}", shooting::preview(&ds, 5));
            println!("Saved {} rows to {}", ds.row_count(), opts.artifacts.raw_table.display());
            Ok(())
        }
        Some(Stage::Clean) => {
            let records = pipeline::clean(&opts)?;
            println!("Saved {} season records to {}", records.len(), opts.artifacts.cleaned.display());
            Ok(())
        }
        Some(Stage::Plot) => {
            let chart = pipeline::plot(&opts)?;
            println!("Charted {} seasons to {}", chart.seasons.len(), chart.path.display());
            show(&opts)
        }
    }
}

#[cfg(feature = "gui")]
fn show(opts: &PipelineOptions) -> Result<()> {
    if !opts.show_chart { return Ok(()); }
    crate::viewer::run(opts.clone()).map_err(|e| eyre!("Viewer failed: {e}"))
}

#[cfg(not(feature = "gui"))]
fn show(opts: &PipelineOptions) -> Result<()> {
    if opts.show_chart {
        logd!("Built without the viewer; open {} to see the chart", opts.artifacts.chart.display());
    }
    Ok(())
}

/// `[n/total] stage … ok` lines on stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        println!("[{}/{}] {stage} ok", self.done, self.total);
    }
    fn stage_failed(&mut self, stage: Stage, err: &Error) {
        println!("[{}/{}] {stage} failed: {err}", self.done + 1, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_overrides() {
        let a = parse_args(args(&["-u", "page.html", "--player", "Pedri", "--last-wins", "--no-show"])).unwrap();
        assert_eq!(a.url.as_deref(), Some("page.html"));
        assert_eq!(a.player.as_deref(), Some("Pedri"));
        assert!(a.last_wins && a.no_show && !a.help);

        let mut opts = PipelineOptions::default();
        a.apply(&mut opts);
        assert_eq!(opts.source.url, "page.html");
        assert_eq!(opts.source.duplicates, Duplicates::LastWins);
        assert!(!opts.show_chart);
    }

    #[test]
    fn rejects_unknown_and_missing_values() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--url"])).is_err());
        assert_eq!(parse_args(args(&[])).unwrap(), Args::default());
    }
}
