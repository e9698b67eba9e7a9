// src/pipeline/mod.rs
//! Three stages, run in order, each reading only the previous stage's artifact:
//!
//! ```text
//! collect: source → raw page (.html) + raw table (.csv)
//! clean:   raw table → cleaned records (.csv)
//! plot:    cleaned records → chart (.png)
//! ```
mod clean;
mod collect;
mod plot;

pub use clean::{clean, load_cleaned, normalize, records_to_dataset};
pub use collect::collect;
pub use plot::{plot, season_groups, ChartSummary};

use std::fmt;

use crate::config::options::PipelineOptions;
use crate::core::net::Fetch;
use crate::error::Result;
use crate::progress::Progress;
use crate::record::SeasonRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Collect,
    Clean,
    Plot,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Collect, Stage::Clean, Stage::Plot];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Collect => "collect",
            Stage::Clean => "clean",
            Stage::Plot => "plot",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a full run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub rows_extracted: usize,
    pub records: Vec<SeasonRecord>,
    pub chart: ChartSummary,
}

/// collect → clean → plot. Stops at the first failing stage and returns its error.
pub fn run_all(
    opts: &PipelineOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::ALL.len());
    }

    let result = run_stages(opts, fetcher, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if result.is_ok() {
        logf!("Pipeline completed successfully");
    }
    result
}

fn run_stages(
    opts: &PipelineOptions,
    fetcher: &dyn Fetch,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let raw = tracked(Stage::Collect, progress, || collect(opts, fetcher))?;
    let records = tracked(Stage::Clean, progress, || clean(opts))?;
    let chart = tracked(Stage::Plot, progress, || plot(opts))?;

    Ok(RunSummary { rows_extracted: raw.row_count(), records, chart })
}

fn tracked<T>(
    stage: Stage,
    progress: &mut Option<&mut dyn Progress>,
    run: impl FnOnce() -> Result<T>,
) -> Result<T> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Running {stage}…"));
    }
    let out = run();
    if let Some(p) = progress.as_deref_mut() {
        match &out {
            Ok(_) => p.stage_done(stage),
            Err(e) => p.stage_failed(stage, e),
        }
    }
    if let Err(e) = &out {
        loge!("Stage {stage} failed: {e}");
    }
    out
}
