// src/pipeline/clean.rs
use std::path::Path;

use crate::config::options::PipelineOptions;
use crate::error::Result;
use crate::record::SeasonRecord;
use crate::schema::{self, Labels};
use crate::store::{self, DataSet};

/// Raw table → typed season records → cleaned artifact.
pub fn clean(opts: &PipelineOptions) -> Result<Vec<SeasonRecord>> {
    let src = &opts.artifacts.raw_table;
    let dst = &opts.artifacts.cleaned;

    logf!("Clean: loading {}", src.display());
    let mut ds = store::load_dataset(src)?;
    schema::relabel(&mut ds, Labels::Canonical, src)?;
    logd!("Clean: columns renamed");

    let total = ds.row_count();
    let records = normalize(ds.rows);
    logf!("Clean: kept {} of {} rows as seasons", records.len(), total);

    store::save_dataset(dst, &records_to_dataset(&records))?;
    logf!("Clean: cleaned data saved to {}", dst.display());
    Ok(records)
}

/// Keep season rows (original order) and type them. Rows must already be
/// in schema column order.
pub fn normalize(rows: Vec<Vec<String>>) -> Vec<SeasonRecord> {
    rows.into_iter()
        .filter(|r| r.first().is_some_and(|s| schema::is_season_row(s)))
        .map(|r| SeasonRecord::from_cells(&r))
        .collect()
}

pub fn records_to_dataset(records: &[SeasonRecord]) -> DataSet {
    DataSet {
        headers: schema::headers(Labels::Canonical),
        rows: records.iter().map(SeasonRecord::to_cells).collect(),
    }
}

/// Read a cleaned artifact back into records.
pub fn load_cleaned(path: &Path) -> Result<Vec<SeasonRecord>> {
    let mut ds = store::load_dataset(path)?;
    schema::relabel(&mut ds, Labels::Canonical, path)?;
    Ok(ds.rows.iter().map(|r| SeasonRecord::from_cells(r)).collect())
}
