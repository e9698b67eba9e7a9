// src/pipeline/collect.rs
use crate::config::options::PipelineOptions;
use crate::core::{html, net::Fetch};
use crate::error::Result;
use crate::specs::shooting;
use crate::store::{self, DataSet};
use crate::file;

/// Fetch the page, save it pretty-printed, pull out the shooting table and
/// save it as the raw-table artifact. Nothing is written for the table when
/// it cannot be found.
pub fn collect(opts: &PipelineOptions, fetcher: &dyn Fetch) -> Result<DataSet> {
    let src = &opts.source;
    let paths = &opts.artifacts;

    logf!("Collect: fetching {}", src.url);
    let doc = fetcher.fetch(&src.url)?;

    file::write_text(&paths.raw_html, &html::prettify(&doc))?;
    logf!("Collect: raw page saved to {}", paths.raw_html.display());

    let ds = shooting::extract(&doc, src)?;
    store::save_dataset(&paths.raw_table, &ds)?;
    logf!(
        "Collect: table \"{}\" ({} rows x {} columns) saved to {}",
        src.table_id,
        ds.row_count(),
        ds.header_count(),
        paths.raw_table.display()
    );
    Ok(ds)
}
