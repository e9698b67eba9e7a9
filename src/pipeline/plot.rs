// src/pipeline/plot.rs
use std::path::PathBuf;

use crate::chart::{layout::{ChartSpec, Group}, render};
use crate::config::options::PipelineOptions;
use crate::error::Result;
use crate::schema::{self, coerce_f64, Labels, GOALS, SEASON, XG};
use crate::store::{self, DataSet};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSummary {
    pub path: PathBuf,
    /// Season labels along the x axis, in order.
    pub seasons: Vec<String>,
}

/// Cleaned artifact → goals vs xG bar chart (PNG).
pub fn plot(opts: &PipelineOptions) -> Result<ChartSummary> {
    let src = &opts.artifacts.cleaned;
    let dst = &opts.artifacts.chart;

    logf!("Plot: loading {}", src.display());
    let mut ds = store::load_dataset(src)?;
    schema::relabel(&mut ds, Labels::Display, src)?;

    let groups = season_groups(&ds);
    logf!("Plot: charting {} seasons", groups.len());

    let spec = ChartSpec::goals_vs_xg(opts.source.chart_title(), groups);
    render::save_png(&spec, &opts.chart, dst)?;
    logf!("Plot: chart saved to {}", dst.display());

    Ok(ChartSummary {
        path: dst.clone(),
        seasons: spec.groups.iter().map(|g| g.label.clone()).collect(),
    })
}

/// One bar group per season row: `[goals, xG]`. Rows must be relabelled.
pub fn season_groups(ds: &DataSet) -> Vec<Group> {
    ds.rows
        .iter()
        .filter(|r| schema::is_season_row(&r[SEASON]))
        .map(|r| Group {
            label: r[SEASON].clone(),
            values: [coerce_f64(&r[GOALS]), coerce_f64(&r[XG])],
        })
        .collect()
}
