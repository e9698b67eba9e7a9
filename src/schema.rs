// src/schema.rs
//! Column layout of the shooting table, in one place.
//!
//! Both stages rename columns by *position*: the site's own headers are
//! abbreviations that repeat across groups ("Gls", "Sh", …), so the table's
//! column order is the contract. If FBref reorders the table, this is the
//! only file to touch. A width mismatch is a hard error, never a guess.

use std::path::Path;

use crate::error::{Error, Result};
use crate::store::DataSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Kept as text.
    Text,
    /// Whole number or null.
    Integer,
    /// Float or null.
    Float,
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    /// Name in the cleaned artifact.
    pub canonical: &'static str,
    /// Short label for charts and tables.
    pub display: &'static str,
    pub kind: ColumnKind,
}

const fn col(canonical: &'static str, display: &'static str, kind: ColumnKind) -> ColumnDef {
    ColumnDef { canonical, display, kind }
}

use ColumnKind::*;

pub const WIDTH: usize = 25;

pub const COLUMNS: [ColumnDef; WIDTH] = [
    col("Season", "Season", Text),
    col("Age", "Age", Integer),
    col("Squad", "Squad", Text),
    col("Country", "Country", Text),
    col("Competition", "Comp", Text),
    col("LeagueRank", "LgRank", Text),
    col("Minutes_90s", "90s", Float),
    col("Goals", "Goals", Float),
    col("Shots", "Shots", Float),
    col("Shots_on_Target", "SoT", Float),
    col("SoT%", "SoT%", Float),
    col("Shots_per_90", "Sh/90", Float),
    col("SoT_per_90", "SoT/90", Float),
    col("Goals_per_Shot", "G/Sh", Float),
    col("Goals_per_SoT", "G/SoT", Float),
    col("Avg_Shot_Distance", "Dist", Float),
    col("Free_Kick_Goals", "FK", Float),
    col("Penalties", "PK", Float),
    col("Penalties_Attempted", "PKatt", Float),
    col("xG", "xG", Float),
    col("npxG", "npxG", Float),
    col("npxG_per_Shot", "npxG/Sh", Float),
    col("G_minus_xG", "G-xG", Float),
    col("npG_minus_xG", "np:G-xG", Float),
    col("Matches", "Matches", Text),
];

/// Positions the chart reads.
pub const SEASON: usize = 0;
pub const GOALS: usize = 7;
pub const XG: usize = 19;

/// A season row's label contains this; lifetime/summary rows ("3 Seasons",
/// "1 Club") and repeated header rows don't.
pub const SEASON_MARKER: &str = "202";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Labels {
    Canonical,
    Display,
}

impl Labels {
    fn pick(self, c: &ColumnDef) -> &'static str {
        match self {
            Labels::Canonical => c.canonical,
            Labels::Display => c.display,
        }
    }
}

pub fn headers(labels: Labels) -> Vec<String> {
    COLUMNS.iter().map(|c| s!(labels.pick(c))).collect()
}

/// The schema-mapping step: check the width, then rename every column by
/// position. Short rows are padded with empty cells; a row wider than the
/// schema is a shape error. `origin` names the artifact in errors.
pub fn relabel(ds: &mut DataSet, labels: Labels, origin: &Path) -> Result<()> {
    let shape_err = |found| Error::SchemaShape { path: origin.to_path_buf(), expected: WIDTH, found };

    if ds.headers.len() != WIDTH {
        return Err(shape_err(ds.headers.len()));
    }
    if let Some(wide) = ds.rows.iter().find(|r| r.len() > WIDTH) {
        return Err(shape_err(wide.len()));
    }

    ds.headers = headers(labels);
    for row in &mut ds.rows {
        row.resize(WIDTH, s!());
    }
    Ok(())
}

/// The one season-row predicate, shared by cleaning and charting.
pub fn is_season_row(season: &str) -> bool {
    season.contains(SEASON_MARKER)
}

/// Lenient float parse: empty, garbage, NaN and infinities become `None`.
pub fn coerce_f64(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() { return None; }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole numbers only ("17", "17.0"); anything else becomes `None`.
pub fn coerce_int(cell: &str) -> Option<i64> {
    let v = coerce_f64(cell)?;
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 { Some(v as i64) } else { None }
}

/// Float cell text: shortest form that reads back to the same value,
/// always with a decimal point ("7.0", "5.3"). Null is empty.
pub fn fmt_f64(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:?}"),
        None => s!(),
    }
}

pub fn fmt_int(v: Option<i64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}
