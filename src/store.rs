// src/store.rs
//
// Delimited-text artifacts: header row first, then data rows.

use std::path::Path;

use crate::config::consts::SEP;
use crate::csv::{parse_rows, rows_to_string};
use crate::error::{Error, Result};
use crate::file;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
}

pub fn save_dataset(path: &Path, ds: &DataSet) -> Result<()> {
    let text = rows_to_string(Some(&ds.headers), &ds.rows, SEP);
    file::write_text(path, &text)
}

pub fn load_dataset(path: &Path) -> Result<DataSet> {
    let text = file::read_text(path)?;
    let mut rows = parse_rows(&text, SEP).into_iter();
    let headers = rows.next().ok_or_else(|| Error::EmptyArtifact { path: path.to_path_buf() })?;
    Ok(DataSet { headers, rows: rows.collect() })
}
