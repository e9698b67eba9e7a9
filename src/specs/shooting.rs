// src/specs/shooting.rs
//
// Player page → "Shooting: Domestic Leagues" table.

use crate::config::options::SourceOptions;
use crate::core::tables::{to_dataset, Origin, TableIndex};
use crate::error::{Error, Result};
use crate::store::DataSet;

/// Rows shown in the extraction preview.
const PREVIEW_ROWS: usize = 5;

pub fn extract(doc: &str, source: &SourceOptions) -> Result<DataSet> {
    let index = TableIndex::build(doc, source.duplicates);
    logd!(
        "Shooting: {} tables on page ({} recovered from comments)",
        index.len(),
        index.hidden_count()
    );

    let id = source.table_id.as_str();
    let dupes = index.all_with_id(id).count();
    if dupes > 1 {
        logw!("Shooting: {dupes} tables share id=\"{id}\", using {:?}", source.duplicates);
    }

    let found = index
        .get(id)
        .ok_or_else(|| Error::TableNotFound { id: s!(id) })?;
    match found.origin {
        Origin::Visible => logd!("Shooting: \"{id}\" is visible markup"),
        Origin::Comment(n) => logd!("Shooting: \"{id}\" recovered from comment #{n}"),
    }

    let ds = to_dataset(found.markup).ok_or_else(|| Error::MalformedTable {
        id: s!(id),
        reason: s!("no header row"),
    })?;
    logd!("Shooting: preview\n{}", preview(&ds, PREVIEW_ROWS));
    Ok(ds)
}

/// Header plus the first `n` rows, one per line, `|`-separated.
pub fn preview(ds: &DataSet, n: usize) -> String {
    let mut out = ds.headers.join(" | ");
    for row in ds.rows.iter().take(n) {
        out.push('\n');
        out.push_str(&row.join(" | "));
    }
    out
}
