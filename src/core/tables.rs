// src/core/tables.rs
//
// Recovers tables the publisher hid inside HTML comments and indexes every
// table by its `id`, so lookups don't depend on where a table happened to sit.

use std::collections::HashMap;

use super::html::{
    attr_value, blocks, cell_text, comments, element_block, find_open_tag,
    mask_comments, strip_tags, tag_end, to_lower,
};
use crate::store::DataSet;

/// `colspan` values above this are treated as this.
const MAX_COLSPAN: usize = 256;

/// Which table wins when several share an `id`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Duplicates {
    /// First in index order: visible tables, then comment tables.
    #[default]
    FirstWins,
    LastWins,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Visible,
    /// Index of the comment (in document order) the table was recovered from.
    Comment(usize),
}

#[derive(Debug)]
pub struct FoundTable<'a> {
    pub id: Option<String>,
    pub origin: Origin,
    pub markup: &'a str,
}

/// All tables of a document, visible ones first (document order), then the
/// ones recovered from comments (comment order, then order inside the comment).
pub struct TableIndex<'a> {
    tables: Vec<FoundTable<'a>>,
    by_id: HashMap<String, usize>,
}

impl<'a> TableIndex<'a> {
    pub fn build(doc: &'a str, policy: Duplicates) -> Self {
        let mut tables = Vec::new();

        // Offsets in the masked copy are offsets in `doc`.
        let masked = mask_comments(doc);
        let lc = to_lower(&masked);
        let mut pos = 0usize;
        while let Some(start) = find_open_tag(&lc, "table", pos) {
            let Some((a, b)) = element_block(&masked, &lc, "table", start) else { break };
            let markup = &doc[a..b];
            tables.push(FoundTable { id: attr_value(markup, "id"), origin: Origin::Visible, markup });
            pos = b;
        }

        for (n, body) in comments(doc).into_iter().enumerate() {
            for markup in blocks(body, "table") {
                tables.push(FoundTable { id: attr_value(markup, "id"), origin: Origin::Comment(n), markup });
            }
        }

        let mut by_id = HashMap::new();
        for (ix, t) in tables.iter().enumerate() {
            let Some(id) = &t.id else { continue };
            match policy {
                Duplicates::FirstWins => { by_id.entry(id.clone()).or_insert(ix); }
                Duplicates::LastWins => { by_id.insert(id.clone(), ix); }
            }
        }

        Self { tables, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&FoundTable<'a>> {
        self.by_id.get(id).map(|&ix| &self.tables[ix])
    }

    pub fn len(&self) -> usize { self.tables.len() }

    pub fn is_empty(&self) -> bool { self.tables.is_empty() }

    pub fn hidden_count(&self) -> usize {
        self.tables.iter().filter(|t| matches!(t.origin, Origin::Comment(_))).count()
    }

    /// Every table carrying `id`, in index order.
    pub fn all_with_id(&self, id: &str) -> impl Iterator<Item = &FoundTable<'a>> {
        self.tables.iter().filter(move |t| t.id.as_deref() == Some(id))
    }
}

/// Header row + body rows of a `<table>` block.
///
/// With a `<thead>`, its last row is the header (group rows above it are
/// dropped); otherwise the first row is. Every other row with at least one
/// cell is a body row, in document order. Short rows are padded to the
/// header width. Returns `None` when there is no header row.
pub fn to_dataset(table: &str) -> Option<DataSet> {
    let lc = to_lower(table);

    let thead = find_open_tag(&lc, "thead", 0)
        .and_then(|start| element_block(table, &lc, "thead", start));

    let (mut headers, body_rows): (Vec<String>, Vec<Vec<String>>) = match thead {
        Some((a, b)) => {
            let header = blocks(&table[a..b], "tr")
                .into_iter()
                .map(row_cells)
                .filter(|r| !r.is_empty())
                .last()?;
            let rest = join!(&table[..a], &table[b..]);
            let rows = rows_of(&rest);
            (header, rows)
        }
        None => {
            let mut rows = rows_of(table).into_iter();
            let header = rows.next()?;
            (header, rows.collect())
        }
    };

    if headers.iter().all(|h| h.is_empty()) {
        return None;
    }
    // strip a trailing empty header produced by a stray cell
    while headers.len() > 1 && headers.last().is_some_and(|h| h.is_empty()) {
        headers.pop();
    }

    let width = headers.len();
    let rows = body_rows
        .into_iter()
        .map(|mut r| {
            if r.len() < width { r.resize(width, s!()); }
            r
        })
        .collect();

    Some(DataSet { headers, rows })
}

fn rows_of(s: &str) -> Vec<Vec<String>> {
    blocks(s, "tr")
        .into_iter()
        .map(row_cells)
        .filter(|r| !r.is_empty())
        .collect()
}

/// `<th>` and `<td>` cells of one `<tr>` block, in order; `colspan` repeats the text.
fn row_cells(tr: &str) -> Vec<String> {
    let lc = to_lower(tr);
    let mut cells = Vec::new();
    let mut pos = tag_end(tr, 0).unwrap_or(tr.len());

    loop {
        let next = match (find_open_tag(&lc, "th", pos), find_open_tag(&lc, "td", pos)) {
            (Some(a), Some(b)) if a < b => (a, "th"),
            (_, Some(b)) => (b, "td"),
            (Some(a), None) => (a, "th"),
            (None, None) => break,
        };
        let (start, name) = next;

        let (text, end) = match element_block(tr, &lc, name, start) {
            Some((_, end)) => (cell_text(&tr[start..end]), end),
            None => {
                // unclosed cell: runs to the next cell or the end of the row
                let open_end = tag_end(tr, start).unwrap_or(tr.len());
                let end = [find_open_tag(&lc, "th", open_end), find_open_tag(&lc, "td", open_end), lc.rfind("</tr")]
                    .into_iter()
                    .flatten()
                    .filter(|&e| e >= open_end)
                    .min()
                    .unwrap_or(tr.len());
                let text = super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&strip_tags(&tr[open_end..end])));
                (text, end)
            }
        };

        let span = attr_value(&tr[start..end], "colspan")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .clamp(1, MAX_COLSPAN);
        for _ in 1..span { cells.push(text.clone()); }
        cells.push(text);

        pos = end.max(start + 1);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
<table id="stats_standard"><tr><th>Season</th></tr><tr><td>2023-2024</td></tr></table>
<div class="placeholder"></div>
<!--
<table id="stats_shooting_dom_lg">
  <thead>
    <tr class="over_header"><th colspan="2"></th><th colspan="2">Standard</th></tr>
    <tr><th>Season</th><th>Squad</th><th>Gls</th><th>xG</th></tr>
  </thead>
  <tbody>
    <tr><th data-stat="year_id">2023-2024</th><td>Barcelona</td><td>5</td><td>4.1</td></tr>
    <tr><th>2024-2025</th><td>Barcelona</td><td>9</td><td>8.2</td></tr>
  </tbody>
  <tfoot><tr><th>2 Seasons</th><td>1 Club</td><td>14</td><td>12.3</td></tr></tfoot>
</table>
-->
<!-- <table id="stats_shooting_dom_lg"><tr><th>Season</th></tr><tr><td>dup</td></tr></table> -->
</body></html>"#;

    #[test]
    fn recovers_comment_tables_after_visible_ones() {
        let ix = TableIndex::build(PAGE, Duplicates::FirstWins);
        assert_eq!(ix.len(), 3);
        assert_eq!(ix.hidden_count(), 2);
        assert_eq!(ix.get("stats_standard").unwrap().origin, Origin::Visible);
        assert_eq!(ix.get("stats_shooting_dom_lg").unwrap().origin, Origin::Comment(0));
        assert_eq!(ix.all_with_id("stats_shooting_dom_lg").count(), 2);
        assert!(ix.get("stats_passing").is_none());
    }

    #[test]
    fn last_wins_policy_picks_later_table() {
        let ix = TableIndex::build(PAGE, Duplicates::LastWins);
        assert_eq!(ix.get("stats_shooting_dom_lg").unwrap().origin, Origin::Comment(1));
    }

    #[test]
    fn dataset_uses_last_thead_row_and_keeps_order() {
        let ix = TableIndex::build(PAGE, Duplicates::FirstWins);
        let ds = to_dataset(ix.get("stats_shooting_dom_lg").unwrap().markup).unwrap();
        assert_eq!(ds.headers, vec!["Season", "Squad", "Gls", "xG"]);
        assert_eq!(ds.rows.len(), 3);
        assert_eq!(ds.rows[0], vec!["2023-2024", "Barcelona", "5", "4.1"]);
        assert_eq!(ds.rows[1][0], "2024-2025");
        assert_eq!(ds.rows[2][0], "2 Seasons");
    }

    #[test]
    fn without_thead_first_row_is_header_and_colspan_repeats() {
        let t = r#"<table><tr><th>A</th><th>B</th><th>C</th></tr>
            <tr><td colspan="2">wide</td><td>x</td></tr>
            <tr><td>short</td></tr></table>"#;
        let ds = to_dataset(t).unwrap();
        assert_eq!(ds.headers, vec!["A", "B", "C"]);
        assert_eq!(ds.rows[0], vec!["wide", "wide", "x"]);
        assert_eq!(ds.rows[1], vec!["short", "", ""]);
    }

    #[test]
    fn unclosed_cells_are_tolerated() {
        let t = "<table><tr><th>A<th>B</tr><tr><td>1<td>2</tr></table>";
        let ds = to_dataset(t).unwrap();
        assert_eq!(ds.headers, vec!["A", "B"]);
        assert_eq!(ds.rows, vec![vec![s!("1"), s!("2")]]);
    }

    #[test]
    fn empty_table_has_no_dataset() {
        assert!(to_dataset("<table></table>").is_none());
        assert!(to_dataset("<table><thead></thead><tr><td>1</td></tr></table>").is_none());
    }
}
