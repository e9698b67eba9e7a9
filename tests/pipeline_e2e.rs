// tests/pipeline_e2e.rs
mod common;

use std::fs;

use common::{loopback_fetcher, opts_in, page, row, serve_status_once, tmp_dir, DownFetch, StubFetch};
use shot_scrape::core::net::{self, FileFetcher};
use shot_scrape::error::Error;
use shot_scrape::pipeline::{self, Stage};
use shot_scrape::progress::Progress;
use shot_scrape::store;

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<Stage>,
    failed: Vec<Stage>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn stage_done(&mut self, stage: Stage) { self.done.push(stage); }
    fn stage_failed(&mut self, stage: Stage, _err: &Error) { self.failed.push(stage); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn one_season_plus_summary_row() {
    let dir = tmp_dir("e2e_one_season");
    let opts = opts_in(&dir);
    let doc = page(&[row("2023-2024", "7", "5.3")], &[row("3 Seasons", "10", "8.0")]);

    let mut rec = Recorder::default();
    let summary = pipeline::run_all(&opts, &StubFetch(doc), Some(&mut rec)).unwrap();

    // raw table keeps every row, summary included
    assert_eq!(summary.rows_extracted, 2);
    let raw = store::load_dataset(&opts.artifacts.raw_table).unwrap();
    assert_eq!(raw.headers.len(), 25);
    assert_eq!(raw.headers[7], "Gls");
    assert_eq!(raw.rows[1][0], "3 Seasons");

    // cleaned keeps only the season row
    assert_eq!(summary.records.len(), 1);
    let r = &summary.records[0];
    assert_eq!(r.season, "2023-2024");
    assert_eq!(r.goals, Some(7.0));
    assert_eq!(r.xg, Some(5.3));

    let text = fs::read_to_string(&opts.artifacts.cleaned).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("Season,Age,Squad,Country,Competition,LeagueRank,Minutes_90s,Goals,"));
    assert!(lines.next().unwrap().starts_with("2023-2024,16,Barcelona,es ESP,1. La Liga,2nd,29.3,7.0,"));
    assert!(lines.next().is_none());

    // chart has one group
    assert_eq!(summary.chart.seasons, vec!["2023-2024"]);
    let png = fs::read(&opts.artifacts.chart).unwrap();
    assert_eq!(&png[..4], b"\x89PNG");

    assert!(fs::metadata(&opts.artifacts.raw_html).unwrap().len() > 0);
    assert_eq!(rec.total, 3);
    assert_eq!(rec.done, Stage::ALL.to_vec());
    assert!(rec.failed.is_empty() && rec.finished);
}

#[test]
fn rows_keep_source_order() {
    let dir = tmp_dir("e2e_order");
    let opts = opts_in(&dir);
    let body = [
        row("2024-2025", "18", "12.1"),
        row("2022-2023", "0", "0.1"),
        row("2023-2024", "5", "4.1"),
    ];
    let doc = page(&body, &[row("3 Seasons", "23", "16.3"), row("1 Club", "23", "16.3")]);

    let summary = pipeline::run_all(&opts, &StubFetch(doc), None).unwrap();
    let seasons: Vec<&str> = summary.records.iter().map(|r| r.season.as_str()).collect();
    assert_eq!(seasons, ["2024-2025", "2022-2023", "2023-2024"]);
    assert_eq!(summary.chart.seasons, seasons);
}

#[test]
fn missing_table_stops_before_raw_table() {
    let dir = tmp_dir("e2e_missing");
    let opts = opts_in(&dir);
    let doc = page_without_table();

    let mut rec = Recorder::default();
    let err = pipeline::run_all(&opts, &StubFetch(doc), Some(&mut rec)).unwrap_err();
    assert!(matches!(err, Error::TableNotFound { ref id } if id == "stats_shooting_dom_lg"));

    assert!(opts.artifacts.raw_html.exists());
    assert!(!opts.artifacts.raw_table.exists());
    assert!(!opts.artifacts.cleaned.exists());
    assert!(!opts.artifacts.chart.exists());
    assert_eq!(rec.failed, vec![Stage::Collect]);
    assert!(rec.done.is_empty() && rec.finished);
}

fn page_without_table() -> String {
    String::from(r#"<html><body><table id="stats_standard_dom_lg"><tr><th>Season</th></tr></table>
<!-- <div>no shooting here</div> --></body></html>"#)
}

#[test]
fn fetch_failure_writes_nothing() {
    let dir = tmp_dir("e2e_down");
    let opts = opts_in(&dir);
    let err = pipeline::run_all(&opts, &DownFetch, None).unwrap_err();
    assert!(matches!(err, Error::Fetch { .. }));
    assert!(!opts.artifacts.raw_html.exists());
}

#[test]
fn http_404_stops_collect_before_any_artifact() {
    let dir = tmp_dir("e2e_http_404");
    let mut opts = opts_in(&dir);
    opts.source.url = serve_status_once("HTTP/1.1 404 Not Found");

    let err = pipeline::collect(&opts, &loopback_fetcher()).unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }), "{err:?}");
    assert!(!opts.artifacts.raw_html.exists());
    assert!(!opts.artifacts.raw_table.exists());
}

#[test]
fn saved_page_runs_through_file_fetcher() {
    let dir = tmp_dir("e2e_file");
    let mut opts = opts_in(&dir);
    let saved = dir.join("saved_page.html");
    fs::write(&saved, page(&[row("2024-2025", "9", "8.2")], &[])).unwrap();
    opts.source.url = saved.to_string_lossy().into_owned();

    let fetcher = net::fetcher_for(&opts.source.url, &opts.fetch).unwrap();
    let summary = pipeline::run_all(&opts, fetcher.as_ref(), None).unwrap();
    assert_eq!(summary.chart.seasons, vec!["2024-2025"]);

    // same page via file:// and the concrete fetcher
    opts.source.url = format!("file://{}", saved.display());
    let ds = pipeline::collect(&opts, &FileFetcher).unwrap();
    assert_eq!(ds.row_count(), 1);
}

#[test]
fn stages_rerun_from_artifacts() {
    let dir = tmp_dir("e2e_stages");
    let opts = opts_in(&dir);
    let doc = page(&[row("2023-2024", "7", "5.3"), row("2024-2025", "18", "N/A")], &[]);

    pipeline::collect(&opts, &StubFetch(doc)).unwrap();
    let first = pipeline::clean(&opts).unwrap();
    let again = pipeline::clean(&opts).unwrap();
    assert_eq!(first, again);
    assert_eq!(first[1].xg, None);

    let loaded = pipeline::load_cleaned(&opts.artifacts.cleaned).unwrap();
    assert_eq!(loaded, first);

    let chart = pipeline::plot(&opts).unwrap();
    assert_eq!(chart.seasons, vec!["2023-2024", "2024-2025"]);
}
