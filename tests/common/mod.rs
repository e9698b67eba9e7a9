// tests/common/mod.rs
#![allow(dead_code)]
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use shot_scrape::config::options::{ArtifactPaths, PipelineOptions};
use shot_scrape::core::net::{Fetch, HttpFetcher};
use shot_scrape::error::{Error, Result};

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("shot_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Options with every artifact under `dir` and the viewer off.
pub fn opts_in(dir: &PathBuf) -> PipelineOptions {
    PipelineOptions {
        artifacts: ArtifactPaths::under(dir),
        show_chart: false,
        ..PipelineOptions::default()
    }
}

/// Serves one fixed page for any source.
pub struct StubFetch(pub String);

impl Fetch for StubFetch {
    fn fetch(&self, _source: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Always fails like an unreachable host.
pub struct DownFetch;

impl Fetch for DownFetch {
    fn fetch(&self, source: &str) -> Result<String> {
        Err(Error::Fetch {
            url: source.to_string(),
            source: "connection refused".into(),
        })
    }
}

/// Local HTTP server answering a single request with `status_line` and an
/// empty body. Returns the URL to fetch.
pub fn serve_status_once(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut sock, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let mut seen = Vec::new();
        while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut buf).unwrap_or(0);
            if n == 0 { break; }
            seen.extend_from_slice(&buf[..n]);
        }
        let resp = format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let _ = sock.write_all(resp.as_bytes());
    });
    format!("http://{addr}/en/players/82ec26c1/Lamine-Yamal")
}

/// Real HTTP fetcher that ignores proxy settings, for loopback servers.
pub fn loopback_fetcher() -> HttpFetcher {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    HttpFetcher::with_client(client)
}

pub const SITE_HEADERS: [&str; 25] = [
    "Season", "Age", "Squad", "Country", "Comp", "LgRank", "90s", "Gls", "Sh", "SoT", "SoT%",
    "Sh/90", "SoT/90", "G/Sh", "G/SoT", "Dist", "FK", "PK", "PKatt", "xG", "npxG", "npxG/Sh",
    "G-xG", "np:G-xG", "Matches",
];

/// A 25-cell row with the given season, goals and xG; other cells plausible.
pub fn row(season: &str, goals: &str, xg: &str) -> Vec<String> {
    [
        season, "16", "Barcelona", "es ESP", "1. La Liga", "2nd", "29.3", goals, "62", "20", "32.3",
        "2.12", "0.68", "0.11", "0.35", "18.9", "0", "0", "0", xg, "5.3", "0.09", "1.7", "1.7",
        "Matches",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn tr(cells: &[String]) -> String {
    let mut out = String::from("<tr>");
    for (i, c) in cells.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("<th scope=\"row\" data-stat=\"year_id\">{c}</th>"));
        } else {
            out.push_str(&format!("<td>{c}</td>"));
        }
    }
    out.push_str("</tr>");
    out
}

/// Player page with the shooting table hidden in a comment, a visible
/// decoy table, and an over-header group row.
pub fn page(body: &[Vec<String>], footer: &[Vec<String>]) -> String {
    let head: Vec<String> = SITE_HEADERS.iter().map(|h| format!("<th>{h}</th>")).collect();
    let rows: String = body.iter().map(|r| tr(r)).collect();
    let foot: String = footer.iter().map(|r| tr(r)).collect();
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Lamine Yamal Stats | FBref.com</title>
</head>
<body>
<table id="stats_standard_dom_lg"><tr><th>Season</th></tr><tr><td>2023-2024</td></tr></table>
<div id="all_stats_shooting" class="table_wrapper">
<div class="placeholder"></div>
<!--
<table class="stats_table" id="stats_shooting_dom_lg">
<caption>Shooting: Domestic Leagues Table</caption>
<thead>
<tr class="over_header"><th colspan="6"></th><th colspan="13">Standard</th><th colspan="5">Expected</th><th></th></tr>
<tr>{}</tr>
</thead>
<tbody>{rows}</tbody>
<tfoot>{foot}</tfoot>
</table>
-->
</div>
</body></html>"#,
        head.concat()
    )
}
