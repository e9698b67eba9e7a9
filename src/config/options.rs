// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::core::tables::Duplicates;

#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOptions {
    pub source: SourceOptions,
    pub artifacts: ArtifactPaths,
    pub fetch: FetchOptions,
    pub chart: ChartOptions,
    /// Open the viewer after plotting (only with the `gui` feature).
    pub show_chart: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            artifacts: ArtifactPaths::default(),
            fetch: FetchOptions::default(),
            chart: ChartOptions::default(),
            show_chart: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// `http(s)://` URL or a path to a saved page.
    pub url: String,
    /// Chart title prefix. The chart font draws capitals only; accented
    /// Latin letters lose their accent and other scripts show as '?'.
    pub player: String,
    pub table_id: String,
    pub duplicates: Duplicates,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            player: s!(DEFAULT_PLAYER),
            table_id: s!(SHOOTING_TABLE_ID),
            duplicates: Duplicates::FirstWins,
        }
    }
}

impl SourceOptions {
    pub fn chart_title(&self) -> String {
        format!("{}: Goals vs Expected Goals (xG) by Season", self.player)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub raw_html: PathBuf,
    pub raw_table: PathBuf,
    pub cleaned: PathBuf,
    pub chart: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            raw_html: PathBuf::from(RAW_HTML_PATH),
            raw_table: PathBuf::from(RAW_TABLE_PATH),
            cleaned: PathBuf::from(CLEANED_PATH),
            chart: PathBuf::from(CHART_PATH),
        }
    }
}

impl ArtifactPaths {
    /// All four artifacts under one directory, keeping the default file names.
    pub fn under(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let name = |p: &str| {
            let mut out = dir.clone();
            if let Some(f) = std::path::Path::new(p).file_name() { out.push(f); }
            out
        };
        Self {
            raw_html: name(RAW_HTML_PATH),
            raw_table: name(RAW_TABLE_PATH),
            cleaned: name(CLEANED_PATH),
            chart: name(CHART_PATH),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { width: CHART_WIDTH, height: CHART_HEIGHT }
    }
}
