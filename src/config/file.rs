// src/config/file.rs
//
// `key=value` config file. Missing file → defaults; unknown keys and bad
// values are logged and skipped.

use std::{fs, path::{Path, PathBuf}};

use super::options::PipelineOptions;
use crate::core::tables::Duplicates;

pub fn load(path: &Path) -> PipelineOptions {
    let mut opts = PipelineOptions::default();
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return opts;
    }
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logw!("Config: could not read {}: {e}", path.display());
            return opts;
        }
    };
    apply(&mut opts, &text);
    logf!("Config: loaded {}", path.display());
    opts
}

/// Apply every `key=value` line of `text` on top of `opts`.
pub fn apply(opts: &mut PipelineOptions, text: &str) {
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            logw!("Config: line {} has no '=': {line}", n + 1);
            continue;
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        if !set(opts, key, val) {
            logw!("Config: ignoring line {} ({key}={val})", n + 1);
        }
    }
}

fn set(opts: &mut PipelineOptions, key: &str, val: &str) -> bool {
    match key {
        "url" => opts.source.url = s!(val),
        "player" => opts.source.player = s!(val),
        "table_id" => opts.source.table_id = s!(val),
        "duplicates" => match val.to_ascii_lowercase().as_str() {
            "first" => opts.source.duplicates = Duplicates::FirstWins,
            "last" => opts.source.duplicates = Duplicates::LastWins,
            _ => return false,
        },
        "raw_html" => opts.artifacts.raw_html = PathBuf::from(val),
        "raw_table" => opts.artifacts.raw_table = PathBuf::from(val),
        "cleaned" => opts.artifacts.cleaned = PathBuf::from(val),
        "chart" => opts.artifacts.chart = PathBuf::from(val),
        "user_agent" => opts.fetch.user_agent = s!(val),
        "timeout_secs" => match val.parse() {
            Ok(v) => opts.fetch.timeout_secs = v,
            Err(_) => return false,
        },
        "chart_width" => match val.parse() {
            Ok(v) if v > 0 => opts.chart.width = v,
            _ => return false,
        },
        "chart_height" => match val.parse() {
            Ok(v) if v > 0 => opts.chart.height = v,
            _ => return false,
        },
        "show_chart" => opts.show_chart = val == "1" || val.eq_ignore_ascii_case("true"),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overrides_known_keys() {
        let mut opts = PipelineOptions::default();
        apply(&mut opts, "# saved page\nurl = fixtures/page.html\nplayer=Pedri\nduplicates=last\nshow_chart=0\nchart_width=640\n");
        assert_eq!(opts.source.url, "fixtures/page.html");
        assert_eq!(opts.source.player, "Pedri");
        assert_eq!(opts.source.duplicates, Duplicates::LastWins);
        assert!(!opts.show_chart);
        assert_eq!(opts.chart.width, 640);
        assert_eq!(opts.chart.height, 600);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let mut opts = PipelineOptions::default();
        apply(&mut opts, "timeout_secs=soon\nchart_height=0\ncolour=blue\nnot a pair\n");
        assert_eq!(opts, PipelineOptions::default());
    }
}
