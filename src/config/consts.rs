// src/config/consts.rs

// Source
pub const DEFAULT_URL: &str = "https://fbref.com/en/players/82ec26c1/Lamine-Yamal";
pub const DEFAULT_PLAYER: &str = "Lamine Yamal";
pub const SHOOTING_TABLE_ID: &str = "stats_shooting_dom_lg";

// Net
pub const USER_AGENT: &str = concat!("shot_scrape/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// Artifacts
pub const RAW_HTML_PATH: &str = "data/raw/lamine_yamal_shooting.html";
pub const RAW_TABLE_PATH: &str = "data/processed/lamine_yamal_shooting.csv";
pub const CLEANED_PATH: &str = "data/processed/lamine_yamal_stats_cleaned.csv";
pub const CHART_PATH: &str = "output/plots/goals_vs_xg.png";
pub const SEP: char = ',';

// Chart (10x6 in at 100 dpi)
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 600;

// Local files
pub const CONFIG_FILE: &str = "shot_scrape.cfg";
pub const CONFIG_ENV: &str = "SHOT_SCRAPE_CONFIG";
pub const STORE_DIR: &str = ".store";
pub const DEBUG_LOG_FILE: &str = "debug.log";
