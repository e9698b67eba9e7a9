// src/core/net.rs
//
// The only I/O boundary towards the site. Everything downstream works on
// the returned markup, so tests swap in their own `Fetch`.

use std::{fs, path::Path, time::Duration};

use crate::config::options::FetchOptions;
use crate::error::{Error, Result};

pub trait Fetch {
    /// Return the document behind `source` as text.
    fn fetch(&self, source: &str) -> Result<String>;
}

/// Blocking HTTPS GET.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(|e| Error::Fetch { url: s!("<client>"), source: Box::new(e) })?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let fetch_err = |e: reqwest::Error| Error::Fetch { url: s!(url), source: Box::new(e) };

        let resp = self.client.get(url).send().map_err(fetch_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp.text().map_err(fetch_err)?;
        logd!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}

/// Reads a saved page from disk.
pub struct FileFetcher;

impl Fetch for FileFetcher {
    fn fetch(&self, source: &str) -> Result<String> {
        let path = source.strip_prefix("file://").unwrap_or(source);
        let bytes = fs::read(Path::new(path))
            .map_err(|e| Error::Fetch { url: s!(source), source: Box::new(e) })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub fn is_remote(source: &str) -> bool {
    let lc = source.trim_start().to_ascii_lowercase();
    lc.starts_with("http://") || lc.starts_with("https://")
}

/// HTTP for URLs, the filesystem for anything else.
pub fn fetcher_for(source: &str, opts: &FetchOptions) -> Result<Box<dyn Fetch>> {
    if is_remote(source) {
        Ok(Box::new(HttpFetcher::new(opts)?))
    } else {
        Ok(Box::new(FileFetcher))
    }
}
