// src/error.rs
use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort a stage. Cell-level coercion failures are not
/// here: they become nulls in the record.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("table with id=\"{id}\" not found (checked visible and comment-hidden tables)")]
    TableNotFound { id: String },

    #[error("table with id=\"{id}\" is malformed: {reason}")]
    MalformedTable { id: String, reason: String },

    #[error("{}: expected {expected} columns, found {found}", path.display())]
    SchemaShape {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("{}: no header row", path.display())]
    EmptyArtifact { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not render chart to {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
