// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures. Row-level data problems never show up here; those are
/// routed to audit files by the validator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Raw file missing: {}", .0.display())]
    MissingRaw(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema drift in {}: field `{field}` is absent from every record", path.display())]
    SchemaDrift { path: PathBuf, field: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
