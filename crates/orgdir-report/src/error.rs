//! Error types for the orgdir report writers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("I/O error on {path}: {source}")]
  Io {
    path:   std::path::PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
