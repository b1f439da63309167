/// Error taxonomy for the analysis engine.
///
/// Only fatal conditions live here. A single malformed snapshot row is not an
/// error: ingestion skips it and counts it, and the count is surfaced in the
/// `summary` diagnostics. A query that finds nothing (unknown folder, zero
/// matches) returns an empty, well-formed result instead of an error.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The snapshot source is missing or unreadable. Fatal; exit nonzero.
    #[error("cannot read snapshot {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot contains rows but no recognisable header. Column names
    /// are matched tolerantly, never assumed positionally, so a header row
    /// is required whenever any data is present.
    #[error("no recognisable header row in {path}")]
    Header { path: PathBuf },

    /// A malformed filter condition, search pattern, or flag value.
    /// Carries the offending fragment so the caller can point at it.
    #[error("invalid argument '{fragment}': {message}")]
    Argument { fragment: String, message: String },

    #[error("failed to serialise report: {0}")]
    Render(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::Argument`] from the offending fragment and a
    /// human-readable explanation.
    pub fn argument(fragment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Argument {
            fragment: fragment.into(),
            message: message.into(),
        }
    }
}
