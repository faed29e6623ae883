use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between receiving a search and answering it.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("cannot read data source {path:?}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV at line {line}")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("header is missing expected columns: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error("malformed query: {0}")]
    MalformedQuery(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
