use thiserror::Error;

/// Errors raised while configuring or running a generation pipeline.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid length range {min}..={max}")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("no seed words supplied")]
    NoSeeds,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output sink failed on an earlier write")]
    SinkFailed,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("worker pool error: {0}")]
    WorkerPool(String),

    #[error("generation stopped after {lines_written} lines")]
    Cancelled { lines_written: u64 },
}

pub type Result<T> = std::result::Result<T, GenError>;
