// src/error.rs

use thiserror::Error;

/// Error type for the whole pipeline. The two fatal conditions a run can hit
/// are a failed fetch and a page where no table yields a value; both leave the
/// persisted history and workbook untouched.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("could not retrieve presence page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("could not locate presence value for {ticker}")]
    ValueNotFound { ticker: String },

    #[error("{0}")]
    BadArg(String),

    #[error("invalid timestamp: {0}")]
    BadTimestamp(#[from] chrono::ParseError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),
}
