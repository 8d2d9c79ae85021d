use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid edition range: end ({end}) is smaller than start ({start})")]
    InvalidRange { start: u64, end: u64 },

    #[error("Edition registry not found at: {}", .0.display())]
    RegistryMissing(PathBuf),

    #[error("Fetch failed with status {status}: {body}")]
    FetchStatus { status: u16, body: String },
    #[error("Fetch returned a malformed body: {0}")]
    MalformedBody(String),
    #[error("Fetch returned an unexpected response shape: {0}")]
    UnexpectedShape(String),
    /// The API quota for this hour is spent. Ends the whole batch.
    #[error("Hourly API call limit exceeded")]
    RateLimited,

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
