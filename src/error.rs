// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failure to establish the domain list source. Fatal to the run.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot open input file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("no input file or piped data")]
    NoInput,
}

/// Failure of a single crt.sh lookup.
///
/// The resolver treats every variant the same way as an empty result.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid lookup URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
