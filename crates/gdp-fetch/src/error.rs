// File: crates/gdp-fetch/src/error.rs
// Summary: Loader failures: bad status, transport, body parse.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Transport failure from a non-reqwest transport.
    #[error("network failure: {0}")]
    Network(String),

    #[error("malformed JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
