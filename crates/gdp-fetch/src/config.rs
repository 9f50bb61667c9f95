// File: crates/gdp-fetch/src/config.rs
// Summary: Loader configuration (endpoint and optional timeout).

use std::time::Duration;

/// Quarterly US GDP series published with the freeCodeCamp project data.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub url: String,
    /// Whole-request timeout. `None` waits indefinitely. Ignored on wasm32.
    pub timeout: Option<Duration>,
}

impl FetchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self { Self::new(DEFAULT_URL) }
}
