// File: crates/gdp-fetch/src/transport.rs
// Summary: The single-GET seam, with the reqwest-backed production transport.

use async_trait::async_trait;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::FetchError;

/// Status line and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

/// One GET, no retries. Futures are not `Send` so the browser build can use it.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

/// Production transport over `reqwest::Client` (native and wasm32).
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.user_agent(concat!("gdp-fetch/", env!("CARGO_PKG_VERSION")));
            if let Some(timeout) = config.timeout {
                builder = builder.timeout(timeout);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = config;
        Ok(Self { client: builder.build()? })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(url, status, bytes = body.len(), "GET completed");
        Ok(RawResponse { status, body })
    }
}
