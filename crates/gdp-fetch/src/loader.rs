// File: crates/gdp-fetch/src/loader.rs
// Summary: Fetch, validate status, decode, then hand the series to the renderer once.

use gdp_core::Series;
use tracing::{error, info};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::payload::GdpPayload;
use crate::transport::{HttpTransport, Transport};

pub struct Loader<T = HttpTransport> {
    config: FetchConfig,
    transport: T,
}

impl Loader<HttpTransport> {
    pub fn from_config(config: FetchConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> Loader<T> {
    pub fn with_transport(config: FetchConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &FetchConfig { &self.config }

    /// One GET; non-2xx and undecodable bodies are errors.
    pub async fn fetch(&self) -> Result<GdpPayload, FetchError> {
        let response = self.transport.get(&self.config.url).await?;
        if !response.is_success() {
            return Err(FetchError::Status { status: response.status });
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Fetch and call `render` exactly once on success. Every failure lands
    /// here: logged once at error level, nothing rendered, no retry.
    pub async fn run<R>(&self, render: impl FnOnce(Series) -> R) -> Option<R> {
        info!(url = %self.config.url, "fetching GDP data");
        match self.fetch().await {
            Ok(GdpPayload { data, meta }) => {
                info!(
                    points = data.len(),
                    name = meta.name.as_deref().unwrap_or("-"),
                    from = meta.from_date.as_deref().unwrap_or("-"),
                    to = meta.to_date.as_deref().unwrap_or("-"),
                    "fetched GDP data"
                );
                Some(render(data))
            }
            Err(err) => {
                error!(url = %self.config.url, error = %err, "error fetching the data");
                None
            }
        }
    }
}
