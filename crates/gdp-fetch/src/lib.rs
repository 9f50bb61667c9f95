// File: crates/gdp-fetch/src/lib.rs
// Summary: Loader entry point; exports configuration, transport seam and the loader.

pub mod config;
pub mod error;
pub mod loader;
pub mod payload;
pub mod transport;

pub use config::{FetchConfig, DEFAULT_URL};
pub use error::FetchError;
pub use loader::Loader;
pub use payload::{GdpPayload, Metadata};
pub use transport::{HttpTransport, RawResponse, Transport};
