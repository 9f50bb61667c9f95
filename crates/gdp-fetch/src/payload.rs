// File: crates/gdp-fetch/src/payload.rs
// Summary: Wire shape of the GDP document.

use gdp_core::Series;
use serde::Deserialize;

/// `{ "data": [["1947-01-01", 243.1], ...], ...metadata }`; unknown fields ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct GdpPayload {
    pub data: Series,
    #[serde(flatten)]
    pub meta: Metadata,
}

/// Descriptive fields that ride along with the series. Logged, never rendered.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Metadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub source_name: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub updated_at: Option<String>,
    pub frequency: Option<String>,
}
