// File: crates/gdp-web/src/config.rs
// Summary: Everything the browser entry point needs, passed in rather than looked up.

use gdp_core::{MountPoints, RenderOptions};
use gdp_fetch::FetchConfig;

#[derive(Clone, Debug, Default)]
pub struct WebConfig {
    pub fetch: FetchConfig,
    pub mounts: MountPoints,
    pub render: RenderOptions,
}
