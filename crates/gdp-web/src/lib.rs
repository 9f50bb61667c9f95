// File: crates/gdp-web/src/lib.rs
// Summary: Browser entry point: fetch once the document is ready, render, mount, hover.

pub mod config;
pub mod console;
pub mod events;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::WebConfig;

use gdp_core::{ChartError, Chart, RenderedChart, Series};

/// Render step shared by the browser entry point and native tests.
pub fn render_for_page(series: Series, config: &WebConfig) -> Result<RenderedChart, ChartError> {
    Chart::new(series).render(&config.render)
}

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use gdp_fetch::Loader;
    use tracing::{error, info, Level};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::AddEventListenerOptions;

    use crate::{console, dom, render_for_page, WebConfig};

    thread_local! {
        static MOUNTED: RefCell<Option<dom::MountedChart>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console::init(Level::DEBUG);

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document on window"))?;

        let launch = || wasm_bindgen_futures::spawn_local(run(WebConfig::default()));
        if document.ready_state() == "loading" {
            let opts = AddEventListenerOptions::new();
            opts.set_once(true);
            let cb = Closure::once_into_js(launch);
            document.add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                cb.unchecked_ref(),
                &opts,
            )?;
        } else {
            launch();
        }
        Ok(())
    }

    /// Fetch, render and mount once; every failure is logged and leaves the page as is.
    pub async fn run(config: WebConfig) {
        let loader = match Loader::from_config(config.fetch.clone()) {
            Ok(loader) => loader,
            Err(err) => {
                error!(error = %err, "could not set up the loader");
                return;
            }
        };
        loader
            .run(|series| {
                let chart = match render_for_page(series, &config) {
                    Ok(chart) => chart,
                    Err(err) => {
                        error!(error = %err, "could not render the chart");
                        return;
                    }
                };
                let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
                match dom::mount(&document, &config.mounts, chart) {
                    Ok(handle) => {
                        MOUNTED.with(|slot| slot.replace(Some(handle)));
                        info!(container = %config.mounts.container_id, "chart mounted");
                    }
                    Err(err) => error!(error = ?err, "could not mount the chart"),
                }
            })
            .await;
    }
}

#[cfg(target_arch = "wasm32")]
pub use entry::run;
