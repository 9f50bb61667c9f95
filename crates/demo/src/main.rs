// File: crates/demo/src/main.rs
// Summary: Fetches the quarterly GDP series once and writes the bar chart as an HTML page or bare SVG.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gdp_core::{theme, Chart, MountPoints, Page, RenderOptions, Series};
use gdp_fetch::{FetchConfig, Loader, DEFAULT_URL};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "gdp_chart=info,gdp_fetch=info";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Svg,
}

#[derive(Debug, Parser)]
#[command(name = "gdp-chart", about = "Render the US quarterly GDP bar chart")]
struct Args {
    /// JSON source with a `data` array of [date, value] pairs.
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    #[arg(long, default_value = "target/out/gdp_chart.html")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Theme preset (classic, dark).
    #[arg(long, default_value = "classic")]
    theme: String,

    #[arg(long, default_value = "bar-chart")]
    container_id: String,

    #[arg(long, default_value = "tooltip")]
    tooltip_id: String,

    /// Request timeout; unset waits indefinitely.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(Some(path)) => {
            info!(path = %path.display(), "wrote chart");
            ExitCode::SUCCESS
        }
        // The loader already reported why nothing was fetched.
        Ok(None) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = format!("{err:#}"), "could not produce the chart");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<Option<PathBuf>> {
    let mut fetch = FetchConfig::new(args.url.clone());
    if let Some(secs) = args.timeout_secs {
        fetch = fetch.with_timeout(Duration::from_secs(secs));
    }
    let loader = Loader::from_config(fetch).context("failed to build HTTP client")?;

    let opts = RenderOptions { theme: theme::find(&args.theme), native_titles: true, ..RenderOptions::default() };
    let mounts = MountPoints { container_id: args.container_id.clone(), tooltip_id: args.tooltip_id.clone() };

    let Some(document) = loader.run(|series| render_document(series, &opts, mounts, args.format)).await else {
        return Ok(None);
    };
    let document = document?;
    write_output(&args.out, &document)?;
    Ok(Some(args.out))
}

fn render_document(series: Series, opts: &RenderOptions, mounts: MountPoints, format: Format) -> Result<String> {
    let chart = Chart::new(series).render(opts).context("failed to render chart")?;
    info!(bars = chart.bars.len(), theme = opts.theme.name, "rendered chart");
    Ok(match format {
        Format::Svg => chart.to_svg_string(),
        Format::Html => {
            let mut page = Page::new(mounts);
            page.mount(chart);
            page.to_html("United States GDP", &opts.theme)
        }
    })
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("failed to create '{}'", dir.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write '{}'", path.display()))
}
