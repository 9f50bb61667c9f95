// File: crates/gdp-core/src/lib.rs
// Summary: Core library entry point; exports the data model, scales and bar chart rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod page;
pub mod quarter;
pub mod scale;
pub mod scene;
pub mod series;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, Orient, Tick};
pub use chart::{render_bar_chart, Bar, Chart, RenderOptions, RenderedChart, ScaledPoint};
pub use error::ChartError;
pub use page::{MountPoints, Page, TooltipElement};
pub use quarter::{quarter_label, quarter_tag};
pub use scale::{LinearScale, ScaleTransform, TimeScale};
pub use scene::{Element, Node};
pub use series::{DataPoint, Series};
pub use theme::Theme;
pub use tooltip::{Fade, PointerEvent, Tooltip, TooltipState, TooltipUpdate};
