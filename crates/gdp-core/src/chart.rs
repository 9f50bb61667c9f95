// File: crates/gdp-core/src/chart.rs
// Summary: Bar chart struct and the SVG rendering pipeline.

use chrono::NaiveDate;
use tracing::debug;

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::{fmt_num, Rect};
use crate::scale::{LinearScale, ScaleTransform, TimeScale};
use crate::scene::{escape, Element, SVG_NS};
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Insets, EXPECTED_POINTS, HEIGHT, WIDTH, Y_AXIS_LABEL};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    /// Bar width is the plot width divided by this, whatever the actual count.
    pub expected_points: usize,
    pub tick_count: usize,
    pub y_label: String,
    pub theme: Theme,
    /// Add an SVG `<title>` per bar so static output still shows hover text.
    pub native_titles: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            expected_points: EXPECTED_POINTS,
            tick_count: 10,
            y_label: Y_AXIS_LABEL.to_string(),
            theme: Theme::default(),
            native_titles: false,
        }
    }
}

impl RenderOptions {
    pub fn plot_width(&self) -> f64 { self.width.saturating_sub(self.insets.hsum()) as f64 }
    pub fn plot_height(&self) -> f64 { self.height.saturating_sub(self.insets.vsum()) as f64 }
}

/// Date and drawn height of one bar; recomputed on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledPoint {
    pub date: NaiveDate,
    pub height: f64,
}

/// One drawn bar and the data it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub date: String,
    pub value: f64,
    pub quarter: String,
    /// Geometry in plot coordinates (inside the margin group).
    pub rect: Rect,
}

impl Bar {
    /// Tooltip markup, e.g. `1947 Q1<br>$243.1 Billions`.
    pub fn tooltip_html(&self) -> String {
        format!("{}<br>${} Billions", escape(&self.quarter), fmt_num(self.value))
    }

    pub fn tooltip_text(&self) -> String {
        format!("{}\n${} Billions", self.quarter, fmt_num(self.value))
    }
}

/// Result of one render: the SVG tree plus the bar table hover handlers need.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    pub svg: Element,
    pub bars: Vec<Bar>,
    pub scaled: Vec<ScaledPoint>,
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
}

impl RenderedChart {
    /// Standalone SVG document text.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.svg.write_markup(&mut out, true);
        out.push('\n');
        out
    }
}

pub struct Chart {
    pub series: Series,
}

impl Chart {
    pub fn new(series: Series) -> Self {
        Self { series }
    }

    /// Lay out scales, axes and bars. Pure in the series and options.
    pub fn render(&self, opts: &RenderOptions) -> Result<RenderedChart> {
        let points = self.series.validate()?;
        let plot_w = opts.plot_width();
        let plot_h = opts.plot_height();
        let bar_width = plot_w / opts.expected_points.max(1) as f64;

        let (Some(min_date), Some(max_date)) =
            (points.iter().map(|p| p.date).min(), points.iter().map(|p| p.date).max())
        else {
            return Err(ChartError::EmptySeries);
        };
        // Values are validated finite and non-negative.
        let max_value = self.series.max_value().unwrap_or(0.0);

        let x_scale = TimeScale::new((min_date, max_date), (0.0, plot_w));
        let y_scale = LinearScale::new((0.0, max_value), (plot_h, 0.0));

        let theme = &opts.theme;
        let mut svg = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("width", opts.width.to_string())
            .attr("height", opts.height.to_string());
        let mut root = Element::new("g")
            .attr("transform", format!("translate({},{})", opts.insets.left, opts.insets.top));

        let mut x_axis = Axis::bottom_time("x-axis", &x_scale, opts.tick_count)
            .with_rotated_labels()
            .to_element(theme.axis);
        x_axis.set_attr("transform", format!("translate(0,{})", fmt_num(plot_h)));
        root.push(x_axis);
        root.push(Axis::left_linear("y-axis", &y_scale, opts.tick_count).to_element(theme.axis));

        root.push(
            Element::new("text")
                .attr("transform", "rotate(-90)")
                .attr("x", "-200")
                .attr("y", "50")
                .attr("fill", theme.axis_label)
                .text(opts.y_label.as_str()),
        );

        let mut bars = Vec::with_capacity(points.len());
        let mut scaled = Vec::with_capacity(points.len());
        for (index, p) in points.iter().enumerate() {
            let height = plot_h - y_scale.to_px(p.point.value);
            let bar = Bar {
                index,
                date: p.point.date.clone(),
                value: p.point.value,
                quarter: p.point.quarter_label(),
                rect: Rect::from_xywh(x_scale.to_px(p.date), plot_h - height, bar_width, height),
            };
            let mut rect = Element::new("rect")
                .attr("class", "bar")
                .attr("data-date", bar.date.as_str())
                .attr("data-gdp", fmt_num(bar.value))
                .attr("x", fmt_num(bar.rect.x))
                .attr("y", fmt_num(bar.rect.y))
                .attr("width", fmt_num(bar.rect.width))
                .attr("height", fmt_num(bar.rect.height))
                .attr("index", index.to_string())
                .attr("style", format!("fill: {}", theme.bar_fill));
            if opts.native_titles {
                rect.push(Element::new("title").text(bar.tooltip_text()));
            }
            root.push(rect);
            scaled.push(ScaledPoint { date: p.date, height });
            bars.push(bar);
        }

        svg.push(root);
        debug!(bars = bars.len(), %min_date, %max_date, max_value, "rendered bar chart");
        Ok(RenderedChart { svg, bars, scaled, x_scale, y_scale })
    }
}

/// Convenience wrapper over `Chart::render`.
pub fn render_bar_chart(series: &Series, opts: &RenderOptions) -> Result<RenderedChart> {
    Chart::new(series.clone()).render(opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::DataPoint;

    fn two_points() -> Series {
        Series::new(vec![DataPoint::new("1947-01-01", 243.1), DataPoint::new("1947-04-01", 246.3)])
    }

    #[test]
    fn bar_geometry_sits_on_baseline() {
        let chart = Chart::new(two_points()).render(&RenderOptions::default()).unwrap();
        for bar in &chart.bars {
            assert!((bar.rect.bottom() - 530.0).abs() < 1e-9);
            assert!((bar.rect.width - 1000.0 / 275.0).abs() < 1e-12);
        }
        assert_eq!(chart.bars[1].rect.height, 530.0);
        assert_eq!(chart.bars[0].rect.x, 0.0);
        assert_eq!(chart.bars[1].rect.x, 1000.0);
    }

    #[test]
    fn scaled_points_match_bars() {
        let chart = Chart::new(two_points()).render(&RenderOptions::default()).unwrap();
        assert_eq!(chart.scaled.len(), 2);
        for (s, b) in chart.scaled.iter().zip(&chart.bars) {
            assert_eq!(s.height, b.rect.height);
        }
    }

    #[test]
    fn native_titles_are_optional() {
        let plain = Chart::new(two_points()).render(&RenderOptions::default()).unwrap();
        assert!(plain.svg.select_all("title").is_empty());
        let opts = RenderOptions { native_titles: true, ..RenderOptions::default() };
        let titled = Chart::new(two_points()).render(&opts).unwrap();
        let titles = titled.svg.select_all("title");
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].text_content(), "1947 Q1\n$243.1 Billions");
    }

    #[test]
    fn bad_data_draws_nothing() {
        let s = Series::new(vec![DataPoint::new("not a date", 1.0)]);
        assert!(matches!(Chart::new(s).render(&RenderOptions::default()), Err(ChartError::InvalidDate { .. })));
        assert!(matches!(render_bar_chart(&Series::default(), &RenderOptions::default()), Err(ChartError::EmptySeries)));
    }

    #[test]
    fn all_zero_values_do_not_blow_up() {
        let s = Series::new(vec![DataPoint::new("1947-01-01", 0.0)]);
        let chart = Chart::new(s).render(&RenderOptions::default()).unwrap();
        assert_eq!(chart.bars[0].rect.height, 0.0);
        assert_eq!(chart.bars[0].rect.x, 500.0);
    }
}
