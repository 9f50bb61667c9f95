// File: crates/gdp-core/src/axis.rs
// Summary: Axis model (ticks, labels, orientation) and its SVG group.

use crate::geometry::fmt_num;
use crate::grid::{format_linear_tick, format_time_tick, linear_ticks, nice_step, time_ticks};
use crate::scale::{LinearScale, ScaleTransform, TimeScale};
use crate::scene::Element;

/// Tick mark length and label gap, in pixels.
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Offset along the axis, in pixels from the plot origin.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: String,
    pub orient: Orient,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Rotate tick labels a quarter turn counter-clockwise.
    pub rotate_labels: bool,
}

impl Axis {
    pub fn bottom_time(id: impl Into<String>, scale: &TimeScale, count: usize) -> Self {
        let (start, end) = scale.domain();
        let (_, dates) = time_ticks(start, end, count);
        let ticks = dates
            .into_iter()
            .map(|d| Tick { offset: scale.to_px(d), label: format_time_tick(d) })
            .collect();
        Self { id: id.into(), orient: Orient::Bottom, range: scale.range(), ticks, rotate_labels: false }
    }

    pub fn left_linear(id: impl Into<String>, scale: &LinearScale, count: usize) -> Self {
        let (d0, d1) = scale.domain();
        let step = nice_step(d0, d1, count);
        let ticks = linear_ticks(d0, d1, count)
            .into_iter()
            .map(|v| Tick { offset: scale.to_px(v), label: format_linear_tick(v, step) })
            .collect();
        Self { id: id.into(), orient: Orient::Left, range: scale.range(), ticks, rotate_labels: false }
    }

    pub fn with_rotated_labels(mut self) -> Self {
        self.rotate_labels = true;
        self
    }

    pub fn to_element(&self, color: &str) -> Element {
        let (r0, r1) = self.range;
        let (anchor, domain) = match self.orient {
            Orient::Bottom => ("middle", format!("M{},{}V0H{}V{}", fmt_num(r0), TICK_SIZE, fmt_num(r1), TICK_SIZE)),
            Orient::Left => ("end", format!("M-{},{}H0V{}H-{}", TICK_SIZE, fmt_num(r0), fmt_num(r1), TICK_SIZE)),
        };
        let mut group = Element::new("g")
            .attr("id", self.id.as_str())
            .attr("fill", "none")
            .attr("font-size", "10")
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .attr("color", color)
            .child(Element::new("path").attr("class", "domain").attr("stroke", "currentColor").attr("d", domain));

        for tick in &self.ticks {
            group.push(self.tick_element(tick));
        }
        group
    }

    fn tick_element(&self, tick: &Tick) -> Element {
        let gap = fmt_num(TICK_SIZE + TICK_PADDING);
        match self.orient {
            Orient::Bottom => {
                let mut text = Element::new("text").attr("fill", "currentColor").attr("y", gap);
                text = if self.rotate_labels {
                    text.attr("transform", "rotate(-90)")
                        .attr("text-anchor", "end")
                        .attr("dx", "-.8em")
                        .attr("dy", ".15em")
                } else {
                    text.attr("dy", "0.71em")
                };
                Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", "1")
                    .attr("transform", format!("translate({},0)", fmt_num(tick.offset)))
                    .child(Element::new("line").attr("stroke", "currentColor").attr("y2", fmt_num(TICK_SIZE)))
                    .child(text.text(tick.label.as_str()))
            }
            Orient::Left => Element::new("g")
                .attr("class", "tick")
                .attr("opacity", "1")
                .attr("transform", format!("translate(0,{})", fmt_num(tick.offset)))
                .child(Element::new("line").attr("stroke", "currentColor").attr("x2", format!("-{}", fmt_num(TICK_SIZE))))
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", format!("-{gap}"))
                        .attr("dy", "0.32em")
                        .text(tick.label.as_str()),
                ),
        }
    }
}
