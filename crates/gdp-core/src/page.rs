// File: crates/gdp-core/src/page.rs
// Summary: In-memory document with a chart container and a tooltip element.
// Notes:
// - Mounting clears the container first, so a second render replaces the first.
// - The tooltip element only exists once something has been mounted.

use tracing::debug;

use crate::chart::RenderedChart;
use crate::geometry::fmt_num;
use crate::scene::{escape, Element};
use crate::theme::Theme;
use crate::tooltip::{PointerEvent, Tooltip, TooltipUpdate};

/// Ids of the pre-existing elements the chart attaches to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountPoints {
    pub container_id: String,
    pub tooltip_id: String,
}

impl Default for MountPoints {
    fn default() -> Self {
        Self { container_id: "bar-chart".to_string(), tooltip_id: "tooltip".to_string() }
    }
}

/// Live state of the tooltip element.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipElement {
    pub html: String,
    pub opacity: f64,
    pub left: f64,
    pub top: f64,
    /// Duration of the last opacity transition, in milliseconds.
    pub transition_ms: u128,
}

impl TooltipElement {
    fn new() -> Self {
        Self { html: String::new(), opacity: 0.0, left: 0.0, top: 0.0, transition_ms: 0 }
    }

    pub fn apply(&mut self, update: &TooltipUpdate) {
        if let Some(fade) = update.fade {
            self.opacity = fade.opacity;
            self.transition_ms = fade.duration.as_millis();
        }
        if let Some(html) = &update.html {
            self.html = html.clone();
        }
        if let Some((left, top)) = update.position {
            self.left = left;
            self.top = top;
        }
    }

    /// Inline CSS for the current state.
    pub fn style(&self) -> String {
        format!(
            "position: absolute; opacity: {}; left: {}px; top: {}px; transition: opacity {}ms",
            fmt_num(self.opacity),
            fmt_num(self.left),
            fmt_num(self.top),
            self.transition_ms
        )
    }
}

pub struct Page {
    mounts: MountPoints,
    container: Element,
    tooltip: Option<TooltipElement>,
    machine: Tooltip,
    chart: Option<RenderedChart>,
}

impl Page {
    pub fn new(mounts: MountPoints) -> Self {
        let container = Element::new("div").attr("id", mounts.container_id.as_str());
        Self { mounts, container, tooltip: None, machine: Tooltip::new(), chart: None }
    }

    pub fn mounts(&self) -> &MountPoints { &self.mounts }
    pub fn container(&self) -> &Element { &self.container }
    pub fn tooltip(&self) -> Option<&TooltipElement> { self.tooltip.as_ref() }
    pub fn chart(&self) -> Option<&RenderedChart> { self.chart.as_ref() }

    /// Bars currently in the container.
    pub fn bar_count(&self) -> usize { self.container.select_class("bar").len() }

    /// Replace whatever the container holds with `chart`.
    pub fn mount(&mut self, chart: RenderedChart) {
        let replaced = self.chart.is_some();
        self.container.clear_children();
        self.container.push(chart.svg.clone());
        self.tooltip.get_or_insert_with(TooltipElement::new);
        self.machine = Tooltip::new();
        debug!(container = %self.mounts.container_id, bars = chart.bars.len(), replaced, "mounted chart");
        self.chart = Some(chart);
    }

    /// Feed a pointer event through the tooltip machine and apply the result.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<TooltipUpdate> {
        let chart = self.chart.as_ref()?;
        let update = self.machine.handle(event, &chart.bars)?;
        if let Some(el) = self.tooltip.as_mut() {
            el.apply(&update);
        }
        Some(update)
    }

    /// Standalone HTML document with the container and, if created, the tooltip.
    pub fn to_html(&self, title: &str, theme: &Theme) -> String {
        // `tip.html` was built from escaped parts; insert it as markup.
        let tooltip = match &self.tooltip {
            Some(tip) => format!(
                "<div id=\"{}\" style=\"{}\">{}</div>\n",
                escape(&self.mounts.tooltip_id),
                escape(&tip.style()),
                tip.html
            ),
            None => String::new(),
        };
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<title>{title}</title>\n",
                "<style>\n",
                "body {{ background: {background}; font-family: sans-serif; }}\n",
                "#{tooltip_id} {{ pointer-events: none; padding: 6px; border-radius: 4px; background: {tip_bg}; color: {tip_fg}; }}\n",
                "</style>\n",
                "</head>\n",
                "<body>\n",
                "{container}\n",
                "{tooltip}",
                "</body>\n",
                "</html>\n",
            ),
            title = escape(title),
            background = theme.background,
            tooltip_id = self.mounts.tooltip_id,
            tip_bg = theme.tooltip_background,
            tip_fg = theme.tooltip_text,
            container = self.container.to_html(),
            tooltip = tooltip,
        )
    }
}

impl Default for Page {
    fn default() -> Self { Self::new(MountPoints::default()) }
}
