// File: crates/gdp-web/src/dom.rs
// Summary: Replays a rendered scene into the live DOM and wires bar listeners to the tooltip.

use std::cell::RefCell;
use std::rc::Rc;

use gdp_core::scene::{Element as SceneElement, Node as SceneNode, SVG_NS};
use gdp_core::{Bar, MountPoints, RenderedChart, Tooltip, TooltipUpdate};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::events::{pointer_event, BAR_EVENTS};
use crate::style::tooltip_styles;

/// Owns the bar listeners of one mounted chart. Drop it only after the
/// container was cleared, otherwise detached bars would call freed closures.
pub struct MountedChart {
    _listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

pub fn build_element(document: &Document, el: &SceneElement) -> Result<Element, JsValue> {
    let node = document.create_element_ns(Some(SVG_NS), el.tag())?;
    for (name, value) in el.attrs() {
        if name == "xmlns" { continue; }
        node.set_attribute(name, value)?;
    }
    for child in el.children() {
        match child {
            SceneNode::Element(c) => { node.append_child(&build_element(document, c)?)?; }
            SceneNode::Text(t) => { node.append_child(&document.create_text_node(t))?; }
        }
    }
    Ok(node)
}

fn lookup(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{id}'")))
}

/// Clear the container, append the chart, attach hover listeners.
pub fn mount(document: &Document, mounts: &MountPoints, chart: RenderedChart) -> Result<MountedChart, JsValue> {
    let container = lookup(document, &mounts.container_id)?;
    let tooltip: HtmlElement = lookup(document, &mounts.tooltip_id)?
        .dyn_into()
        .map_err(|_| JsValue::from_str("tooltip mount point is not an HTML element"))?;

    container.set_inner_html("");
    let svg = build_element(document, &chart.svg)?;
    container.append_child(&svg)?;

    let bars: Rc<Vec<Bar>> = Rc::new(chart.bars);
    let machine = Rc::new(RefCell::new(Tooltip::new()));
    let rects = svg.query_selector_all("rect.bar")?;
    let mut listeners = Vec::with_capacity(rects.length() as usize * BAR_EVENTS.len());

    for i in 0..rects.length() {
        let Some(rect) = rects.item(i) else { continue };
        let index = rect
            .dyn_ref::<Element>()
            .and_then(|e| e.get_attribute("index"))
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(i as usize);
        for kind in BAR_EVENTS {
            let bars = Rc::clone(&bars);
            let machine = Rc::clone(&machine);
            let tooltip = tooltip.clone();
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
                let Some(event) = pointer_event(kind, index, ev.page_x() as f64, ev.page_y() as f64) else { return };
                let update = machine.borrow_mut().handle(event, &bars);
                if let Some(update) = update {
                    apply(&tooltip, &update);
                }
            });
            rect.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }
    }

    debug!(container = %mounts.container_id, bars = bars.len(), listeners = listeners.len(), "mounted chart");
    Ok(MountedChart { _listeners: listeners })
}

fn apply(tooltip: &HtmlElement, update: &TooltipUpdate) {
    let style = tooltip.style();
    for (prop, value) in tooltip_styles(update) {
        let _ = style.set_property(prop, &value);
    }
    if let Some(html) = &update.html {
        tooltip.set_inner_html(html);
    }
}
