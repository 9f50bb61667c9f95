// File: crates/gdp-core/src/scene.rs
// Summary: Minimal retained element tree for SVG/HTML output, with DOM-like queries.
// Notes:
// - Attribute order is preserved so serialized output is deterministic.
// - Front ends either serialize the tree (CLI) or replay it into a live DOM (web).

use std::fmt::Write as _;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Builder form of `set_attr`.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn child(mut self, el: Element) -> Self {
        self.children.push(Node::Element(el));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Set or replace an attribute, keeping its original position.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn push(&mut self, el: Element) { self.children.push(Node::Element(el)); }
    pub fn clear_children(&mut self) { self.children.clear(); }

    pub fn tag(&self) -> &str { &self.tag }
    pub fn attrs(&self) -> &[(String, String)] { &self.attrs }
    pub fn children(&self) -> &[Node] { &self.children }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> { self.get_attr("id") }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class").map_or(false, |c| c.split_whitespace().any(|c| c == class))
    }

    /// Direct element children (text nodes skipped).
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Depth-first, pre-order walk over this element and all descendants.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(el) = stack.pop() {
            out.push(el);
            let kids: Vec<&Element> = el.elements().collect();
            stack.extend(kids.into_iter().rev());
        }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants().into_iter().find(|e| e.id() == Some(id))
    }

    pub fn select_all(&self, tag: &str) -> Vec<&Element> {
        self.descendants().into_iter().filter(|e| e.tag == tag).collect()
    }

    pub fn select_class(&self, class: &str) -> Vec<&Element> {
        self.descendants().into_iter().filter(|e| e.has_class(class)).collect()
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// XML serialization; empty elements self-close.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, true);
        out
    }

    /// HTML serialization; every element gets an explicit end tag.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, false);
        out
    }

    pub fn write_markup(&self, out: &mut String, self_close: bool) {
        let _ = write!(out, "<{}", self.tag);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape(v));
        }
        if self.children.is_empty() && self_close {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_markup(out, self_close),
                Node::Text(t) => out.push_str(&escape(t)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Element(e) => collect_text(e, out),
            Node::Text(t) => out.push_str(t),
        }
    }
}

/// Escape text for use in both attribute values and text nodes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("svg")
            .attr("width", "10")
            .child(
                Element::new("g")
                    .attr("id", "x-axis")
                    .child(Element::new("text").attr("class", "tick label").text("1950")),
            )
            .child(Element::new("rect").attr("class", "bar"))
    }

    #[test]
    fn queries() {
        let svg = sample();
        assert_eq!(svg.find_by_id("x-axis").map(|e| e.tag()), Some("g"));
        assert_eq!(svg.select_all("rect").len(), 1);
        assert_eq!(svg.select_class("label").len(), 1);
        assert_eq!(svg.text_content(), "1950");
        let order: Vec<&str> = svg.descendants().iter().map(|e| e.tag()).collect();
        assert_eq!(order, vec!["svg", "g", "text", "rect"]);
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut el = Element::new("rect").attr("x", "1").attr("y", "2");
        el.set_attr("x", "5");
        assert_eq!(el.attrs(), &[("x".to_string(), "5".to_string()), ("y".to_string(), "2".to_string())]);
    }

    #[test]
    fn markup_is_escaped() {
        let el = Element::new("text").attr("data-x", "a\"b").text("Q1<br>$1 & 2");
        assert_eq!(el.to_markup(), "<text data-x=\"a&quot;b\">Q1&lt;br&gt;$1 &amp; 2</text>");
        assert_eq!(Element::new("rect").to_markup(), "<rect/>");
        assert_eq!(Element::new("div").to_html(), "<div></div>");
    }
}
