// File: crates/gdp-web/src/events.rs
// Summary: DOM event names to tooltip machine events.

use gdp_core::PointerEvent;

/// Event types a bar listens to, in registration order.
pub const BAR_EVENTS: [&str; 3] = ["mouseover", "mousemove", "mouseout"];

/// Translate a DOM event on bar `bar` at page coordinates into a machine event.
pub fn pointer_event(kind: &str, bar: usize, page_x: f64, page_y: f64) -> Option<PointerEvent> {
    match kind {
        "mouseover" | "pointerenter" => Some(PointerEvent::Enter { bar, page_x, page_y }),
        "mousemove" | "pointermove" => Some(PointerEvent::Move { page_x, page_y }),
        "mouseout" | "pointerleave" => Some(PointerEvent::Leave),
        _ => None,
    }
}
