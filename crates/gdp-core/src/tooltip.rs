// File: crates/gdp-core/src/tooltip.rs
// Summary: Hover tooltip as a two-state machine (Hidden -> Visible -> Hidden) driven by pointer events.
// Notes:
// - The machine knows nothing about the DOM; front ends translate their own
//   events into `PointerEvent` and apply the returned `TooltipUpdate`.

use std::time::Duration;

use crate::chart::Bar;

/// Offset from the pointer to the tooltip's top-left corner.
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -28.0;
pub const VISIBLE_OPACITY: f64 = 0.9;
pub const FADE_IN: Duration = Duration::from_millis(200);
pub const FADE_OUT: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the bar at `bar` (page coordinates).
    Enter { bar: usize, page_x: f64, page_y: f64 },
    Move { page_x: f64, page_y: f64 },
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible { bar: usize },
}

/// Animated opacity change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub opacity: f64,
    pub duration: Duration,
}

/// What a front end has to change on its tooltip element.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TooltipUpdate {
    pub fade: Option<Fade>,
    pub html: Option<String>,
    /// Top-left corner in page coordinates.
    pub position: Option<(f64, f64)>,
}

#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    state: TooltipState,
}

impl Tooltip {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> TooltipState { self.state }
    pub fn is_visible(&self) -> bool { matches!(self.state, TooltipState::Visible { .. }) }

    /// Advance the machine. `None` means the event was ignored.
    pub fn handle(&mut self, event: PointerEvent, bars: &[Bar]) -> Option<TooltipUpdate> {
        match (self.state, event) {
            (_, PointerEvent::Enter { bar, page_x, page_y }) => {
                let source = bars.get(bar)?;
                self.state = TooltipState::Visible { bar };
                Some(TooltipUpdate {
                    fade: Some(Fade { opacity: VISIBLE_OPACITY, duration: FADE_IN }),
                    html: Some(source.tooltip_html()),
                    position: Some(anchor(page_x, page_y)),
                })
            }
            (TooltipState::Visible { .. }, PointerEvent::Move { page_x, page_y }) => Some(TooltipUpdate {
                position: Some(anchor(page_x, page_y)),
                ..TooltipUpdate::default()
            }),
            (TooltipState::Visible { .. }, PointerEvent::Leave) => {
                self.state = TooltipState::Hidden;
                Some(TooltipUpdate {
                    fade: Some(Fade { opacity: 0.0, duration: FADE_OUT }),
                    ..TooltipUpdate::default()
                })
            }
            (TooltipState::Hidden, PointerEvent::Move { .. } | PointerEvent::Leave) => None,
        }
    }
}

fn anchor(page_x: f64, page_y: f64) -> (f64, f64) {
    (page_x + OFFSET_X, page_y + OFFSET_Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn bars() -> Vec<Bar> {
        vec![Bar {
            index: 0,
            date: "1947-01-01".into(),
            value: 243.1,
            quarter: "1947 Q1".into(),
            rect: Rect::from_xywh(0.0, 0.0, 1.0, 1.0),
        }]
    }

    #[test]
    fn enter_move_leave_cycle() {
        let bars = bars();
        let mut t = Tooltip::new();

        let shown = t.handle(PointerEvent::Enter { bar: 0, page_x: 100.0, page_y: 200.0 }, &bars).unwrap();
        assert_eq!(t.state(), TooltipState::Visible { bar: 0 });
        assert_eq!(shown.html.as_deref(), Some("1947 Q1<br>$243.1 Billions"));
        assert_eq!(shown.position, Some((110.0, 172.0)));
        assert_eq!(shown.fade, Some(Fade { opacity: 0.9, duration: Duration::from_millis(200) }));

        let moved = t.handle(PointerEvent::Move { page_x: 5.0, page_y: 50.0 }, &bars).unwrap();
        assert_eq!(moved.position, Some((15.0, 22.0)));
        assert!(moved.fade.is_none() && moved.html.is_none());

        let hidden = t.handle(PointerEvent::Leave, &bars).unwrap();
        assert_eq!(t.state(), TooltipState::Hidden);
        assert_eq!(hidden.fade, Some(Fade { opacity: 0.0, duration: Duration::from_millis(500) }));
    }

    #[test]
    fn hidden_ignores_move_and_leave() {
        let bars = bars();
        let mut t = Tooltip::new();
        assert!(t.handle(PointerEvent::Move { page_x: 1.0, page_y: 1.0 }, &bars).is_none());
        assert!(t.handle(PointerEvent::Leave, &bars).is_none());
        assert!(!t.is_visible());
    }

    #[test]
    fn unknown_bar_is_ignored() {
        let mut t = Tooltip::new();
        assert!(t.handle(PointerEvent::Enter { bar: 7, page_x: 0.0, page_y: 0.0 }, &bars()).is_none());
        assert_eq!(t.state(), TooltipState::Hidden);
    }
}
