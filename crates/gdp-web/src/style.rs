// File: crates/gdp-web/src/style.rs
// Summary: CSS property writes for a tooltip update.

use gdp_core::TooltipUpdate;

/// `(property, value)` pairs to set on the tooltip element, in order.
/// The transition is set before the opacity so the change animates.
pub fn tooltip_styles(update: &TooltipUpdate) -> Vec<(&'static str, String)> {
    let mut out = Vec::with_capacity(4);
    if let Some(fade) = update.fade {
        out.push(("transition", format!("opacity {}ms", fade.duration.as_millis())));
        out.push(("opacity", format!("{}", fade.opacity)));
    }
    if let Some((left, top)) = update.position {
        out.push(("left", format!("{left}px")));
        out.push(("top", format!("{top}px")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdp_core::Fade;
    use std::time::Duration;

    #[test]
    fn fade_then_position() {
        let update = TooltipUpdate {
            fade: Some(Fade { opacity: 0.9, duration: Duration::from_millis(200) }),
            html: Some("x".into()),
            position: Some((110.0, 172.0)),
        };
        assert_eq!(
            tooltip_styles(&update),
            vec![
                ("transition", "opacity 200ms".to_string()),
                ("opacity", "0.9".to_string()),
                ("left", "110px".to_string()),
                ("top", "172px".to_string()),
            ]
        );
    }

    #[test]
    fn move_only_touches_position() {
        let update = TooltipUpdate { position: Some((15.5, 22.0)), ..TooltipUpdate::default() };
        assert_eq!(tooltip_styles(&update), vec![("left", "15.5px".to_string()), ("top", "22px".to_string())]);
    }
}
