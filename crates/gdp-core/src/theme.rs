// File: crates/gdp-core/src/theme.rs
// Summary: Color presets for bars, axes and the tooltip.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub bar_fill: &'static str,
    pub axis: &'static str,
    pub axis_label: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_text: &'static str,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: "#ffffff",
            bar_fill: "#33adff",
            axis: "#000000",
            axis_label: "#000000",
            tooltip_background: "#add8e6",
            tooltip_text: "#000000",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            bar_fill: "#40a0ff",
            axis: "#b4b4be",
            axis_label: "#ebebf5",
            tooltip_background: "#28282d",
            tooltip_text: "#ebebf5",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK"), Theme::dark());
        assert_eq!(find("nope"), Theme::classic());
        assert_eq!(Theme::default().bar_fill, "#33adff");
    }
}
