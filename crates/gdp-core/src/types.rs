// File: crates/gdp-core/src/types.rs
// Summary: Shared layout constants (sizes, margins, expected point count).

/// Default SVG width in pixels, margins included.
pub const WIDTH: u32 = 1100;
/// Default SVG height in pixels, margins included.
pub const HEIGHT: u32 = 610;
/// Number of quarterly points the bar width is sized for.
pub const EXPECTED_POINTS: usize = 275;
/// Fixed label drawn next to the value axis.
pub const Y_AXIS_LABEL: &str = "Gross Domestic Product (Billions)";

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 20, 30, 50)
    }
}
