// File: crates/gdp-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Axis-aligned rectangle in SVG user units (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn bottom(&self) -> f64 { self.y + self.height }
}

/// SVG-friendly number formatting: integral values drop the fraction.
/// Rust's shortest round-trip `Display` already matches what browsers print.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 { return "0".to_string(); }
    format!("{}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::from_xywh(10.0, 20.0, 5.0, 100.0);
        assert_eq!(r.bottom(), 120.0);
    }

    #[test]
    fn numbers_print_like_the_browser() {
        assert_eq!(fmt_num(243.1), "243.1");
        assert_eq!(fmt_num(530.0), "530");
        assert_eq!(fmt_num(-0.0), "0");
    }
}
