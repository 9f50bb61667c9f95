// File: crates/gdp-core/src/scale.rs
// Summary: Time (X) and linear value (Y) scale transforms.

use chrono::NaiveDate;

/// General scale transform from a domain to a pixel range.
pub trait ScaleTransform {
    type Domain;
    fn to_px(&self, v: Self::Domain) -> f64;
    /// Pixel range as given at construction (may be inverted).
    fn range(&self) -> (f64, f64);
}

/// Linear value scale mapping `[d0, d1]` onto `[r0, r1]`.
/// An inverted range (`r0 > r1`) is how the Y axis grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new((d0, mut d1): (f64, f64), (r0, r1): (f64, f64)) -> Self {
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { d0, d1, r0, r1 }
    }
    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
}

impl ScaleTransform for LinearScale {
    type Domain = f64;
    #[inline]
    fn to_px(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

/// Horizontal time scale, linear in elapsed days between `start` and `end`.
/// A single-day domain maps every date to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    r0: f64,
    r1: f64,
}

impl TimeScale {
    pub fn new((start, end): (NaiveDate, NaiveDate), (r0, r1): (f64, f64)) -> Self {
        Self { start, end, r0, r1 }
    }
    pub fn domain(&self) -> (NaiveDate, NaiveDate) { (self.start, self.end) }

    #[inline]
    fn span_days(&self) -> f64 { (self.end - self.start).num_days() as f64 }
}

impl ScaleTransform for TimeScale {
    type Domain = NaiveDate;
    #[inline]
    fn to_px(&self, date: NaiveDate) -> f64 {
        let span = self.span_days();
        if span == 0.0 {
            return (self.r0 + self.r1) * 0.5;
        }
        let t = (date - self.start).num_days() as f64 / span;
        self.r0 + t * (self.r1 - self.r0)
    }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate { NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap() }

    #[test]
    fn linear_inverted_range() {
        let y = LinearScale::new((0.0, 100.0), (530.0, 0.0));
        assert_eq!(y.to_px(0.0), 530.0);
        assert_eq!(y.to_px(100.0), 0.0);
        assert_eq!(y.to_px(50.0), 265.0);
    }

    #[test]
    fn linear_degenerate_domain_widens() {
        let y = LinearScale::new((0.0, 0.0), (530.0, 0.0));
        assert_eq!(y.domain(), (0.0, 1.0));
        assert!(y.to_px(0.0).is_finite());
    }

    #[test]
    fn time_endpoints_and_midpoint() {
        let x = TimeScale::new((d("2000-01-01"), d("2000-01-11")), (0.0, 1000.0));
        assert_eq!(x.to_px(d("2000-01-01")), 0.0);
        assert_eq!(x.to_px(d("2000-01-11")), 1000.0);
        assert_eq!(x.to_px(d("2000-01-06")), 500.0);
    }

    #[test]
    fn time_single_day_maps_to_middle() {
        let x = TimeScale::new((d("1947-01-01"), d("1947-01-01")), (0.0, 1000.0));
        assert_eq!(x.to_px(d("1947-01-01")), 500.0);
    }
}
