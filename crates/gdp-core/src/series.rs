// File: crates/gdp-core/src/series.rs
// Summary: Series model for dated GDP observations.
// Notes:
// - A point keeps its raw date string so bar attributes can echo it verbatim.
// - Dates are parsed lazily by `validate`, which is what the renderer calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::quarter::quarter_label;

/// Date format of the source document ("1947-01-01").
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One observation: raw `YYYY-MM-DD` date and GDP value in billions.
/// Wire shape is a two-element array `["1947-01-01", 243.1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct DataPoint {
    pub date: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self { date: date.into(), value }
    }

    pub fn parse_date(&self) -> std::result::Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
    }

    pub fn quarter_label(&self) -> String { quarter_label(&self.date) }
}

impl From<(String, f64)> for DataPoint {
    fn from((date, value): (String, f64)) -> Self {
        Self { date, value }
    }
}

impl From<DataPoint> for (String, f64) {
    fn from(p: DataPoint) -> Self {
        (p.date, p.value)
    }
}

/// Ordered observations, ascending by date (assumed, not checked).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<DataPoint>,
}

/// A point whose date parsed and whose value passed the range check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidPoint<'a> {
    pub point: &'a DataPoint,
    pub date: NaiveDate,
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> { self.points.iter() }

    /// Largest value, or `None` when empty.
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    /// Parse every date and check every value. Fails on the first bad entry.
    pub fn validate(&self) -> Result<Vec<ValidPoint<'_>>> {
        if self.points.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let date = point.parse_date().map_err(|source| ChartError::InvalidDate {
                    index,
                    date: point.date.clone(),
                    source,
                })?;
                if !point.value.is_finite() || point.value < 0.0 {
                    return Err(ChartError::InvalidValue {
                        index,
                        date: point.date.clone(),
                        value: point.value,
                    });
                }
                Ok(ValidPoint { point, date })
            })
            .collect()
    }
}

impl From<Vec<DataPoint>> for Series {
    fn from(points: Vec<DataPoint>) -> Self { Self::new(points) }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_pairs() {
        let s: Series = serde_json::from_str(r#"[["1947-01-01", 243.1], ["1947-04-01", 246.3]]"#).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.points()[0], DataPoint::new("1947-01-01", 243.1));
        assert_eq!(s.max_value(), Some(246.3));
    }

    #[test]
    fn rejects_non_pair_shapes() {
        assert!(serde_json::from_str::<Series>(r#"[["1947-01-01"]]"#).is_err());
        assert!(serde_json::from_str::<Series>(r#"[["1947-01-01", "243.1"]]"#).is_err());
    }

    #[test]
    fn validate_reports_first_bad_entry() {
        let s = Series::new(vec![
            DataPoint::new("1947-01-01", 1.0),
            DataPoint::new("1947-13-01", 2.0),
            DataPoint::new("1948-01-01", -3.0),
        ]);
        match s.validate() {
            Err(ChartError::InvalidDate { index, date, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(date, "1947-13-01");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_negative_and_nan() {
        let neg = Series::new(vec![DataPoint::new("1947-01-01", -1.0)]);
        assert!(matches!(neg.validate(), Err(ChartError::InvalidValue { index: 0, .. })));
        let nan = Series::new(vec![DataPoint::new("1947-01-01", f64::NAN)]);
        assert!(matches!(nan.validate(), Err(ChartError::InvalidValue { .. })));
    }

    #[test]
    fn validate_rejects_empty() {
        assert!(matches!(Series::default().validate(), Err(ChartError::EmptySeries)));
    }
}
