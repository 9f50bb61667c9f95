// File: crates/gdp-core/src/error.rs
// Summary: Rendering-time data errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series is empty; nothing to draw")]
    EmptySeries,

    #[error("invalid date '{date}' at index {index}: {source}")]
    InvalidDate {
        index: usize,
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid value {value} for '{date}' at index {index}; expected a finite, non-negative number")]
    InvalidValue { index: usize, date: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
