// File: crates/gdp-core/src/grid.rs
// Summary: Tick layout helpers: "nice" linear ticks, calendar ticks, and their labels.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Step for about `count` ticks over `[start, stop]`, snapped to 1, 2, 5 × 10^k.
pub fn nice_step(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start).abs() / count.max(1) as f64;
    if !(step > 0.0) || !step.is_finite() { return 0.0; }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    factor * 10f64.powf(power)
}

/// Evenly spaced "nice" values inside `[start, stop]`.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let step = nice_step(lo, hi, count);
    if step <= 0.0 { return Vec::new(); }
    // Whole-number multiplier avoids 0.1 + 0.2 style drift for fractional steps.
    let (scale, inc) = if step < 1.0 { (1.0 / step, 1.0) } else { (1.0, step) };
    let mut i1 = (lo * scale / inc).round();
    let mut i2 = (hi * scale / inc).round();
    if i1 * inc / scale < lo { i1 += 1.0; }
    if i2 * inc / scale > hi { i2 -= 1.0; }
    let mut ticks: Vec<f64> = (i1 as i64..=i2 as i64).map(|i| i as f64 * inc / scale).collect();
    if start > stop { ticks.reverse(); }
    ticks
}

/// Label for a linear tick: fixed precision from the step, thousands separators.
pub fn format_linear_tick(value: f64, step: f64) -> String {
    let precision = if step > 0.0 { (-step.log10().floor()).max(0.0) as usize } else { 0 };
    let raw = format!("{:.*}", precision, value);
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    // "-0" reads badly on an axis
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && frac_part.map_or(true, |f| f.chars().all(|c| c == '0')) { "" } else { sign };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Calendar interval between consecutive time ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Day(u32),
    Week,
    Month(u32),
    Year(i32),
}

impl TimeInterval {
    fn approx_days(self) -> f64 {
        match self {
            TimeInterval::Day(n) => n as f64,
            TimeInterval::Week => 7.0,
            TimeInterval::Month(n) => 30.0 * n as f64,
            TimeInterval::Year(n) => 365.0 * n as f64,
        }
    }
}

const CANDIDATES: [TimeInterval; 6] = [
    TimeInterval::Day(1),
    TimeInterval::Day(2),
    TimeInterval::Week,
    TimeInterval::Month(1),
    TimeInterval::Month(3),
    TimeInterval::Year(1),
];

/// Pick the interval whose length is closest (by ratio) to span / count.
pub fn time_interval(start: NaiveDate, end: NaiveDate, count: usize) -> TimeInterval {
    let span = (end - start).num_days().abs() as f64;
    let target = span / count.max(1) as f64;
    if target > TimeInterval::Year(1).approx_days() {
        let years = span / 365.0;
        let step = nice_step(0.0, years, count).max(1.0);
        return TimeInterval::Year(step as i32);
    }
    let idx = CANDIDATES.iter().position(|c| c.approx_days() >= target).unwrap_or(CANDIDATES.len() - 1);
    if idx == 0 { return CANDIDATES[0]; }
    let (prev, next) = (CANDIDATES[idx - 1], CANDIDATES[idx]);
    if target / prev.approx_days() < next.approx_days() / target { prev } else { next }
}

/// Tick dates inside `[start, end]` for about `count` ticks.
pub fn time_ticks(start: NaiveDate, end: NaiveDate, count: usize) -> (TimeInterval, Vec<NaiveDate>) {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let interval = time_interval(lo, hi, count);
    let mut ticks = Vec::new();
    match interval {
        TimeInterval::Year(step) => {
            let mut year = if lo.ordinal() == 1 { lo.year() } else { lo.year() + 1 };
            year += (step - year.rem_euclid(step)) % step;
            while let Some(d) = NaiveDate::from_ymd_opt(year, 1, 1) {
                if d > hi { break; }
                ticks.push(d);
                year += step;
            }
        }
        TimeInterval::Month(step) => {
            let mut cursor = first_of_month_at_or_after(lo);
            while cursor <= hi {
                if cursor.month0() % step == 0 { ticks.push(cursor); }
                match next_month(cursor) {
                    Some(next) => cursor = next,
                    None => break,
                }
            }
        }
        TimeInterval::Week => {
            let back = lo.weekday().num_days_from_sunday() as i64;
            let mut cursor = if back == 0 { lo } else { lo + Duration::days(7 - back) };
            while cursor <= hi {
                ticks.push(cursor);
                cursor += Duration::days(7);
            }
        }
        TimeInterval::Day(step) => {
            let mut cursor = lo;
            while cursor <= hi {
                if cursor.day0() % step == 0 { ticks.push(cursor); }
                cursor += Duration::days(1);
            }
        }
    }
    (interval, ticks)
}

/// Label for a time tick: year on Jan 1, month name on the 1st, otherwise day.
pub fn format_time_tick(date: NaiveDate) -> String {
    if date.day() == 1 {
        if date.month() == 1 { date.format("%Y").to_string() } else { date.format("%B").to_string() }
    } else if date.weekday() == Weekday::Sun {
        date.format("%b %d").to_string()
    } else {
        date.format("%a %d").to_string()
    }
}

fn first_of_month_at_or_after(d: NaiveDate) -> NaiveDate {
    if d.day() == 1 { return d; }
    let first = d.with_day(1).unwrap_or(d);
    next_month(first).unwrap_or(d)
}

fn next_month(d: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if d.month() == 12 { (d.year() + 1, 1) } else { (d.year(), d.month() + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate { NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap() }

    #[test]
    fn gdp_value_ticks() {
        let ticks = linear_ticks(0.0, 18064.7, 10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&18000.0));
        assert_eq!(ticks.len(), 10);
        assert_eq!(nice_step(0.0, 18064.7, 10), 2000.0);
    }

    #[test]
    fn fractional_ticks_are_clean() {
        assert_eq!(linear_ticks(0.0, 1.0, 10), vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]);
    }

    #[test]
    fn linear_labels() {
        assert_eq!(format_linear_tick(18000.0, 2000.0), "18,000");
        assert_eq!(format_linear_tick(0.0, 2000.0), "0");
        assert_eq!(format_linear_tick(250.0, 50.0), "250");
        assert_eq!(format_linear_tick(0.3, 0.1), "0.3");
        assert_eq!(format_linear_tick(-1500.0, 500.0), "-1,500");
        assert_eq!(format_linear_tick(1234567.0, 1.0), "1,234,567");
    }

    #[test]
    fn gdp_time_ticks_every_five_years() {
        let (interval, ticks) = time_ticks(d("1947-01-01"), d("2015-07-01"), 10);
        assert_eq!(interval, TimeInterval::Year(5));
        assert_eq!(ticks.first(), Some(&d("1950-01-01")));
        assert_eq!(ticks.last(), Some(&d("2015-01-01")));
        assert_eq!(format_time_tick(ticks[0]), "1950");
    }

    #[test]
    fn short_span_uses_months() {
        let (interval, ticks) = time_ticks(d("1947-01-01"), d("1947-10-01"), 10);
        assert_eq!(interval, TimeInterval::Month(1));
        assert_eq!(ticks.len(), 10);
        assert_eq!(format_time_tick(ticks[0]), "1947");
        assert_eq!(format_time_tick(ticks[3]), "April");
    }

    #[test]
    fn quarter_span_uses_weeks() {
        let (interval, ticks) = time_ticks(d("1947-01-01"), d("1947-04-01"), 10);
        assert_eq!(interval, TimeInterval::Week);
        assert!(ticks.iter().all(|t| t.weekday() == Weekday::Sun));
        assert_eq!(format_time_tick(d("1947-01-05")), "Jan 05");
    }
}
