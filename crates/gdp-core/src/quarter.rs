// File: crates/gdp-core/src/quarter.rs
// Summary: Quarter tags and "YYYY Qn" labels derived from raw date strings.

/// Quarter tag for a two-digit month. Only quarter-start months map to a tag.
pub fn quarter_tag(month: &str) -> &'static str {
    match month {
        "01" => "Q1",
        "04" => "Q2",
        "07" => "Q3",
        "10" => "Q4",
        _ => "",
    }
}

/// "YYYY Qn" for a `YYYY-MM-DD` string; the tag part is empty off-quarter
/// ("1950-02-01" gives "1950 "). Short strings degrade instead of panicking.
pub fn quarter_label(date: &str) -> String {
    let year = date.get(0..4).unwrap_or(date);
    let month = date.get(5..7).unwrap_or("");
    format!("{} {}", year, quarter_tag(month))
}
