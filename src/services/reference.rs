use chrono::{Datelike, Utc};

pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn year_prefix(year: i32) -> String {
    format!("GT-{year}-")
}

/// Next quote reference for `year`, given every reference already stored for
/// that year. Counters are zero padded to four digits and grow monotonically;
/// rows from other years and rows that do not parse are ignored.
pub fn next_reference(year: i32, existing: &[String]) -> String {
    let prefix = year_prefix(year);
    let highest = existing
        .iter()
        .filter_map(|reference| reference.strip_prefix(prefix.as_str()))
        .filter_map(|counter| counter.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    format!("{prefix}{:04}", highest + 1)
}
