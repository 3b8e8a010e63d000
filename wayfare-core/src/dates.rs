//! Travel dates are display values only; nothing here is allowed to fail.

use chrono::{DateTime, NaiveDate, Utc};

pub const FLEXIBLE_DATES: &str = "Flexible dates";

fn try_parse(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
}

/// Parse an ISO date, degrading to today when the input is malformed.
pub fn parse_travel_date(input: &str) -> NaiveDate {
    try_parse(input).unwrap_or_else(|| {
        tracing::warn!("Unparseable travel date '{}', using today", input);
        Utc::now().date_naive()
    })
}

/// Human readable form, e.g. `Fri, 25 Dec 2026`.
pub fn display_date(input: Option<&str>) -> String {
    match input.and_then(try_parse) {
        Some(date) => date.format("%a, %d %b %Y").to_string(),
        None => FLEXIBLE_DATES.to_string(),
    }
}
