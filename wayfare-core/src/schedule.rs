//! Clock times and durations for itineraries.
//!
//! Fixtures never carry clock times, so both the search service and the
//! generator draw departures from the same weighted hour-of-day table.

use chrono::{Duration, NaiveTime};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartureBias {
    #[default]
    Outbound,
    /// Return legs lean towards the afternoon and evening
    Return,
}

// Morning bank 06-09, evening bank 17-20
const OUTBOUND_HOUR_WEIGHTS: [u32; 24] = [
    1, 1, 1, 1, 2, 4, 8, 10, 9, 7, 6, 5, 5, 5, 6, 7, 8, 9, 8, 6, 4, 3, 2, 1,
];
const RETURN_HOUR_WEIGHTS: [u32; 24] = [
    1, 1, 1, 1, 1, 2, 3, 4, 5, 5, 6, 6, 7, 7, 8, 9, 10, 10, 9, 8, 6, 4, 3, 2,
];

const FALLBACK_HOUR: u32 = 9;

/// Random departure clock time in 5-minute steps, `HH:MM`.
pub fn random_departure_time<R: Rng + ?Sized>(rng: &mut R, bias: DepartureBias) -> String {
    let weights = match bias {
        DepartureBias::Outbound => &OUTBOUND_HOUR_WEIGHTS,
        DepartureBias::Return => &RETURN_HOUR_WEIGHTS,
    };
    let hour = WeightedIndex::new(weights.iter())
        .map(|dist| dist.sample(rng) as u32)
        .unwrap_or(FALLBACK_HOUR);
    let minute = rng.gen_range(0..12) * 5;
    format!("{:02}:{:02}", hour, minute)
}

/// Add minutes to an `HH:MM` clock time, wrapping past midnight.
/// Unparseable input is treated as midnight.
pub fn add_minutes(time: &str, minutes: u32) -> String {
    let start = NaiveTime::parse_from_str(time.trim(), "%H:%M").unwrap_or(NaiveTime::MIN);
    let (end, _) = start.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
    end.format("%H:%M").to_string()
}

pub fn format_duration(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

/// Parse `"2h 05m"`, `"2h"`, `"45m"` or `"2h05m"` into minutes.
pub fn parse_duration(input: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut digits = String::new();
    let mut matched = false;

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if ch.is_whitespace() {
            continue;
        }
        let unit = match ch.to_ascii_lowercase() {
            'h' => 60,
            'm' => 1,
            _ => {
                digits.clear();
                continue;
            }
        };
        if let Ok(value) = digits.parse::<u32>() {
            total = total.saturating_add(value.saturating_mul(unit));
            matched = true;
        }
        digits.clear();
    }

    matched.then_some(total)
}
