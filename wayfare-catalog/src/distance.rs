/// Used for any pair missing from the table.
pub const DEFAULT_DISTANCE_KM: u32 = 5_000;

// Approximate great-circle distances, one direction per pair.
static KNOWN_DISTANCES: &[(&str, &str, u32)] = &[
    ("SIN", "BKK", 1_430),
    ("SIN", "CGK", 880),
    ("SIN", "KUL", 300),
    ("SIN", "DPS", 1_670),
    ("SIN", "HKT", 970),
    ("SIN", "HKG", 2_590),
    ("SIN", "NRT", 5_330),
    ("SIN", "HND", 5_320),
    ("SIN", "DXB", 5_840),
    ("SIN", "DOH", 6_200),
    ("SIN", "SYD", 6_300),
    ("SIN", "IST", 8_700),
    ("SIN", "FRA", 10_260),
    ("CGK", "KUL", 1_130),
    ("CGK", "BKK", 2_300),
    ("CGK", "DPS", 980),
    ("CGK", "SUB", 660),
    ("CGK", "NRT", 5_780),
    ("CGK", "DXB", 6_580),
    ("SUB", "DPS", 320),
    ("KUL", "BKK", 1_200),
    ("KUL", "HKT", 600),
    ("KUL", "DXB", 5_520),
    ("BKK", "HKT", 690),
    ("BKK", "HKG", 1_700),
    ("BKK", "NRT", 4_600),
    ("BKK", "HND", 4_650),
    ("BKK", "DXB", 4_900),
    ("DPS", "SYD", 4_600),
    ("HND", "HKG", 2_900),
    ("NRT", "SYD", 7_830),
    ("NRT", "FRA", 9_350),
    ("HKG", "SYD", 7_400),
    ("HKG", "FRA", 9_200),
    ("DXB", "DOH", 380),
    ("DXB", "IST", 3_000),
    ("DXB", "FRA", 4_850),
    ("DXB", "SYD", 12_040),
    ("DOH", "FRA", 4_450),
    ("IST", "FRA", 1_860),
];

/// Table distance in either direction, or [`DEFAULT_DISTANCE_KM`].
pub fn route_distance_km(from: &str, to: &str) -> u32 {
    KNOWN_DISTANCES
        .iter()
        .find(|(a, b, _)| (*a == from && *b == to) || (*a == to && *b == from))
        .map(|(_, _, km)| *km)
        .unwrap_or(DEFAULT_DISTANCE_KM)
}
