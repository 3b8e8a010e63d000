//! Small hand-built fixture world shared by the unit tests.

use std::collections::BTreeMap;

use wayfare_shared::{
    AirlineFixture, AirlineRef, AirportFixture, AirportSummary, CabinClass, ClassFare,
    CountryFixture, FixtureFlight, FixtureRoundTrip, FixtureSegment, FixtureSet, FlightType, Route,
};

fn summary(code: &str) -> AirportSummary {
    let (city, country) = match code {
        "CGK" => ("Jakarta", "Indonesia"),
        "SIN" => ("Singapore", "Singapore"),
        "BKK" => ("Bangkok", "Thailand"),
        "NRT" => ("Tokyo", "Japan"),
        _ => (code, "Unknown"),
    };
    AirportSummary {
        code: code.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    }
}

fn route(from: &str, to: &str) -> Route {
    Route {
        from: summary(from),
        to: summary(to),
    }
}

fn airline(code: &str) -> AirlineRef {
    AirlineRef {
        code: code.to_string(),
        name: format!("{} Airways", code),
    }
}

fn fares(entries: &[(CabinClass, i32)]) -> BTreeMap<CabinClass, ClassFare> {
    entries
        .iter()
        .map(|&(class, price)| (class, ClassFare { price, available_seats: 9 }))
        .collect()
}

pub(crate) fn direct(
    id: &str,
    from: &str,
    to: &str,
    carrier: &str,
    prices: &[(CabinClass, i32)],
) -> FixtureFlight {
    FixtureFlight {
        id: id.to_string(),
        route: route(from, to),
        flight_type: FlightType::Direct,
        airline: Some(airline(carrier)),
        flight_number: Some(format!("{}100", carrier)),
        aircraft: Some("Airbus A320".to_string()),
        duration: "2h 20m".to_string(),
        segments: Vec::new(),
        pricing: fares(prices),
        baggage: "20kg".to_string(),
        meal: "Snack".to_string(),
        entertainment: "None".to_string(),
    }
}

pub(crate) fn transit(
    id: &str,
    from: &str,
    via: &str,
    to: &str,
    carriers: (&str, &str),
    prices: &[(CabinClass, i32)],
) -> FixtureFlight {
    FixtureFlight {
        id: id.to_string(),
        route: route(from, to),
        flight_type: FlightType::Transit,
        airline: None,
        flight_number: None,
        aircraft: None,
        duration: "4h 30m".to_string(),
        segments: vec![
            FixtureSegment {
                airline: airline(carriers.0),
                flight_number: format!("{}200", carriers.0),
                from: from.to_string(),
                to: via.to_string(),
                duration: "2h 00m".to_string(),
                aircraft: "Airbus A320".to_string(),
                layover: Some("1h 30m".to_string()),
            },
            FixtureSegment {
                airline: airline(carriers.1),
                flight_number: format!("{}300", carriers.1),
                from: via.to_string(),
                to: to.to_string(),
                duration: "1h 00m".to_string(),
                aircraft: "Boeing 737-800".to_string(),
                layover: None,
            },
        ],
        pricing: fares(prices),
        baggage: "20kg".to_string(),
        meal: "Snack".to_string(),
        entertainment: "None".to_string(),
    }
}

fn round_trip(
    id: &str,
    outbound: FixtureFlight,
    return_flight: FixtureFlight,
    totals: &[(CabinClass, i32)],
) -> FixtureRoundTrip {
    FixtureRoundTrip {
        id: id.to_string(),
        route: outbound.route.clone(),
        outbound,
        return_flight,
        total_price_range: totals.iter().copied().collect(),
    }
}

pub(crate) fn sample_fixtures() -> FixtureSet {
    use CabinClass::*;

    let country = |name: &str, code: &str, airports: &[(&str, &str, &str)]| CountryFixture {
        name: name.to_string(),
        code: code.to_string(),
        airports: airports
            .iter()
            .map(|(code, name, city)| AirportFixture {
                code: code.to_string(),
                name: name.to_string(),
                city: city.to_string(),
            })
            .collect(),
    };

    FixtureSet {
        countries: vec![
            country(
                "Indonesia",
                "ID",
                &[
                    ("CGK", "Soekarno-Hatta International Airport", "Jakarta"),
                    ("DPS", "Ngurah Rai International Airport", "Denpasar"),
                ],
            ),
            country("Singapore", "SG", &[("SIN", "Changi Airport", "Singapore")]),
            country(
                "Thailand",
                "TH",
                &[
                    ("BKK", "Suvarnabhumi Airport", "Bangkok"),
                    ("DMK", "Don Mueang International Airport", "Bangkok"),
                ],
            ),
            country("Japan", "JP", &[("NRT", "Narita International Airport", "Tokyo")]),
        ],
        one_way: vec![
            direct("OW-CGK-SIN-1", "CGK", "SIN", "GA", &[(Economy, 120), (Business, 450)]),
            transit("OW-CGK-SIN-2", "CGK", "KUL", "SIN", ("GA", "MH"), &[(Economy, 95)]),
            direct("OW-SIN-BKK-1", "SIN", "BKK", "SQ", &[(Economy, 150)]),
            direct("OW-SIN-BKK-2", "SIN", "BKK", "TG", &[(Economy, 150)]),
            transit(
                "OW-SIN-BKK-3",
                "SIN",
                "KUL",
                "BKK",
                ("TR", "MH"),
                &[(Economy, 110), (Business, 600)],
            ),
            direct("OW-SIN-BKK-4", "SIN", "BKK", "SQ", &[(Business, 900)]),
        ],
        round_trip: vec![
            round_trip(
                "RT-1",
                direct("RT-1-OUT", "SIN", "BKK", "SQ", &[(Economy, 150)]),
                direct("RT-1-RET", "BKK", "SIN", "TG", &[(Economy, 140)]),
                &[(Economy, 280)],
            ),
            round_trip(
                "RT-2",
                direct("RT-2-OUT", "SIN", "BKK", "SQ", &[(Economy, 150)]),
                transit("RT-2-RET", "BKK", "KUL", "SIN", ("TG", "MH"), &[(Economy, 100)]),
                &[(Economy, 250)],
            ),
            round_trip(
                "RT-3",
                transit(
                    "RT-3-OUT",
                    "SIN",
                    "KUL",
                    "BKK",
                    ("TR", "MH"),
                    &[(Economy, 120), (Business, 700)],
                ),
                transit(
                    "RT-3-RET",
                    "BKK",
                    "KUL",
                    "SIN",
                    ("MH", "TR"),
                    &[(Economy, 120), (Business, 800)],
                ),
                &[(Economy, 240), (Business, 1500)],
            ),
            round_trip(
                "RT-4",
                direct("RT-4-OUT", "CGK", "NRT", "GA", &[(Economy, 400)]),
                direct("RT-4-RET", "NRT", "CGK", "JL", &[(Business, 1900)]),
                &[(Economy, 800)],
            ),
            round_trip(
                "RT-5",
                direct("RT-5-OUT", "SIN", "BKK", "TG", &[(Economy, 130)]),
                direct("RT-5-RET", "BKK", "SIN", "TG", &[(Economy, 130)]),
                &[],
            ),
        ],
        airlines: vec![
            AirlineFixture {
                code: "SQ".to_string(),
                name: "Singapore Airlines".to_string(),
                hub: Some("SIN".to_string()),
                fleet: vec!["Airbus A350-900".to_string(), "Boeing 737-800".to_string()],
            },
            AirlineFixture {
                code: "TG".to_string(),
                name: "Thai Airways".to_string(),
                hub: Some("BKK".to_string()),
                fleet: vec!["Airbus A320".to_string()],
            },
        ],
    }
}
