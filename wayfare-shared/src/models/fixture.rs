//! Static fixture schema. Records are read once at startup and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::flight::{AirlineRef, CabinClass, FlightType, Route};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryFixture {
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub airports: Vec<AirportFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AirportFixture {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AirlineFixture {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub hub: Option<String>,
    #[serde(default)]
    pub fleet: Vec<String>,
}

/// Fare block for a single cabin class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassFare {
    pub price: i32,
    #[serde(default)]
    pub available_seats: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureSegment {
    pub airline: AirlineRef,
    #[serde(default)]
    pub flight_number: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub aircraft: String,
    #[serde(default)]
    pub layover: Option<String>,
}

/// One-way fixture flight. Also used for the legs of a round-trip record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureFlight {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub route: Route,
    pub flight_type: FlightType,
    #[serde(default)]
    pub airline: Option<AirlineRef>,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub aircraft: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub segments: Vec<FixtureSegment>,
    #[serde(default)]
    pub pricing: BTreeMap<CabinClass, ClassFare>,
    #[serde(default)]
    pub baggage: String,
    #[serde(default)]
    pub meal: String,
    #[serde(default)]
    pub entertainment: String,
}

impl FixtureFlight {
    pub fn fare(&self, class: CabinClass) -> Option<&ClassFare> {
        self.pricing.get(&class)
    }

    pub fn is_direct(&self) -> bool {
        self.flight_type == FlightType::Direct
    }

    /// Top-level airline followed by segment airlines.
    pub fn airline_codes(&self) -> impl Iterator<Item = &str> {
        self.airline
            .iter()
            .map(|a| a.code.as_str())
            .chain(self.segments.iter().map(|s| s.airline.code.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureRoundTrip {
    pub id: String,
    pub route: Route,
    pub outbound: FixtureFlight,
    #[serde(rename = "return")]
    pub return_flight: FixtureFlight,
    /// Precomputed pair totals keyed by class
    #[serde(default)]
    pub total_price_range: BTreeMap<CabinClass, i32>,
}

impl FixtureRoundTrip {
    pub fn airline_codes(&self) -> impl Iterator<Item = &str> {
        self.outbound
            .airline_codes()
            .chain(self.return_flight.airline_codes())
    }
}

/// Everything the services are built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureSet {
    #[serde(default)]
    pub countries: Vec<CountryFixture>,
    #[serde(default)]
    pub one_way: Vec<FixtureFlight>,
    #[serde(default)]
    pub round_trip: Vec<FixtureRoundTrip>,
    #[serde(default)]
    pub airlines: Vec<AirlineFixture>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_flight_deserialization() {
        let json = r#"
            {
                "id": "FL-001",
                "route": {
                    "from": { "code": "CGK", "city": "Jakarta", "country": "Indonesia" },
                    "to": { "code": "SIN", "city": "Singapore", "country": "Singapore" }
                },
                "flight_type": "transit",
                "duration": "4h 10m",
                "segments": [
                    {
                        "airline": { "code": "GA", "name": "Garuda Indonesia" },
                        "from": "CGK",
                        "to": "KUL"
                    },
                    {
                        "airline": { "code": "MH", "name": "Malaysia Airlines" },
                        "from": "KUL",
                        "to": "SIN"
                    }
                ],
                "pricing": {
                    "economy": { "price": 120, "available_seats": 9 },
                    "business": { "price": 480 }
                },
                "unknown_field": true
            }
        "#;
        let flight: FixtureFlight = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(!flight.is_direct());
        assert_eq!(flight.fare(CabinClass::Economy).map(|f| f.price), Some(120));
        assert_eq!(flight.fare(CabinClass::Business).map(|f| f.available_seats), Some(0));
        assert!(flight.fare(CabinClass::First).is_none());
        assert_eq!(flight.airline_codes().collect::<Vec<_>>(), vec!["GA", "MH"]);
    }
}
