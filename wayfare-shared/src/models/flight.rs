use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::airport::AirportSummary;

/// Cabin classes in ascending order of service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::First,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium_economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }

    /// Lenient lookup used for query strings and config values.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "economy" => Some(CabinClass::Economy),
            "premium_economy" | "premium" => Some(CabinClass::PremiumEconomy),
            "business" => Some(CabinClass::Business),
            "first" => Some(CabinClass::First),
            _ => None,
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FlightType {
    Direct,
    Transit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AirlineRef {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Route {
    pub from: AirportSummary,
    pub to: AirportSummary,
}

/// One directional leg of a transit itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightSegment {
    pub airline: AirlineRef,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub aircraft: String,
    /// Connection wait after this segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layover: Option<String>,
}

/// Who operates the itinerary. A direct flight carries its airline at the top
/// level, a transit itinerary carries its segments instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "flight_type", rename_all = "snake_case")]
pub enum FlightService {
    Direct {
        airline: AirlineRef,
        flight_number: String,
        aircraft: String,
    },
    Transit {
        segments: Vec<FlightSegment>,
    },
}

impl FlightService {
    pub fn flight_type(&self) -> FlightType {
        match self {
            FlightService::Direct { .. } => FlightType::Direct,
            FlightService::Transit { .. } => FlightType::Transit,
        }
    }
}

/// A priced, bookable itinerary in one direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightResult {
    pub id: String,
    pub route: Route,
    #[serde(flatten)]
    pub service: FlightService,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: i32,
    pub available_seats: u32,
    pub baggage: String,
    pub meal: String,
    pub entertainment: String,
    pub cabin_class: CabinClass,
}

impl FlightResult {
    pub fn flight_type(&self) -> FlightType {
        self.service.flight_type()
    }

    pub fn is_direct(&self) -> bool {
        self.flight_type() == FlightType::Direct
    }

    pub fn segments(&self) -> &[FlightSegment] {
        match &self.service {
            FlightService::Direct { .. } => &[],
            FlightService::Transit { segments } => segments,
        }
    }

    /// Every operating airline code, top level first.
    pub fn airline_codes(&self) -> Vec<&str> {
        match &self.service {
            FlightService::Direct { airline, .. } => vec![airline.code.as_str()],
            FlightService::Transit { segments } => {
                segments.iter().map(|s| s.airline.code.as_str()).collect()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundTripFlightResult {
    pub id: String,
    pub outbound: FlightResult,
    #[serde(rename = "return")]
    pub return_flight: FlightResult,
    pub cabin_class: CabinClass,
    pub total_price: i32,
}
