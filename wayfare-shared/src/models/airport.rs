use serde::{Deserialize, Serialize};

/// An airport as exposed to pickers and search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub country_code: String,
}

impl Airport {
    /// Minimal record for a code that no fixture knows about.
    pub fn fallback(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: code.to_string(),
            city: code.to_string(),
            country: "Unknown".to_string(),
            country_code: String::new(),
        }
    }

    pub fn summary(&self) -> AirportSummary {
        AirportSummary {
            code: self.code.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
        }
    }
}

/// A country with its airports, in fixture order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub airports: Vec<Airport>,
    /// Only meaningful to pickers
    #[serde(default)]
    pub selected: bool,
}

/// Route endpoint as carried on flight records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AirportSummary {
    pub code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

/// Directional availability entry of the route index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteAvailability {
    pub from: String,
    pub to: String,
    pub flight_count: u32,
    /// Airline codes in first-seen order, no duplicates
    pub airlines: Vec<String>,
    pub available: bool,
}

impl RouteAvailability {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            flight_count: 0,
            airlines: Vec::new(),
            available: true,
        }
    }

    pub fn add_airlines<'a, I>(&mut self, codes: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for code in codes {
            if !code.is_empty() && !self.airlines.iter().any(|c| c == code) {
                self.airlines.push(code.to_string());
            }
        }
    }
}
