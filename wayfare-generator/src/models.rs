use serde::{Deserialize, Serialize};
use wayfare_core::schedule::DepartureBias;
use wayfare_core::{SearchResults, TripType};
use wayfare_shared::CabinClass;

/// Batch generation request. Unset knobs fall back to the generator config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerationRequest {
    #[serde(default)]
    pub from: Vec<String>,
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default)]
    pub trip_type: TripType,
    #[serde(default)]
    pub cabin_class: CabinClass,
    #[serde(default)]
    pub count: Option<usize>,
    /// 0..1
    #[serde(default)]
    pub demand: Option<f64>,
    #[serde(default)]
    pub load_factor: Option<f64>,
    #[serde(default)]
    pub depart_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
}

impl GenerationRequest {
    pub fn new(from: &[&str], to: &[&str], trip_type: TripType, count: usize) -> Self {
        Self {
            from: from.iter().map(|s| s.to_string()).collect(),
            to: to.iter().map(|s| s.to_string()).collect(),
            trip_type,
            count: Some(count),
            ..Default::default()
        }
    }
}

/// Per-flight knobs
#[derive(Debug, Clone, PartialEq)]
pub struct FlightOptions {
    pub id: String,
    pub demand: f64,
    pub load_factor: f64,
    pub bias: DepartureBias,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFlights {
    /// Routes cycled to fill the batch, in order
    pub routes: Vec<(String, String)>,
    #[serde(flatten)]
    pub flights: SearchResults,
}

impl GeneratedFlights {
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}
