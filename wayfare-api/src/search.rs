use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wayfare_core::dates::{display_date, parse_travel_date};
use wayfare_core::{parse_cabin_class, CoreError, FlightSearchParams, SearchResults, TripType};
use wayfare_generator::{GeneratedFlights, GenerationRequest};
use wayfare_shared::models::events::{FlightsGeneratedEvent, SearchPerformedEvent};
use wayfare_shared::CabinClass;

use crate::airports::normalize_code;
use crate::error::AppError;
use crate::state::AppState;

pub const SOURCE_FIXTURE: &str = "fixture";
pub const SOURCE_GENERATED: &str = "generated";

/// Upper bound for a single generate call
pub const MAX_GENERATED: usize = 100;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/flights/generate", post(generate_flights))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchFlightsRequest {
    /// Codes, each entry may itself be a comma separated list
    #[serde(default)]
    pub from: Vec<String>,
    #[serde(default)]
    pub to: Vec<String>,
    pub depart_date: Option<String>,
    pub return_date: Option<String>,
    pub passengers: Option<u32>,
    pub cabin_class: Option<String>,
    pub trip_type: Option<String>,
    pub direct: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_id: Uuid,
    pub source: &'static str,
    pub depart_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depart_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub passengers: u32,
    pub cabin_class: CabinClass,
    pub count: usize,
    #[serde(flatten)]
    pub results: SearchResults,
}

#[derive(Debug, Deserialize)]
pub struct GenerateFlightsRequest {
    #[serde(default)]
    pub from: Vec<String>,
    #[serde(default)]
    pub to: Vec<String>,
    pub trip_type: Option<String>,
    pub cabin_class: Option<String>,
    pub count: Option<usize>,
    pub demand: Option<f64>,
    pub load_factor: Option<f64>,
    pub depart_date: Option<String>,
    pub return_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub request_id: Uuid,
    pub depart_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub count: usize,
    #[serde(flatten)]
    pub generated: GeneratedFlights,
}

fn split_codes(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(normalize_code)
        .filter(|code| !code.is_empty())
        .collect()
}

fn parse_trip_type(trip_type: Option<&str>) -> Result<TripType, CoreError> {
    trip_type.map_or(Ok(TripType::default()), |s| s.parse())
}

fn parse_class(cabin_class: Option<&str>) -> Result<CabinClass, CoreError> {
    cabin_class.map_or(Ok(CabinClass::default()), parse_cabin_class)
}

impl SearchFlightsRequest {
    pub fn into_params(self) -> Result<FlightSearchParams, CoreError> {
        let mut params = FlightSearchParams::new(&[], &[]);
        params.from = split_codes(&self.from);
        params.to = split_codes(&self.to);
        params.cabin_class = parse_class(self.cabin_class.as_deref())?;
        params.trip_type = parse_trip_type(self.trip_type.as_deref())?;
        params.direct = self.direct;
        params.depart_date = self.depart_date;
        params.return_date = self.return_date;
        if let Some(passengers) = self.passengers {
            params.passengers = passengers.max(1);
        }
        Ok(params)
    }
}

fn log_event<T: Serialize>(name: &str, event: &T) {
    match serde_json::to_string(event) {
        Ok(json) => tracing::info!("{} {}", name, json),
        Err(e) => tracing::warn!("Failed to serialize {}: {}", name, e),
    }
}

fn return_display(trip_type: TripType, return_date: Option<&str>) -> Option<String> {
    match trip_type {
        TripType::RoundTrip => Some(display_date(return_date)),
        TripType::OneWay => None,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/flights/search
/// Fixture flights for the requested routes, or generated supply when the
/// fixtures have none and the fallback is enabled.
pub async fn search_flights(
    State(state): State<AppState>,
    Json(req): Json<SearchFlightsRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let params = req.into_params()?;
    let mut rng = StdRng::from_entropy();

    let mut results = state.search.search(&params, &mut rng);
    let mut source = SOURCE_FIXTURE;

    if results.is_empty()
        && state.search_config.fallback_to_generator
        && !params.from.is_empty()
        && !params.to.is_empty()
    {
        let request = GenerationRequest {
            from: params.from.clone(),
            to: params.to.clone(),
            trip_type: params.trip_type,
            cabin_class: params.cabin_class,
            depart_date: params.depart_date.clone(),
            return_date: params.return_date.clone(),
            ..Default::default()
        };
        results = state.generator.generate_flights(&request, &mut rng).flights;
        source = SOURCE_GENERATED;
        tracing::debug!("No fixture flights, served {} generated", results.len());
    }

    let event = SearchPerformedEvent::new(
        params.from.clone(),
        params.to.clone(),
        params.cabin_class,
        params.trip_type.as_str(),
        results.len(),
        source,
    );
    log_event("SearchPerformed", &event);

    Ok(Json(SearchResponse {
        search_id: event.search_id,
        source,
        depart_date: display_date(params.depart_date.as_deref()),
        depart_on: params.depart_date.as_deref().map(parse_travel_date),
        return_date: return_display(params.trip_type, params.return_date.as_deref()),
        passengers: params.passengers,
        cabin_class: params.cabin_class,
        count: results.len(),
        results,
    }))
}

/// POST /v1/flights/generate
pub async fn generate_flights(
    State(state): State<AppState>,
    Json(req): Json<GenerateFlightsRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let count = req.count.unwrap_or(state.generator.config().default_count);
    if count > MAX_GENERATED {
        return Err(AppError::ValidationError(format!(
            "count must be at most {}",
            MAX_GENERATED
        )));
    }

    let trip_type = parse_trip_type(req.trip_type.as_deref())?;
    let request = GenerationRequest {
        from: split_codes(&req.from),
        to: split_codes(&req.to),
        trip_type,
        cabin_class: parse_class(req.cabin_class.as_deref())?,
        count: Some(count),
        demand: req.demand,
        load_factor: req.load_factor,
        depart_date: req.depart_date,
        return_date: req.return_date,
    };

    let mut rng = StdRng::from_entropy();
    let generated = state.generator.generate_flights(&request, &mut rng);

    let event = FlightsGeneratedEvent::new(generated.routes.clone(), count, generated.len());
    log_event("FlightsGenerated", &event);

    Ok(Json(GenerateResponse {
        request_id: event.request_id,
        depart_date: display_date(request.depart_date.as_deref()),
        return_date: return_display(trip_type, request.return_date.as_deref()),
        count: generated.len(),
        generated,
    }))
}
