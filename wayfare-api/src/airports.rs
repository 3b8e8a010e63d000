use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use wayfare_shared::{Airport, Country, RouteAvailability};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/airports/search", get(search_airports))
        .route("/v1/airports/{code}", get(get_airport))
        .route("/v1/airports/{code}/destinations", get(destinations))
        .route("/v1/airports/{code}/origins", get(origins))
        .route("/v1/routes/popular", get(popular_routes))
        .route("/v1/routes/availability", get(route_availability))
}

pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[derive(Debug, Deserialize)]
pub struct AirportSearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub from: String,
    pub to: String,
    pub available: bool,
    pub flight_count: u32,
    pub airlines: Vec<String>,
}

/// GET /v1/airports/search?q=
pub async fn search_airports(
    State(state): State<AppState>,
    Query(query): Query<AirportSearchQuery>,
) -> Json<Vec<Country>> {
    Json(state.index.search_airports(&query.q))
}

/// GET /v1/airports/{code}
pub async fn get_airport(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Airport>, AppError> {
    let code = normalize_code(&code);
    state
        .index
        .get_airport_by_code(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Airport {} not found", code)))
}

/// GET /v1/airports/{code}/destinations
pub async fn destinations(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<Vec<RouteAvailability>> {
    let code = normalize_code(&code);
    Json(state.index.available_destinations(&code).into_iter().cloned().collect())
}

/// GET /v1/airports/{code}/origins
pub async fn origins(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<Vec<RouteAvailability>> {
    let code = normalize_code(&code);
    Json(state.index.available_origins(&code).into_iter().cloned().collect())
}

/// GET /v1/routes/popular
pub async fn popular_routes(State(state): State<AppState>) -> Json<Vec<RouteAvailability>> {
    Json(state.index.popular_routes().into_iter().cloned().collect())
}

/// GET /v1/routes/availability?from=&to=
pub async fn route_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<AvailabilityResponse> {
    let from = normalize_code(&query.from);
    let to = normalize_code(&query.to);

    let response = match state.index.route(&from, &to) {
        Some(route) => AvailabilityResponse {
            from,
            to,
            available: route.available,
            flight_count: route.flight_count,
            airlines: route.airlines.clone(),
        },
        None => AvailabilityResponse {
            from,
            to,
            available: false,
            flight_count: 0,
            airlines: Vec::new(),
        },
    };
    Json(response)
}
