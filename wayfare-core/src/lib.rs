pub mod dates;
pub mod index;
pub mod repository;
pub mod schedule;
pub mod search;

#[cfg(test)]
mod testing;

pub use index::{AirportIndex, ResolvedAirport};
pub use repository::FixtureRepository;
pub use search::{FlightSearchParams, FlightSearchService, SearchResults, TripType};

use wayfare_shared::CabinClass;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown cabin class: {0}")]
    InvalidCabinClass(String),
    #[error("Unknown trip type: {0}")]
    InvalidTripType(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Strict cabin class parsing for request and config boundaries.
pub fn parse_cabin_class(name: &str) -> CoreResult<CabinClass> {
    CabinClass::from_name(name).ok_or_else(|| CoreError::InvalidCabinClass(name.to_string()))
}
