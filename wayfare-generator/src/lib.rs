pub mod models;
pub mod rules;
pub mod generator;

pub use models::{FlightOptions, GeneratedFlights, GenerationRequest};
pub use rules::{Amenities, AmenityContext, AmenityEngine};
pub use generator::{candidate_routes, ProceduralFlightGenerator};
