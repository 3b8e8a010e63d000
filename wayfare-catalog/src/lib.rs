pub mod aircraft;
pub mod airline;
pub mod distance;
pub mod pricing;
pub mod inventory;

pub use aircraft::{aircraft_spec, AircraftSpec, ClassSeats};
pub use airline::{AirlineData, AirlineDirectory};
pub use distance::{route_distance_km, DEFAULT_DISTANCE_KM};
pub use pricing::{ClassRates, PricingConfig, PricingContext, PricingEngine};
pub use inventory::InventoryManager;
