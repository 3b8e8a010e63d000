pub mod models;

pub use models::airport::{Airport, AirportSummary, Country, RouteAvailability};
pub use models::flight::{
    AirlineRef, CabinClass, FlightResult, FlightSegment, FlightService, FlightType,
    RoundTripFlightResult, Route,
};
pub use models::fixture::{
    AirlineFixture, AirportFixture, ClassFare, CountryFixture, FixtureFlight, FixtureRoundTrip,
    FixtureSegment, FixtureSet,
};
