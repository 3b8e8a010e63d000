use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

use wayfare_catalog::{
    aircraft_spec, route_distance_km, AirlineData, AirlineDirectory, InventoryManager,
    PricingContext, PricingEngine,
};
use wayfare_core::schedule::{self, DepartureBias};
use wayfare_core::{AirportIndex, ResolvedAirport, SearchResults, TripType};
use wayfare_shared::{
    AirportSummary, CabinClass, FlightResult, FlightSegment, FlightService, RoundTripFlightResult,
    Route,
};
use wayfare_store::GeneratorConfig;

use crate::models::{FlightOptions, GeneratedFlights, GenerationRequest};
use crate::rules::{AmenityContext, AmenityEngine};

/// Used when a request yields no usable route at all.
pub const FALLBACK_ROUTE: (&str, &str) = ("SIN", "BKK");

const MIN_FLIGHT_MINUTES: f64 = 30.0;
const KM_PER_MINUTE: f64 = 8.5;

/// Unique `from × to` pairs in request order, skipping self pairs and blank
/// codes. Never empty.
pub fn candidate_routes(from: &[String], to: &[String]) -> Vec<(String, String)> {
    let mut routes: Vec<(String, String)> = Vec::new();
    for origin in from.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        for destination in to.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            if origin == destination {
                continue;
            }
            let pair = (origin.to_string(), destination.to_string());
            if !routes.contains(&pair) {
                routes.push(pair);
            }
        }
    }

    if routes.is_empty() {
        tracing::warn!(
            "No usable route in request, falling back to {}-{}",
            FALLBACK_ROUTE.0,
            FALLBACK_ROUTE.1
        );
        routes.push((FALLBACK_ROUTE.0.to_string(), FALLBACK_ROUTE.1.to_string()));
    }
    routes
}

fn probability(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Airline, flight number and aircraft for one flown sector
struct Sector<'a> {
    airline: &'a AirlineData,
    flight_number: String,
    aircraft: String,
}

/// Synthesizes plausible flights for arbitrary routes.
pub struct ProceduralFlightGenerator {
    index: Arc<AirportIndex>,
    airlines: AirlineDirectory,
    pricing: PricingEngine,
    amenities: AmenityEngine,
    config: GeneratorConfig,
}

impl ProceduralFlightGenerator {
    pub fn new(
        index: Arc<AirportIndex>,
        airlines: AirlineDirectory,
        pricing: PricingEngine,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            index,
            airlines,
            pricing,
            amenities: AmenityEngine::default(),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Options carrying the configured demand and load factor.
    pub fn options(&self, id: impl Into<String>) -> FlightOptions {
        FlightOptions {
            id: id.into(),
            demand: self.config.demand,
            load_factor: self.config.load_factor,
            bias: DepartureBias::Outbound,
        }
    }

    fn summary(&self, code: &str) -> AirportSummary {
        let resolved = self.index.resolve_airport(code);
        if let ResolvedAirport::Fallback(_) = &resolved {
            tracing::warn!("Unknown airport {}, using placeholder details", code);
        }
        resolved.airport().summary()
    }

    /// `distance / 8.5` minutes, plus connection time for transit, plus
    /// jitter. Never under half an hour.
    fn flight_minutes<R: Rng + ?Sized>(
        &self,
        distance_km: u32,
        transit: bool,
        rng: &mut R,
    ) -> u32 {
        let mut minutes = distance_km as f64 / KM_PER_MINUTE;
        if transit {
            minutes += rng.gen_range(60..=180) as f64;
        }
        minutes += rng.gen_range(-15..=15) as f64;
        minutes.round().max(MIN_FLIGHT_MINUTES) as u32
    }

    fn sector<'a, R: Rng + ?Sized>(
        &self,
        airline: &'a AirlineData,
        from: &str,
        to: &str,
        rng: &mut R,
    ) -> Sector<'a> {
        let distance = route_distance_km(from, to);
        Sector {
            airline,
            flight_number: format!("{} {}", airline.code, rng.gen_range(100..=999)),
            aircraft: airline.select_aircraft(distance, rng).to_string(),
        }
    }

    fn connection_hub<R: Rng + ?Sized>(
        &self,
        from: &str,
        to: &str,
        rng: &mut R,
    ) -> Option<String> {
        let away: Vec<&String> = self
            .config
            .hubs
            .iter()
            .filter(|hub| hub.as_str() != from && hub.as_str() != to)
            .collect();
        let pool: Vec<&String> = if away.is_empty() {
            self.config.hubs.iter().collect()
        } else {
            away
        };
        pool.choose(rng).map(|hub| hub.to_string())
    }

    /// Layover between 1 and 5 hours in 10 minute steps.
    fn layover_minutes<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(6..=30) * 10
    }

    /// Two sectors through `hub`, each timed from its own distance. The clock
    /// times chain from `departure` and are not tied to the itinerary's
    /// distance-based duration.
    fn transit_segments<R: Rng + ?Sized>(
        &self,
        airline: &AirlineData,
        from: &str,
        hub: &str,
        to: &str,
        departure: &str,
        rng: &mut R,
    ) -> Vec<FlightSegment> {
        let first = self.sector(airline, from, hub, rng);
        let first_minutes = self.flight_minutes(route_distance_km(from, hub), false, rng);

        let switch = rng.gen_bool(probability(self.config.airline_switch_probability));
        let second_airline = if switch {
            self.airlines.pick_other(&airline.code, rng).unwrap_or(airline)
        } else {
            airline
        };
        let second = self.sector(second_airline, hub, to, rng);
        let second_minutes = self.flight_minutes(route_distance_km(hub, to), false, rng);

        let layover = self.layover_minutes(rng);
        let first_arrival = schedule::add_minutes(departure, first_minutes);
        let second_departure = schedule::add_minutes(&first_arrival, layover);
        let second_arrival = schedule::add_minutes(&second_departure, second_minutes);

        vec![
            FlightSegment {
                airline: first.airline.reference(),
                flight_number: first.flight_number,
                from: from.to_string(),
                to: hub.to_string(),
                departure_time: departure.to_string(),
                arrival_time: first_arrival,
                duration: schedule::format_duration(first_minutes),
                aircraft: first.aircraft,
                layover: Some(schedule::format_duration(layover)),
            },
            FlightSegment {
                airline: second.airline.reference(),
                flight_number: second.flight_number,
                from: hub.to_string(),
                to: to.to_string(),
                departure_time: second_departure,
                arrival_time: second_arrival,
                duration: schedule::format_duration(second_minutes),
                aircraft: second.aircraft,
                layover: None,
            },
        ]
    }

    pub fn generate_one_way<R: Rng + ?Sized>(
        &self,
        from: &str,
        to: &str,
        class: CabinClass,
        options: &FlightOptions,
        rng: &mut R,
    ) -> FlightResult {
        let route = Route {
            from: self.summary(from),
            to: self.summary(to),
        };
        let airline = self.airlines.pick_for_route(from, to, rng);
        let distance = route_distance_km(from, to);
        let inventory = InventoryManager::new(options.load_factor);

        let direct = rng.gen_bool(probability(self.config.direct_probability));
        let hub = if direct {
            None
        } else {
            self.connection_hub(from, to, rng)
        };
        let transit = hub.is_some();
        let departure = schedule::random_departure_time(rng, options.bias);

        let (service, lead_aircraft, available_seats) = match hub {
            None => {
                let sector = self.sector(airline, from, to, rng);
                let seats =
                    inventory.available_seats(aircraft_spec(&sector.aircraft), class, rng);
                let aircraft = sector.aircraft.clone();
                let service = FlightService::Direct {
                    airline: sector.airline.reference(),
                    flight_number: sector.flight_number,
                    aircraft: sector.aircraft,
                };
                (service, aircraft, seats)
            }
            Some(hub) => {
                let segments = self.transit_segments(airline, from, &hub, to, &departure, rng);
                // Bookable through only as far as the tightest sector allows
                let seats = segments
                    .iter()
                    .map(|segment| {
                        inventory.available_seats(aircraft_spec(&segment.aircraft), class, rng)
                    })
                    .min()
                    .unwrap_or(0);
                let aircraft = segments
                    .first()
                    .map(|segment| segment.aircraft.clone())
                    .unwrap_or_default();
                (FlightService::Transit { segments }, aircraft, seats)
            }
        };

        // Itinerary timing comes from the route distance alone, transit included
        let minutes = self.flight_minutes(distance, transit, rng);
        let price = self.pricing.price(
            &PricingContext {
                distance_km: distance,
                cabin_class: class,
                airline_multiplier: airline.price_multiplier,
                quality_score: airline.quality_score,
                demand: options.demand,
            },
            rng,
        );
        let amenities = self.amenities.evaluate(&AmenityContext {
            cabin_class: class,
            quality_score: airline.quality_score,
            wide_body: aircraft_spec(&lead_aircraft).is_some_and(|spec| spec.wide_body),
        });

        FlightResult {
            id: options.id.clone(),
            route,
            service,
            arrival_time: schedule::add_minutes(&departure, minutes),
            departure_time: departure,
            duration: schedule::format_duration(minutes),
            price,
            available_seats,
            baggage: amenities.baggage,
            meal: amenities.meal,
            entertainment: amenities.entertainment,
            cabin_class: class,
        }
    }

    /// Independent outbound and return legs. The pair total is the leg sum.
    pub fn generate_round_trip<R: Rng + ?Sized>(
        &self,
        from: &str,
        to: &str,
        class: CabinClass,
        options: &FlightOptions,
        rng: &mut R,
    ) -> RoundTripFlightResult {
        let outbound_options = FlightOptions {
            id: format!("{}-OUT", options.id),
            bias: DepartureBias::Outbound,
            ..options.clone()
        };
        let return_options = FlightOptions {
            id: format!("{}-RET", options.id),
            bias: DepartureBias::Return,
            ..options.clone()
        };

        let outbound = self.generate_one_way(from, to, class, &outbound_options, rng);
        let return_flight = self.generate_one_way(to, from, class, &return_options, rng);
        let total_price = outbound.price.saturating_add(return_flight.price);

        RoundTripFlightResult {
            id: options.id.clone(),
            outbound,
            return_flight,
            cabin_class: class,
            total_price,
        }
    }

    /// Exactly `count` flights, cycling through the candidate routes.
    pub fn generate_flights<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> GeneratedFlights {
        let routes = candidate_routes(&request.from, &request.to);
        let count = request.count.unwrap_or(self.config.default_count);
        let class = request.cabin_class;

        let options = |id: String| FlightOptions {
            demand: request.demand.unwrap_or(self.config.demand),
            load_factor: request.load_factor.unwrap_or(self.config.load_factor),
            ..self.options(id)
        };

        let flights = match request.trip_type {
            TripType::OneWay => SearchResults::OneWay(
                (0..count)
                    .map(|i| {
                        let (from, to) = &routes[i % routes.len()];
                        let options = options(format!("OW{:03}", i + 1));
                        self.generate_one_way(from, to, class, &options, rng)
                    })
                    .collect(),
            ),
            TripType::RoundTrip => SearchResults::RoundTrip(
                (0..count)
                    .map(|i| {
                        let (from, to) = &routes[i % routes.len()];
                        let options = options(format!("RT{:03}", i + 1));
                        self.generate_round_trip(from, to, class, &options, rng)
                    })
                    .collect(),
            ),
        };

        tracing::debug!(
            "Generated {} {} flights over {} routes",
            flights.len(),
            request.trip_type.as_str(),
            routes.len()
        );

        GeneratedFlights { routes, flights }
    }
}
