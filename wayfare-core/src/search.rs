use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use wayfare_shared::{
    CabinClass, ClassFare, FixtureFlight, FixtureRoundTrip, FixtureSet, FlightResult,
    FlightSegment, FlightService, FlightType, RoundTripFlightResult, Route,
};

use crate::index::AirportIndex;
use crate::schedule::{self, DepartureBias};
use crate::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    #[serde(rename = "oneway")]
    OneWay,
    #[serde(rename = "roundtrip")]
    RoundTrip,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::OneWay => "oneway",
            TripType::RoundTrip => "roundtrip",
        }
    }
}

impl FromStr for TripType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "oneway" => Ok(TripType::OneWay),
            "roundtrip" => Ok(TripType::RoundTrip),
            _ => Err(CoreError::InvalidTripType(s.to_string())),
        }
    }
}

fn default_passengers() -> u32 {
    1
}

/// Search request as built from the query string and form state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightSearchParams {
    pub from: Vec<String>,
    pub to: Vec<String>,
    /// Display only, never used for filtering
    #[serde(default)]
    pub depart_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default)]
    pub cabin_class: CabinClass,
    #[serde(default)]
    pub trip_type: TripType,
    #[serde(default)]
    pub direct: Option<bool>,
}

impl FlightSearchParams {
    pub fn new(from: &[&str], to: &[&str]) -> Self {
        Self {
            from: from.iter().map(|s| s.to_string()).collect(),
            to: to.iter().map(|s| s.to_string()).collect(),
            depart_date: None,
            return_date: None,
            passengers: default_passengers(),
            cabin_class: CabinClass::default(),
            trip_type: TripType::default(),
            direct: None,
        }
    }

    fn matches_route(&self, route: &Route) -> bool {
        self.from.iter().any(|f| *f == route.from.code)
            && self.to.iter().any(|t| *t == route.to.code)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "trip_type", content = "flights")]
pub enum SearchResults {
    #[serde(rename = "oneway")]
    OneWay(Vec<FlightResult>),
    #[serde(rename = "roundtrip")]
    RoundTrip(Vec<RoundTripFlightResult>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::OneWay(flights) => flights.len(),
            SearchResults::RoundTrip(trips) => trips.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filters and orders fixture flights. Never generates supply.
pub struct FlightSearchService {
    index: Arc<AirportIndex>,
    one_way: Vec<FixtureFlight>,
    round_trip: Vec<FixtureRoundTrip>,
}

impl FlightSearchService {
    pub fn new(index: Arc<AirportIndex>, fixtures: &FixtureSet) -> Self {
        Self {
            index,
            one_way: fixtures.one_way.clone(),
            round_trip: fixtures.round_trip.clone(),
        }
    }

    /// The single validation gate: at least one requested pair must be known
    /// to the route index.
    fn has_known_route(&self, params: &FlightSearchParams) -> bool {
        params.from.iter().any(|from| {
            params
                .to
                .iter()
                .any(|to| self.index.is_route_available(from, to))
        })
    }

    pub fn search<R: Rng + ?Sized>(
        &self,
        params: &FlightSearchParams,
        rng: &mut R,
    ) -> SearchResults {
        match params.trip_type {
            TripType::OneWay => SearchResults::OneWay(self.search_one_way_flights(params, rng)),
            TripType::RoundTrip => {
                SearchResults::RoundTrip(self.search_round_trip_flights(params, rng))
            }
        }
    }

    /// Matching one-way flights, cheapest first for the requested class.
    pub fn search_one_way_flights<R: Rng + ?Sized>(
        &self,
        params: &FlightSearchParams,
        rng: &mut R,
    ) -> Vec<FlightResult> {
        if !self.has_known_route(params) {
            tracing::debug!("No known route for {:?} -> {:?}", params.from, params.to);
            return Vec::new();
        }

        let class = params.cabin_class;
        let mut matches: Vec<(&FixtureFlight, &ClassFare)> = self
            .one_way
            .iter()
            .filter(|f| params.matches_route(&f.route))
            .filter(|f| params.direct.map_or(true, |direct| f.is_direct() == direct))
            .filter_map(|f| f.fare(class).map(|fare| (f, fare)))
            .collect();
        // Stable: equal prices keep fixture order
        matches.sort_by_key(|(_, fare)| fare.price);

        let results: Vec<FlightResult> = matches
            .into_iter()
            .map(|(flight, fare)| {
                let id = flight.id.clone();
                to_flight_result(flight, fare, class, id, DepartureBias::Outbound, rng)
            })
            .collect();

        tracing::debug!(
            "One-way search {:?} -> {:?} ({}) returned {} flights",
            params.from,
            params.to,
            class,
            results.len()
        );
        results
    }

    /// Matching round trips ordered by the precomputed pair total.
    pub fn search_round_trip_flights<R: Rng + ?Sized>(
        &self,
        params: &FlightSearchParams,
        rng: &mut R,
    ) -> Vec<RoundTripFlightResult> {
        if !self.has_known_route(params) {
            tracing::debug!("No known route for {:?} -> {:?}", params.from, params.to);
            return Vec::new();
        }

        let class = params.cabin_class;
        let mut matches: Vec<(&FixtureRoundTrip, &ClassFare, &ClassFare, i32)> = self
            .round_trip
            .iter()
            .filter(|t| params.matches_route(&t.route))
            .filter(|t| round_trip_direct_filter(t, params.direct))
            .filter_map(|t| {
                let outbound = t.outbound.fare(class)?;
                let inbound = t.return_flight.fare(class)?;
                let total = t
                    .total_price_range
                    .get(&class)
                    .copied()
                    .unwrap_or(outbound.price + inbound.price);
                Some((t, outbound, inbound, total))
            })
            .collect();
        matches.sort_by_key(|&(_, _, _, total)| total);

        let results: Vec<RoundTripFlightResult> = matches
            .into_iter()
            .map(|(trip, out_fare, ret_fare, total)| RoundTripFlightResult {
                id: trip.id.clone(),
                outbound: to_flight_result(
                    &trip.outbound,
                    out_fare,
                    class,
                    leg_id(&trip.outbound, &trip.id, "OUT"),
                    DepartureBias::Outbound,
                    rng,
                ),
                return_flight: to_flight_result(
                    &trip.return_flight,
                    ret_fare,
                    class,
                    leg_id(&trip.return_flight, &trip.id, "RET"),
                    DepartureBias::Return,
                    rng,
                ),
                cabin_class: class,
                total_price: total,
            })
            .collect();

        tracing::debug!(
            "Round-trip search {:?} <-> {:?} ({}) returned {} pairs",
            params.from,
            params.to,
            class,
            results.len()
        );
        results
    }
}

/// `direct = true` wants both legs direct. `direct = false` only rejects
/// pairs where both legs are direct, so a single transit leg qualifies.
fn round_trip_direct_filter(trip: &FixtureRoundTrip, direct: Option<bool>) -> bool {
    let both_direct = trip.outbound.is_direct() && trip.return_flight.is_direct();
    match direct {
        None => true,
        Some(true) => both_direct,
        Some(false) => !both_direct,
    }
}

fn leg_id(leg: &FixtureFlight, trip_id: &str, suffix: &str) -> String {
    if leg.id.is_empty() {
        format!("{}-{}", trip_id, suffix)
    } else {
        leg.id.clone()
    }
}

fn to_flight_result<R: Rng + ?Sized>(
    flight: &FixtureFlight,
    fare: &ClassFare,
    class: CabinClass,
    id: String,
    bias: DepartureBias,
    rng: &mut R,
) -> FlightResult {
    let departure = schedule::random_departure_time(rng, bias);

    let service = match flight.flight_type {
        FlightType::Direct => FlightService::Direct {
            airline: flight.airline.clone().unwrap_or_default(),
            flight_number: flight.flight_number.clone().unwrap_or_default(),
            aircraft: flight.aircraft.clone().unwrap_or_default(),
        },
        FlightType::Transit => {
            if flight.segments.len() < 2 {
                tracing::warn!(
                    "Transit fixture {} has {} segments",
                    flight.id,
                    flight.segments.len()
                );
            }
            FlightService::Transit {
                segments: chain_segments(flight, &departure),
            }
        }
    };

    let minutes = schedule::parse_duration(&flight.duration).or_else(|| segment_minutes(flight));
    let (duration, arrival) = match minutes {
        Some(m) => (schedule::format_duration(m), schedule::add_minutes(&departure, m)),
        None => (flight.duration.clone(), departure.clone()),
    };

    FlightResult {
        id,
        route: flight.route.clone(),
        service,
        departure_time: departure,
        arrival_time: arrival,
        duration,
        price: fare.price,
        available_seats: fare.available_seats,
        baggage: flight.baggage.clone(),
        meal: flight.meal.clone(),
        entertainment: flight.entertainment.clone(),
        cabin_class: class,
    }
}

/// Segment clock times follow one another, each connection waiting out the
/// previous segment's layover.
fn chain_segments(flight: &FixtureFlight, departure: &str) -> Vec<FlightSegment> {
    let mut cursor = departure.to_string();
    flight
        .segments
        .iter()
        .map(|seg| {
            let flying = schedule::parse_duration(&seg.duration).unwrap_or(0);
            let arrival = schedule::add_minutes(&cursor, flying);
            let waiting = seg
                .layover
                .as_deref()
                .and_then(schedule::parse_duration)
                .unwrap_or(0);
            let segment = FlightSegment {
                airline: seg.airline.clone(),
                flight_number: seg.flight_number.clone(),
                from: seg.from.clone(),
                to: seg.to.clone(),
                departure_time: cursor.clone(),
                arrival_time: arrival.clone(),
                duration: seg.duration.clone(),
                aircraft: seg.aircraft.clone(),
                layover: seg.layover.clone(),
            };
            cursor = schedule::add_minutes(&arrival, waiting);
            segment
        })
        .collect()
}

fn segment_minutes(flight: &FixtureFlight) -> Option<u32> {
    if flight.segments.is_empty() {
        return None;
    }
    Some(
        flight
            .segments
            .iter()
            .map(|s| {
                schedule::parse_duration(&s.duration).unwrap_or(0)
                    + s.layover.as_deref().and_then(schedule::parse_duration).unwrap_or(0)
            })
            .sum(),
    )
}
