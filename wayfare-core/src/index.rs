use std::collections::HashMap;

use wayfare_shared::{Airport, Country, CountryFixture, FixtureSet, RouteAvailability};

const MIN_QUERY_CHARS: usize = 2;
const POPULAR_ROUTE_LIMIT: usize = 10;

/// Outcome of resolving an airport code. Lets strict callers tell a real
/// airport from a synthesized stand-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAirport {
    Known(Airport),
    Fallback(Airport),
}

impl ResolvedAirport {
    pub fn airport(&self) -> &Airport {
        match self {
            ResolvedAirport::Known(a) | ResolvedAirport::Fallback(a) => a,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ResolvedAirport::Known(_))
    }
}

/// Airports grouped by country plus directional route availability, built
/// once from fixture data and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct AirportIndex {
    countries: Vec<CountryFixture>,
    airports: Vec<Airport>,
    by_code: HashMap<String, usize>,
    /// Fixture scan order
    routes: Vec<RouteAvailability>,
    positions: HashMap<String, HashMap<String, usize>>,
}

impl AirportIndex {
    pub fn build(fixtures: &FixtureSet) -> Self {
        let mut index = Self {
            countries: fixtures.countries.clone(),
            ..Default::default()
        };

        for country in &fixtures.countries {
            for airport in &country.airports {
                if index.by_code.contains_key(&airport.code) {
                    tracing::warn!("Duplicate airport code {} in {}", airport.code, country.name);
                    continue;
                }
                index.by_code.insert(airport.code.clone(), index.airports.len());
                index.airports.push(Airport {
                    code: airport.code.clone(),
                    name: airport.name.clone(),
                    city: airport.city.clone(),
                    country: country.name.clone(),
                    country_code: country.code.clone(),
                });
            }
        }

        for flight in &fixtures.one_way {
            let (from, to) = (&flight.route.from.code, &flight.route.to.code);
            let forward = index.entry_mut(from, to);
            forward.flight_count += 1;
            forward.add_airlines(flight.airline_codes());
            // Suggestions work both ways even though counts stay directional
            index.entry_mut(to, from);
        }

        for trip in &fixtures.round_trip {
            let (from, to) = (&trip.route.from.code, &trip.route.to.code);
            let forward = index.entry_mut(from, to);
            forward.flight_count += 1;
            forward.add_airlines(trip.airline_codes());
            // An existing reverse pair picks up the airlines; a new one stays empty
            let reverse_known = index.route(to, from).is_some();
            let reverse = index.entry_mut(to, from);
            if reverse_known {
                reverse.add_airlines(trip.airline_codes());
            }
        }

        tracing::info!(
            "Airport index built: {} airports, {} directional routes",
            index.airports.len(),
            index.routes.len()
        );

        index
    }

    fn entry_mut(&mut self, from: &str, to: &str) -> &mut RouteAvailability {
        let position = match self.positions.get(from).and_then(|m| m.get(to)) {
            Some(&position) => position,
            None => {
                let position = self.routes.len();
                self.routes.push(RouteAvailability::new(from, to));
                self.positions
                    .entry(from.to_string())
                    .or_default()
                    .insert(to.to_string(), position);
                position
            }
        };
        &mut self.routes[position]
    }

    /// Case-insensitive match on name, city, code and country, grouped by
    /// country. Queries shorter than two characters return nothing; the query
    /// is matched as given, surrounding whitespace included.
    pub fn search_airports(&self, query: &str) -> Vec<Country> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut grouped: Vec<Country> = Vec::new();
        for airport in self.airports.iter().filter(|a| {
            a.name.to_lowercase().contains(&needle)
                || a.city.to_lowercase().contains(&needle)
                || a.code.to_lowercase().contains(&needle)
                || a.country.to_lowercase().contains(&needle)
        }) {
            match grouped.iter_mut().find(|c| c.name == airport.country) {
                Some(country) => country.airports.push(airport.clone()),
                None => grouped.push(Country {
                    name: airport.country.clone(),
                    code: self.country_code(&airport.country),
                    airports: vec![airport.clone()],
                    selected: false,
                }),
            }
        }
        grouped
    }

    fn country_code(&self, name: &str) -> String {
        self.countries
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.code.clone())
            .unwrap_or_default()
    }

    pub fn get_airport_by_code(&self, code: &str) -> Option<&Airport> {
        self.by_code.get(code).map(|&i| &self.airports[i])
    }

    /// Never fails: unknown codes become a minimal stand-in record.
    pub fn resolve_airport(&self, code: &str) -> ResolvedAirport {
        match self.get_airport_by_code(code) {
            Some(airport) => ResolvedAirport::Known(airport.clone()),
            None => {
                tracing::debug!("Unknown airport code {}, synthesizing fallback", code);
                ResolvedAirport::Fallback(Airport::fallback(code))
            }
        }
    }

    pub fn route(&self, from: &str, to: &str) -> Option<&RouteAvailability> {
        self.positions
            .get(from)
            .and_then(|m| m.get(to))
            .map(|&i| &self.routes[i])
    }

    pub fn is_route_available(&self, from: &str, to: &str) -> bool {
        self.route(from, to).is_some_and(|r| r.available)
    }

    pub fn available_destinations(&self, from: &str) -> Vec<&RouteAvailability> {
        self.routes
            .iter()
            .filter(|r| r.from == from && r.available)
            .collect()
    }

    pub fn available_origins(&self, to: &str) -> Vec<&RouteAvailability> {
        self.routes
            .iter()
            .filter(|r| r.to == to && r.available)
            .collect()
    }

    /// Top routes by flight count. Ties keep fixture scan order.
    pub fn popular_routes(&self) -> Vec<&RouteAvailability> {
        let mut routes: Vec<&RouteAvailability> = self.routes.iter().collect();
        routes.sort_by(|a, b| b.flight_count.cmp(&a.flight_count));
        routes.truncate(POPULAR_ROUTE_LIMIT);
        routes
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn routes(&self) -> &[RouteAvailability] {
        &self.routes
    }

    /// Full country listing in fixture order.
    pub fn countries(&self) -> Vec<Country> {
        self.countries
            .iter()
            .map(|c| Country {
                name: c.name.clone(),
                code: c.code.clone(),
                airports: c
                    .airports
                    .iter()
                    .filter_map(|a| self.get_airport_by_code(&a.code).cloned())
                    .collect(),
                selected: false,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_fixtures;
    use wayfare_shared::{AirlineRef, FixtureFlight, FlightType, Route};

    fn one_way(id: &str, from: &str, to: &str) -> FixtureFlight {
        FixtureFlight {
            id: id.to_string(),
            route: Route {
                from: wayfare_shared::AirportSummary { code: from.into(), ..Default::default() },
                to: wayfare_shared::AirportSummary { code: to.into(), ..Default::default() },
            },
            flight_type: FlightType::Direct,
            airline: Some(AirlineRef { code: "XX".into(), name: "Test Air".into() }),
            flight_number: None,
            aircraft: None,
            duration: "1h 00m".into(),
            segments: Vec::new(),
            pricing: Default::default(),
            baggage: String::new(),
            meal: String::new(),
            entertainment: String::new(),
        }
    }

    #[test]
    fn test_reverse_pair_is_seeded() {
        let index = AirportIndex::build(&sample_fixtures());
        assert!(index.is_route_available("CGK", "SIN"));
        assert!(index.is_route_available("SIN", "CGK"));
        assert_eq!(index.route("SIN", "CGK").unwrap().flight_count, 0);
        assert!(!index.is_route_available("CGK", "BKK"));
    }

    #[test]
    fn test_every_fixture_pair_and_its_reverse_is_available() {
        let fixtures = sample_fixtures();
        let index = AirportIndex::build(&fixtures);
        let pairs = fixtures
            .one_way
            .iter()
            .map(|f| &f.route)
            .chain(fixtures.round_trip.iter().map(|t| &t.route));
        for route in pairs {
            assert!(index.is_route_available(&route.from.code, &route.to.code));
            assert!(index.is_route_available(&route.to.code, &route.from.code));
        }
    }

    #[test]
    fn test_airlines_are_unioned_from_segments_and_round_trips() {
        let index = AirportIndex::build(&sample_fixtures());
        let cgk_sin = index.route("CGK", "SIN").unwrap();
        assert_eq!(cgk_sin.flight_count, 2);
        assert_eq!(cgk_sin.airlines, vec!["GA", "MH"]);

        // Round trips push their airlines into the reverse direction too
        let bkk_sin = index.route("BKK", "SIN").unwrap();
        assert_eq!(bkk_sin.flight_count, 0);
        assert!(bkk_sin.airlines.contains(&"TG".to_string()));
    }

    #[test]
    fn test_round_trip_only_route_seeds_empty_reverse() {
        let mut fixtures = sample_fixtures();
        fixtures.one_way.clear();
        fixtures.round_trip.truncate(1);
        let trip = &fixtures.round_trip[0];
        let (from, to) = (trip.route.from.code.clone(), trip.route.to.code.clone());
        let index = AirportIndex::build(&fixtures);

        let forward = index.route(&from, &to).unwrap();
        assert_eq!(forward.flight_count, 1);
        assert!(!forward.airlines.is_empty());

        let reverse = index.route(&to, &from).unwrap();
        assert!(reverse.available);
        assert_eq!(reverse.flight_count, 0);
        assert!(reverse.airlines.is_empty());
    }

    #[test]
    fn test_search_airports_requires_two_chars() {
        let index = AirportIndex::build(&sample_fixtures());
        assert!(index.search_airports("").is_empty());
        assert!(index.search_airports("s").is_empty());
        assert!(index.search_airports(" ").is_empty());

        // Length is counted on the raw query, so a trailing space still searches
        let results = index.search_airports("i ");
        assert!(results.iter().any(|c| c.airports.iter().any(|a| a.code == "SIN")));
    }

    #[test]
    fn test_search_airports_groups_by_country() {
        let index = AirportIndex::build(&sample_fixtures());

        let results = index.search_airports("ban");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Thailand");
        assert_eq!(results[0].code, "TH");
        assert_eq!(results[0].airports.len(), 2);

        let by_country = index.search_airports("INDONESIA");
        assert_eq!(by_country[0].airports.len(), 2);

        let by_code = index.search_airports("sin");
        assert!(by_code.iter().any(|c| c.airports.iter().any(|a| a.code == "SIN")));
    }

    #[test]
    fn test_airport_lookup_and_fallback() {
        let index = AirportIndex::build(&sample_fixtures());
        assert_eq!(index.get_airport_by_code("SIN").unwrap().country_code, "SG");
        assert!(index.get_airport_by_code("sin").is_none());

        let resolved = index.resolve_airport("QQQ");
        assert!(!resolved.is_known());
        assert_eq!(resolved.airport().country, "Unknown");
        assert!(index.resolve_airport("BKK").is_known());
    }

    #[test]
    fn test_destination_and_origin_projection() {
        let index = AirportIndex::build(&sample_fixtures());
        let destinations: Vec<&str> = index
            .available_destinations("SIN")
            .iter()
            .map(|r| r.to.as_str())
            .collect();
        assert!(destinations.contains(&"BKK"));
        assert!(destinations.contains(&"CGK"));

        let origins: Vec<&str> = index
            .available_origins("SIN")
            .iter()
            .map(|r| r.from.as_str())
            .collect();
        assert!(origins.contains(&"CGK"));
        assert!(origins.contains(&"BKK"));
    }

    #[test]
    fn test_popular_routes_limit_and_stable_ties() {
        let mut fixtures = FixtureSet::default();
        for i in 0..12 {
            fixtures.one_way.push(one_way(&format!("F{}", i), &format!("A{:02}", i), "HUB"));
        }
        fixtures.one_way.push(one_way("F99", "A05", "HUB"));

        let index = AirportIndex::build(&fixtures);
        let popular = index.popular_routes();
        assert_eq!(popular.len(), 10);
        assert_eq!(popular[0].from, "A05");
        assert_eq!(popular[0].flight_count, 2);
        // Remaining ties follow scan order
        assert_eq!(popular[1].from, "A00");
        assert_eq!(popular[2].from, "A01");
        assert_eq!(popular[9].from, "A09");
    }

    #[test]
    fn test_countries_listing_keeps_fixture_order() {
        let index = AirportIndex::build(&sample_fixtures());
        let names: Vec<String> = index.countries().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Indonesia", "Singapore", "Thailand", "Japan"]);
    }
}
