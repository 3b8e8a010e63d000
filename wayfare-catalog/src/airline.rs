use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use wayfare_shared::{AirlineFixture, AirlineRef};

use crate::aircraft::aircraft_spec;

/// Aircraft assumed when an airline lists no fleet.
pub const DEFAULT_AIRCRAFT: &str = "A320";

/// Distances above this prefer wide-body equipment
pub const LONG_HAUL_KM: u32 = 8_000;

/// Airline as seen by the generator, with its drawn commercial attributes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AirlineData {
    pub code: String,
    pub name: String,
    pub hub: Option<String>,
    pub fleet: Vec<String>,
    pub price_multiplier: f64,
    /// 1..=10
    pub quality_score: u8,
}

impl AirlineData {
    fn from_fixture<R: Rng + ?Sized>(fixture: &AirlineFixture, rng: &mut R) -> Self {
        Self {
            code: fixture.code.clone(),
            name: fixture.name.clone(),
            hub: fixture.hub.clone(),
            fleet: fixture.fleet.clone(),
            price_multiplier: rng.gen_range(0.85..=1.25),
            quality_score: rng.gen_range(1..=10),
        }
    }

    /// Operator used when no airline data is configured at all.
    pub fn house() -> Self {
        Self {
            code: "WF".to_string(),
            name: "Wayfare Air".to_string(),
            hub: None,
            fleet: vec!["A320".to_string(), "787-9".to_string()],
            price_multiplier: 1.0,
            quality_score: 7,
        }
    }

    pub fn reference(&self) -> AirlineRef {
        AirlineRef {
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }

    pub fn is_based_at(&self, from: &str, to: &str) -> bool {
        self.hub.as_deref().is_some_and(|hub| hub == from || hub == to)
    }

    /// Picks equipment able to cover the distance, preferring wide bodies on
    /// long-haul sectors. Falls back to the first fleet entry.
    pub fn select_aircraft<R: Rng + ?Sized>(&self, distance_km: u32, rng: &mut R) -> &str {
        let capable: Vec<&str> = self
            .fleet
            .iter()
            .map(String::as_str)
            .filter(|name| aircraft_spec(name).is_some_and(|spec| spec.can_fly(distance_km)))
            .collect();

        if distance_km > LONG_HAUL_KM {
            let wide: Vec<&str> = capable
                .iter()
                .copied()
                .filter(|name| aircraft_spec(name).is_some_and(|spec| spec.wide_body))
                .collect();
            if let Some(name) = wide.choose(rng) {
                return *name;
            }
        }

        match capable.choose(rng) {
            Some(name) => *name,
            None => self.fleet.first().map(String::as_str).unwrap_or(DEFAULT_AIRCRAFT),
        }
    }
}

/// Immutable airline table. Random attributes are drawn once in
/// [`AirlineDirectory::from_fixtures`]; the directory is never empty.
#[derive(Debug, Clone)]
pub struct AirlineDirectory {
    airlines: Vec<AirlineData>,
}

impl AirlineDirectory {
    pub fn from_fixtures<R: Rng + ?Sized>(fixtures: &[AirlineFixture], rng: &mut R) -> Self {
        let mut airlines: Vec<AirlineData> = fixtures
            .iter()
            .map(|fixture| AirlineData::from_fixture(fixture, rng))
            .collect();

        if airlines.is_empty() {
            tracing::warn!("No airline data configured, using house airline");
            airlines.push(AirlineData::house());
        }

        tracing::info!("Airline directory ready with {} airlines", airlines.len());
        Self { airlines }
    }

    pub fn airlines(&self) -> &[AirlineData] {
        &self.airlines
    }

    pub fn len(&self) -> usize {
        self.airlines.len()
    }

    pub fn get(&self, code: &str) -> Option<&AirlineData> {
        self.airlines.iter().find(|a| a.code == code)
    }

    fn primary(&self) -> &AirlineData {
        // Non-empty by construction
        &self.airlines[0]
    }

    /// Airlines based at either endpoint always qualify, any other airline
    /// qualifies on a 30% draw.
    pub fn pick_for_route<R: Rng + ?Sized>(
        &self,
        from: &str,
        to: &str,
        rng: &mut R,
    ) -> &AirlineData {
        let candidates: Vec<&AirlineData> = self
            .airlines
            .iter()
            .filter(|airline| airline.is_based_at(from, to) || rng.gen::<f64>() > 0.7)
            .collect();

        candidates.choose(rng).copied().unwrap_or_else(|| self.primary())
    }

    /// A random airline other than `code`, if the directory has one.
    pub fn pick_other<R: Rng + ?Sized>(&self, code: &str, rng: &mut R) -> Option<&AirlineData> {
        let others: Vec<&AirlineData> = self.airlines.iter().filter(|a| a.code != code).collect();
        others.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture(code: &str, hub: Option<&str>, fleet: &[&str]) -> AirlineFixture {
        AirlineFixture {
            code: code.to_string(),
            name: format!("{} Airways", code),
            hub: hub.map(str::to_string),
            fleet: fleet.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn directory(seed: u64) -> AirlineDirectory {
        let fixtures = vec![
            fixture("SQ", Some("SIN"), &["A350-900", "737-800"]),
            fixture("TG", Some("BKK"), &["A320"]),
            fixture("EK", Some("DXB"), &["A380-800"]),
        ];
        AirlineDirectory::from_fixtures(&fixtures, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_attributes_in_range_and_reproducible() {
        let a = directory(42);
        let b = directory(42);
        assert_eq!(a.airlines(), b.airlines());
        for airline in a.airlines() {
            assert!((0.85..=1.25).contains(&airline.price_multiplier));
            assert!((1..=10).contains(&airline.quality_score));
        }
    }

    #[test]
    fn test_empty_fixtures_fall_back_to_house() {
        let directory = AirlineDirectory::from_fixtures(&[], &mut StdRng::seed_from_u64(1));
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.airlines()[0].code, "WF");
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(directory.pick_for_route("AAA", "BBB", &mut rng).code, "WF");
        assert!(directory.pick_other("WF", &mut rng).is_none());
    }

    #[test]
    fn test_hub_airlines_always_candidates() {
        let directory = directory(7);
        let mut rng = StdRng::seed_from_u64(9);
        // Unrelated endpoints still yield some airline
        for _ in 0..50 {
            let airline = directory.pick_for_route("NRT", "SYD", &mut rng);
            assert!(directory.get(&airline.code).is_some());
        }
        let single = AirlineDirectory::from_fixtures(
            &[fixture("SQ", Some("SIN"), &["A320"])],
            &mut StdRng::seed_from_u64(3),
        );
        assert_eq!(single.pick_for_route("SIN", "BKK", &mut rng).code, "SQ");
    }

    #[test]
    fn test_pick_other_never_returns_same() {
        let directory = directory(5);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            assert_ne!(directory.pick_other("SQ", &mut rng).unwrap().code, "SQ");
        }
    }

    #[test]
    fn test_aircraft_selection() {
        let directory = directory(1);
        let mut rng = StdRng::seed_from_u64(4);
        let sq = directory.get("SQ").unwrap();
        // Only the A350 reaches 10,000 km
        assert_eq!(sq.select_aircraft(10_000, &mut rng), "A350-900");
        // Nothing reaches 20,000 km, first fleet entry is used
        assert_eq!(sq.select_aircraft(20_000, &mut rng), "A350-900");
        let tg = directory.get("TG").unwrap();
        assert_eq!(tg.select_aircraft(9_000, &mut rng), "A320");

        let mut bare = AirlineData::house();
        bare.fleet.clear();
        assert_eq!(bare.select_aircraft(1_000, &mut rng), DEFAULT_AIRCRAFT);
    }
}
