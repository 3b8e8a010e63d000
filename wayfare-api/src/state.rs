use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use wayfare_catalog::{AirlineDirectory, PricingEngine};
use wayfare_core::{AirportIndex, FlightSearchService};
use wayfare_generator::ProceduralFlightGenerator;
use wayfare_shared::FixtureSet;
use wayfare_store::{GeneratorConfig, SearchConfig};

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<AirportIndex>,
    pub search: Arc<FlightSearchService>,
    pub generator: Arc<ProceduralFlightGenerator>,
    pub search_config: SearchConfig,
}

impl AppState {
    /// Builds the index and both services once. Airline attributes are drawn
    /// here, from `airline_seed` when configured.
    pub fn from_fixtures(
        fixtures: &FixtureSet,
        generator_config: GeneratorConfig,
        search_config: SearchConfig,
    ) -> Self {
        let index = Arc::new(AirportIndex::build(fixtures));

        let mut rng = match generator_config.airline_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let airlines = AirlineDirectory::from_fixtures(&fixtures.airlines, &mut rng);

        let search = FlightSearchService::new(index.clone(), fixtures);
        let generator = ProceduralFlightGenerator::new(
            index.clone(),
            airlines,
            PricingEngine::default(),
            generator_config,
        );

        Self {
            index,
            search: Arc::new(search),
            generator: Arc::new(generator),
            search_config,
        }
    }
}
