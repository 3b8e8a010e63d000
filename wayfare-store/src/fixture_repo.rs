use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use wayfare_core::repository::FixtureRepository;
use wayfare_shared::{AirlineFixture, CountryFixture, FixtureFlight, FixtureRoundTrip};

use crate::StoreError;

pub const COUNTRIES_FILE: &str = "countries.json";
pub const ONE_WAY_FILE: &str = "one_way_flights.json";
pub const ROUND_TRIP_FILE: &str = "round_trip_flights.json";
pub const AIRLINES_FILE: &str = "airlines.json";

/// Reads the bundled fixture datasets from a directory of JSON files.
pub struct JsonFixtureRepository {
    dir: PathBuf,
}

impl JsonFixtureRepository {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

impl FixtureRepository for JsonFixtureRepository {
    fn load_countries(&self) -> Result<Vec<CountryFixture>, Box<dyn Error + Send + Sync>> {
        Ok(self.read(COUNTRIES_FILE)?)
    }

    fn load_one_way_flights(&self) -> Result<Vec<FixtureFlight>, Box<dyn Error + Send + Sync>> {
        Ok(self.read(ONE_WAY_FILE)?)
    }

    fn load_round_trip_flights(
        &self,
    ) -> Result<Vec<FixtureRoundTrip>, Box<dyn Error + Send + Sync>> {
        Ok(self.read(ROUND_TRIP_FILE)?)
    }

    fn load_airlines(&self) -> Result<Vec<AirlineFixture>, Box<dyn Error + Send + Sync>> {
        Ok(self.read(AIRLINES_FILE)?)
    }
}
