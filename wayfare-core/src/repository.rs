use wayfare_shared::{AirlineFixture, CountryFixture, FixtureFlight, FixtureRoundTrip, FixtureSet};

type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Source of the static fixture datasets the services are built from.
pub trait FixtureRepository: Send + Sync {
    fn load_countries(&self) -> RepoResult<Vec<CountryFixture>>;

    fn load_one_way_flights(&self) -> RepoResult<Vec<FixtureFlight>>;

    fn load_round_trip_flights(&self) -> RepoResult<Vec<FixtureRoundTrip>>;

    fn load_airlines(&self) -> RepoResult<Vec<AirlineFixture>>;

    fn load_all(&self) -> RepoResult<FixtureSet> {
        Ok(FixtureSet {
            countries: self.load_countries()?,
            one_way: self.load_one_way_flights()?,
            round_trip: self.load_round_trip_flights()?,
            airlines: self.load_airlines()?,
        })
    }
}

/// An already materialized set serves as its own repository (tests, embedding).
impl FixtureRepository for FixtureSet {
    fn load_countries(&self) -> RepoResult<Vec<CountryFixture>> {
        Ok(self.countries.clone())
    }

    fn load_one_way_flights(&self) -> RepoResult<Vec<FixtureFlight>> {
        Ok(self.one_way.clone())
    }

    fn load_round_trip_flights(&self) -> RepoResult<Vec<FixtureRoundTrip>> {
        Ok(self.round_trip.clone())
    }

    fn load_airlines(&self) -> RepoResult<Vec<AirlineFixture>> {
        Ok(self.airlines.clone())
    }
}
