pub mod app_config;
pub mod fixture_repo;

pub use app_config::{Config, GeneratorConfig, SearchConfig};
pub use fixture_repo::JsonFixtureRepository;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed fixture {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
