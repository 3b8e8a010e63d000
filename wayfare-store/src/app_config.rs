use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub fixtures: FixtureConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FixtureConfig {
    /// Directory holding the fixture JSON files
    pub dir: String,
}

/// Knobs of the procedural flight generator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default = "default_count")]
    pub default_count: usize,
    /// 0..1, mapped onto the demand multiplier
    #[serde(default = "default_demand")]
    pub demand: f64,
    #[serde(default = "default_load_factor")]
    pub load_factor: f64,
    #[serde(default = "default_direct_probability")]
    pub direct_probability: f64,
    #[serde(default = "default_switch_probability")]
    pub airline_switch_probability: f64,
    /// Connection airports for synthesized transit itineraries
    #[serde(default = "default_hubs")]
    pub hubs: Vec<String>,
    /// Fixes airline multipliers and quality scores across restarts
    #[serde(default)]
    pub airline_seed: Option<u64>,
}

fn default_count() -> usize { 10 }
fn default_demand() -> f64 { 0.5 }
fn default_load_factor() -> f64 { 0.7 }
fn default_direct_probability() -> f64 { 0.7 }
fn default_switch_probability() -> f64 { 0.5 }

fn default_hubs() -> Vec<String> {
    ["SIN", "DXB", "DOH", "HKG", "BKK", "KUL", "IST", "FRA"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            demand: default_demand(),
            load_factor: default_load_factor(),
            direct_probability: default_direct_probability(),
            airline_switch_probability: default_switch_probability(),
            hubs: default_hubs(),
            airline_seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    /// Serve generated flights when the fixtures have nothing for a route
    #[serde(default)]
    pub fallback_to_generator: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `WAYFARE_SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("WAYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
