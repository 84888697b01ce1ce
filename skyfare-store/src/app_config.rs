use serde::Deserialize;
use std::env;

use skyfare_pricing::PricingConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub tax_rate: f64,
    pub premium_surcharge_inr: i32,
    pub insurance_per_traveler_inr: i32,
    /// Probability a seat renders occupied in the mock seat map.
    #[serde(default = "default_occupancy")]
    pub seat_occupancy_probability: f64,
}

fn default_occupancy() -> f64 {
    0.3
}

impl BusinessRules {
    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            tax_rate: self.tax_rate,
            premium_surcharge_inr: self.premium_surcharge_inr,
            insurance_per_traveler_inr: self.insurance_per_traveler_inr,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYFARE__SERVER__PORT=9090` overrides server.port
            .add_source(config::Environment::with_prefix("SKYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
