use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::domain::params::{
    DEFAULT_IMPORT_PERCENT, DEFAULT_INCOME, DEFAULT_SAVINGS_PERCENT, DEFAULT_TAX_PERCENT,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Slider values used when a request leaves a parameter unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub default_income: f64,
    pub default_tax_percent: u8,
    pub default_savings_percent: u8,
    pub default_import_percent: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 8080,
                enable_cors: true,
                request_timeout_secs: 10,
            },
            simulation: SimulationConfig {
                default_income: DEFAULT_INCOME,
                default_tax_percent: DEFAULT_TAX_PERCENT,
                default_savings_percent: DEFAULT_SAVINGS_PERCENT,
                default_import_percent: DEFAULT_IMPORT_PERCENT,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("CIRCULAR_FLOW__").split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_simulation_matches_sliders() {
        let cfg = Config::default();
        assert_eq!(cfg.simulation.default_income, 3000.0);
        assert_eq!(cfg.simulation.default_tax_percent, 25);
        assert_eq!(cfg.simulation.default_savings_percent, 10);
        assert_eq!(cfg.simulation.default_import_percent, 15);
    }

    #[test]
    fn test_socket_addr_parses() {
        let cfg = Config::default();
        assert!(cfg.server.socket_addr().is_ok());
    }
}
