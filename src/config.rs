// ⚙️ Server Configuration - environment driven
//
// NOVANEST_HOST          bind host        (default 0.0.0.0)
// NOVANEST_PORT          bind port        (default 4000)
// NOVANEST_RATE_PER_KWH  tariff for cost  (default 0.12)

use crate::error::{Error, Result};
use crate::summary::DEFAULT_RATE_PER_KWH;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tariff used for `estimatedCost`
    pub rate_per_kwh: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rate_per_kwh: DEFAULT_RATE_PER_KWH,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment, falling back to defaults for unset keys
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup (tests pass a map here)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("NOVANEST_HOST") {
            let host = host.trim();
            if host.is_empty() {
                return Err(Error::Config("NOVANEST_HOST is empty".to_string()));
            }
            config.host = host.to_string();
        }

        if let Some(port) = lookup("NOVANEST_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("NOVANEST_PORT is not a port: {:?}", port)))?;
        }

        if let Some(rate) = lookup("NOVANEST_RATE_PER_KWH") {
            let parsed: f64 = rate.trim().parse().map_err(|_| {
                Error::Config(format!("NOVANEST_RATE_PER_KWH is not a number: {:?}", rate))
            })?;
            config.rate_per_kwh = validate_rate(parsed)?;
        }

        Ok(config)
    }

    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reject tariffs that would make `estimatedCost` meaningless
pub fn validate_rate(rate: f64) -> Result<f64> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(Error::Config(format!(
            "rate per kWh must be a non-negative number, got {}",
            rate
        )));
    }
    Ok(rate)
}
