use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the HTTP server binds to when `LISTEN_ADDR` is unset
pub static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Connection pool size used when `DATABASE_MAX_CONNECTIONS` is unset
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Server configuration read from the environment.
pub struct Config {
    /// Database connection string, `DATABASE_URL`
    pub database_url: String,
    /// Address the HTTP server binds to, `LISTEN_ADDR`
    pub listen_addr: SocketAddr,
    /// Connection pool size, `DATABASE_MAX_CONNECTIONS`
    pub database_max_connections: u32,
}

impl Config {
    /// Builds the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: err.to_string(),
            })?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .map_err(|err: std::num::ParseIntError| ConfigError::InvalidEnvValue {
                    var: "DATABASE_MAX_CONNECTIONS".to_string(),
                    reason: err.to_string(),
                })?,
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            listen_addr,
            database_max_connections,
        })
    }
}
