//! Server configuration from environment variables.

use std::env;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_LOG_FILTER: &str = "books_service=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

impl ServerConfig {
    /// Reads `HOST` (default `0.0.0.0`), `PORT` (default 8000) and `RUST_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_var("HOST", "0.0.0.0")?;
        let port = parse_var("PORT", "8000")?;
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            host,
            port,
            log_filter,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
