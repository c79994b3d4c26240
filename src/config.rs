//! Runtime configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `HOST`: listen address (default `0.0.0.0`)
//! - `PORT`: listen port (default `8080`)
//! - `STORAGE_MODE`: `in_memory` (default) | `postgres`
//! - `DATABASE_URL`: `PostgreSQL` connection URL (required when `STORAGE_MODE=postgres`)
//! - `DATABASE_POOL_SIZE`: connection pool size (default `5`)
//! - `SEED_DEMO_DATA`: `true` (default) | `false`

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 5;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `STORAGE_MODE` is not a recognised value.
    #[error("invalid STORAGE_MODE '{0}', expected in_memory or postgres")]
    InvalidStorageMode(String),

    /// `DATABASE_URL` is missing while `STORAGE_MODE=postgres`.
    #[error("DATABASE_URL is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,

    /// A variable could not be parsed.
    #[error("invalid {key} '{value}'")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Backing store for item resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Process-local storage; contents are lost on exit.
    #[default]
    InMemory,
    /// `PostgreSQL` storage via Diesel.
    Postgres,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(ConfigError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen address.
    pub host: IpAddr,
    /// Listen port.
    pub port: u16,
    /// Backing store.
    pub storage_mode: StorageMode,
    /// `PostgreSQL` connection URL.
    pub database_url: Option<String>,
    /// Maximum pooled `PostgreSQL` connections.
    pub pool_size: u32,
    /// Whether demo items are created on start-up.
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            storage_mode: StorageMode::default(),
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value or
    /// `DATABASE_URL` is missing for `PostgreSQL` storage.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Empty or whitespace-only values count as unset.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let host = read("HOST")
            .map(|value| parse_value::<IpAddr>("HOST", &value))
            .transpose()?
            .unwrap_or(defaults.host);
        let port = read("PORT")
            .map(|value| parse_value::<u16>("PORT", &value))
            .transpose()?
            .unwrap_or(defaults.port);
        let storage_mode = read("STORAGE_MODE")
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();
        let pool_size = read("DATABASE_POOL_SIZE")
            .map(|value| parse_value::<u32>("DATABASE_POOL_SIZE", &value))
            .transpose()?
            .filter(|size| *size > 0)
            .unwrap_or(defaults.pool_size);
        let seed_demo_data = read("SEED_DEMO_DATA")
            .map(|value| parse_flag("SEED_DEMO_DATA", &value))
            .transpose()?
            .unwrap_or(defaults.seed_demo_data);

        let config = Self {
            host,
            port,
            storage_mode,
            database_url: read("DATABASE_URL"),
            pool_size,
            seed_demo_data,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when `PostgreSQL` storage
    /// is selected without a URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.storage_mode, StorageMode::Postgres) && self.database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(())
    }

    /// Returns the socket address to listen on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_owned(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_owned(),
        }),
    }
}
