//! Load config from the process environment, optionally seeded from a `.env` file.

use std::path::Path;
use std::str::FromStr;

use crate::config::types::{Config, DatabaseConfig, DbDriver, ServerConfig};
use crate::config::validate;
use crate::error::ConfigError;

/// Load `path` into the process environment. Returns false when the file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::Env(e)),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (process env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let driver = get("DB_DRIVER").ok_or(ConfigError::Missing("DB_DRIVER"))?;
        let driver = DbDriver::from_str(&driver).map_err(|reason| ConfigError::Invalid {
            key: "DB_DRIVER",
            reason,
        })?;
        let name = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
        let debug = get("DEBUG").ok_or(ConfigError::Missing("DEBUG"))?;
        let debug = parse_bool(&debug).ok_or_else(|| ConfigError::Invalid {
            key: "DEBUG",
            reason: format!("'{}' is not a boolean", debug),
        })?;
        let defaults = ServerConfig::default();

        let config = Config {
            database: DatabaseConfig {
                driver,
                host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
                port: parse_or("DB_PORT", get("DB_PORT"), 5432)?,
                user: get("DB_USER").unwrap_or_default(),
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                name,
                debug,
                max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 5)?,
            },
            server: ServerConfig {
                http_port: parse_or("HTTP_PORT", get("HTTP_PORT"), defaults.http_port)?,
                rpc_port: parse_or("RPC_PORT", get("RPC_PORT"), defaults.rpc_port)?,
            },
        };
        validate(&config)?;
        Ok(config)
    }
}

/// Accepts the same spellings as Go's `strconv.ParseBool`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}
