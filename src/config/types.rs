//! Runtime configuration types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbDriver {
    Postgres,
    Sqlite,
}

impl DbDriver {
    pub fn as_str(self) -> &'static str {
        match self {
            DbDriver::Postgres => "postgres",
            DbDriver::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DbDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbDriver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DbDriver::Postgres),
            "sqlite" | "sqlite3" => Ok(DbDriver::Sqlite),
            other => Err(format!("unsupported driver '{}' (expected postgres or sqlite)", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub driver: DbDriver,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database name for PostgreSQL; file path or `:memory:` for SQLite.
    pub name: String,
    /// Log every SQL statement.
    pub debug: bool,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Connection URL understood by `sqlx::AnyPool`. Credentials are percent-encoded.
    pub fn url(&self) -> Result<String, ConfigError> {
        match self.driver {
            DbDriver::Postgres => self.postgres_url(&self.name),
            DbDriver::Sqlite => {
                if self.is_in_memory() {
                    Ok("sqlite::memory:".to_string())
                } else {
                    Ok(format!("sqlite://{}?mode=rwc", self.name))
                }
            }
        }
    }

    /// Same server and credentials, pointed at the `postgres` maintenance database.
    pub fn admin_url(&self) -> Result<String, ConfigError> {
        self.postgres_url("postgres")
    }

    fn postgres_url(&self, database: &str) -> Result<String, ConfigError> {
        let mut url = Url::parse(&format!("postgres://{}:{}", self.host, self.port)).map_err(|e| {
            ConfigError::Invalid {
                key: "DB_HOST",
                reason: e.to_string(),
            }
        })?;
        url.set_path(&format!("/{}", database));
        if !self.user.is_empty() {
            url.set_username(&self.user).map_err(|_| ConfigError::Invalid {
                key: "DB_USER",
                reason: "cannot be placed in a connection url".into(),
            })?;
            if !self.password.is_empty() {
                url.set_password(Some(&self.password)).map_err(|_| ConfigError::Invalid {
                    key: "DB_PASSWORD",
                    reason: "cannot be placed in a connection url".into(),
                })?;
            }
        }
        Ok(url.into())
    }

    pub fn is_in_memory(&self) -> bool {
        self.driver == DbDriver::Sqlite && self.name == ":memory:"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub http_port: u16,
    pub rpc_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            rpc_port: 4040,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}
