//! Config validation: cross-field consistency.

use crate::config::{Config, DbDriver};
use crate::error::ConfigError;

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let db = &config.database;
    if db.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            reason: "must be at least 1".into(),
        });
    }
    if db.driver == DbDriver::Postgres && db.host.is_empty() {
        return Err(ConfigError::Missing("DB_HOST"));
    }
    if config.server.http_port == config.server.rpc_port {
        return Err(ConfigError::Invalid {
            key: "RPC_PORT",
            reason: format!("collides with HTTP_PORT {}", config.server.http_port),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, ServerConfig};

    fn config() -> Config {
        Config {
            database: DatabaseConfig {
                driver: DbDriver::Sqlite,
                host: String::new(),
                port: 0,
                user: String::new(),
                password: String::new(),
                name: ":memory:".into(),
                debug: false,
                max_connections: 1,
            },
            server: ServerConfig::default(),
        }
    }

    #[test]
    fn sqlite_without_host_is_valid() {
        assert!(validate(&config()).is_ok());
    }

    #[test]
    fn same_ports_are_rejected() {
        let mut cfg = config();
        cfg.server.rpc_port = cfg.server.http_port;
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid { key: "RPC_PORT", .. })));
    }

    #[test]
    fn zero_pool_is_rejected() {
        let mut cfg = config();
        cfg.database.max_connections = 0;
        assert!(validate(&cfg).is_err());
    }
}
