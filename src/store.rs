//! Connection pool construction for the configured driver.

use std::str::FromStr;

use log::LevelFilter;
use sqlx::any::{install_default_drivers, AnyConnectOptions, AnyPoolOptions};
use sqlx::{AnyPool, ConnectOptions};

use crate::config::{DatabaseConfig, DbDriver};
use crate::error::AppError;

/// Open the shared pool. For PostgreSQL the target database is created first if missing.
/// `debug` turns on per-statement logging.
pub async fn connect(db: &DatabaseConfig) -> Result<AnyPool, AppError> {
    install_default_drivers();
    let url = db.url()?;
    if db.driver == DbDriver::Postgres {
        ensure_database_exists(db).await?;
    }
    let statements = if db.debug { LevelFilter::Info } else { LevelFilter::Off };
    let opts = AnyConnectOptions::from_str(&url)
        .map_err(|e| AppError::BadRequest(format!("invalid database url: {}", e)))?
        .log_statements(statements);

    let mut pool_opts = AnyPoolOptions::new().max_connections(db.max_connections);
    if db.is_in_memory() {
        // every new connection would see an empty database
        pool_opts = pool_opts.max_connections(1).idle_timeout(None).max_lifetime(None);
    }
    let pool = pool_opts.connect_with(opts).await?;
    tracing::info!(driver = %db.driver, max_connections = db.max_connections, "database pool ready");
    Ok(pool)
}

/// Connect to the `postgres` maintenance database and `CREATE DATABASE` when absent.
pub async fn ensure_database_exists(db: &DatabaseConfig) -> Result<(), AppError> {
    let db_name = db.name.trim();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&db.admin_url()?)
        .map_err(|e| AppError::BadRequest(format!("invalid database url: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
