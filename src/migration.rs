//! Schema migration for the foobars table. Idempotent: safe to run on every start.

use sqlx::AnyPool;

use crate::config::DbDriver;
use crate::error::AppError;

fn foobars_ddl(driver: DbDriver) -> &'static str {
    match driver {
        DbDriver::Postgres => {
            r#"
            CREATE TABLE IF NOT EXISTS foobars (
                id BIGSERIAL PRIMARY KEY,
                foobar_content VARCHAR(255) NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#
        }
        DbDriver::Sqlite => {
            r#"
            CREATE TABLE IF NOT EXISTS foobars (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                foobar_content VARCHAR(255) NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#
        }
    }
}

/// Create the foobars table if missing.
pub async fn apply_migrations(pool: &AnyPool, driver: DbDriver) -> Result<(), AppError> {
    tracing::info!(%driver, "applying migrations");
    sqlx::query(foobars_ddl(driver)).execute(pool).await?;
    Ok(())
}
