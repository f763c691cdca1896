#![allow(dead_code)]

use foobar_service::{apply_migrations, AppState, DatabaseConfig, DbDriver};
use sqlx::AnyPool;

pub fn memory_db() -> DatabaseConfig {
    DatabaseConfig {
        driver: DbDriver::Sqlite,
        host: String::new(),
        port: 0,
        user: String::new(),
        password: String::new(),
        name: ":memory:".into(),
        debug: true,
        max_connections: 1,
    }
}

/// Fresh migrated in-memory SQLite pool.
pub async fn memory_pool() -> AnyPool {
    let pool = foobar_service::store::connect(&memory_db()).await.unwrap();
    apply_migrations(&pool, DbDriver::Sqlite).await.unwrap();
    pool
}

pub async fn memory_state() -> AppState {
    AppState::new(memory_pool().await)
}
