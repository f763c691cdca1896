//! Persistence gateway for foobars. Sole owner of the durable representation.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::AnyPool;

use crate::error::AppError;
use crate::model::{Foobar, FoobarPayload};

const SELECT_FOOBAR: &str = "SELECT id, foobar_content, created_at, updated_at FROM foobars";
const RETURNING_FOOBAR: &str = "RETURNING id, foobar_content, created_at, updated_at";

#[async_trait]
pub trait FoobarRepository: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Foobar>, AppError>;
    async fn get_by_id(&self, id: i64) -> Result<Foobar, AppError>;
    async fn create(&self, payload: &FoobarPayload) -> Result<Foobar, AppError>;
    async fn update(&self, foobar: &Foobar) -> Result<Foobar, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Gateway over any sqlx-supported driver. Statements use `$n` placeholders, which
/// both PostgreSQL and SQLite accept.
#[derive(Clone)]
pub struct SqlFoobarRepository {
    pool: AnyPool,
}

impl SqlFoobarRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[async_trait]
impl FoobarRepository for SqlFoobarRepository {
    async fn fetch(&self) -> Result<Vec<Foobar>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_FOOBAR);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Foobar>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Foobar, AppError> {
        let sql = format!("{} WHERE id = $1", SELECT_FOOBAR);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Foobar>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("foobar {}", id)))
    }

    async fn create(&self, payload: &FoobarPayload) -> Result<Foobar, AppError> {
        let content = payload
            .foobar_content
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("foobar_content is required".into()))?;
        let ts = now();
        let sql = format!(
            "INSERT INTO foobars (foobar_content, created_at, updated_at) VALUES ($1, $2, $3) {}",
            RETURNING_FOOBAR
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Foobar>(&sql)
            .bind(content)
            .bind(&ts)
            .bind(&ts)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, foobar: &Foobar) -> Result<Foobar, AppError> {
        let sql = format!(
            "UPDATE foobars SET foobar_content = $1, updated_at = $2 WHERE id = $3 {}",
            RETURNING_FOOBAR
        );
        tracing::debug!(sql = %sql, id = foobar.id, "query");
        sqlx::query_as::<_, Foobar>(&sql)
            .bind(&foobar.foobar_content)
            .bind(now())
            .bind(foobar.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("foobar {}", foobar.id)))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let sql = "DELETE FROM foobars WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("foobar {}", id)));
        }
        Ok(())
    }
}
