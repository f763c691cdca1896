//! Service-level routes. Every answer uses the same envelope as the foobar routes.

use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde_json::json;

use crate::response::{generate_message, Envelope, Verb};
use crate::state::AppState;

fn ok(resource: &str, data: impl serde::Serialize) -> Envelope {
    Envelope::new(StatusCode::OK.as_u16(), generate_message(0, Verb::Get, resource, true), data)
}

async fn home() -> Envelope {
    ok("home", "Running")
}

/// Liveness only; does not touch the database.
async fn health() -> Envelope {
    ok("health", json!({ "status": "ok" }))
}

async fn ready(State(state): State<AppState>) -> Envelope {
    match sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        Ok(_) => ok("ready", json!({ "database": "ok" })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            Envelope::new(
                StatusCode::SERVICE_UNAVAILABLE.as_u16(),
                generate_message(0, Verb::Get, "ready", false),
                json!({ "database": "unavailable" }),
            )
        }
    }
}

async fn version() -> Envelope {
    ok(
        "version",
        json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// GET /, /health, /ready (with DB check), /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
