//! HTTP binding for foobar CRUD.
//! Path ids are parsed here so a malformed id can be answered with 502, and JSON
//! rejections are turned into 400 envelopes instead of axum's plain-text bodies.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::handlers::{bind_failed, invalid_id, parse_id};
use crate::model::FoobarPayload;
use crate::response::{Envelope, Verb};
use crate::state::AppState;

pub async fn fetch(State(state): State<AppState>) -> Envelope {
    state.foobars.fetch().await
}

pub async fn get_by_id(State(state): State<AppState>, Path(raw_id): Path<String>) -> Envelope {
    match parse_id(&raw_id) {
        Some(id) => state.foobars.get_by_id(id).await,
        None => invalid_id(Verb::Get),
    }
}

pub async fn store(
    State(state): State<AppState>,
    payload: Result<Json<FoobarPayload>, JsonRejection>,
) -> Envelope {
    match payload {
        Ok(Json(payload)) => state.foobars.store(payload).await,
        Err(rejection) => bind_failed(Verb::Post, rejection.body_text()),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<FoobarPayload>, JsonRejection>,
) -> Envelope {
    let Some(id) = parse_id(&raw_id) else {
        return invalid_id(Verb::Patch);
    };
    match payload {
        Ok(Json(payload)) => state.foobars.update(id, payload).await,
        Err(rejection) => bind_failed(Verb::Patch, rejection.body_text()),
    }
}

pub async fn remove(State(state): State<AppState>, Path(raw_id): Path<String>) -> Envelope {
    match parse_id(&raw_id) {
        Some(id) => state.foobars.delete(id).await,
        None => invalid_id(Verb::Delete),
    }
}

/// Foobar routes. Collection paths answer with and without the trailing slash;
/// `DELETE /foobar/:id` is accepted alongside `/foobar/delete/:id`.
pub fn foobar_routes(state: AppState) -> Router {
    Router::new()
        .route("/foobars", get(fetch))
        .route("/foobars/", get(fetch))
        .route("/foobar", post(store))
        .route("/foobar/", post(store))
        .route("/foobar/:id", get(get_by_id).delete(remove))
        .route("/foobar/update/:id", patch(update))
        .route("/foobar/delete/:id", delete(remove))
        .with_state(state)
}
