//! Foobar request handling shared by the HTTP and RPC bindings.
//! Every path ends in an `Envelope`; errors never escape to the transport.

use std::sync::Arc;

use axum::http::StatusCode;

use crate::error::AppError;
use crate::model::{FoobarPayload, RESOURCE_NAME};
use crate::response::{generate_message, Envelope, Verb};
use crate::service::{FoobarUsecase, RequestValidator};

/// Status returned by a successful update.
pub const UPDATE_SUCCESS: StatusCode = StatusCode::CREATED;

pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn message(id: i64, verb: Verb, success: bool) -> String {
    generate_message(id, verb, RESOURCE_NAME, success)
}

fn failure(status: StatusCode, id: i64, verb: Verb, data: impl serde::Serialize) -> Envelope {
    Envelope::new(status.as_u16(), message(id, verb, false), data)
}

/// Identifier in the request could not be parsed.
pub fn invalid_id(verb: Verb) -> Envelope {
    Envelope::empty(StatusCode::BAD_GATEWAY.as_u16(), message(0, verb, false))
}

/// Request body could not be bound to a payload.
pub fn bind_failed(verb: Verb, detail: impl Into<String>) -> Envelope {
    failure(StatusCode::BAD_REQUEST, 0, verb, detail.into())
}

fn validation_failed(id: i64, verb: Verb, err: AppError) -> Envelope {
    match err {
        AppError::Validation(errors) => failure(StatusCode::BAD_REQUEST, id, verb, errors),
        other => failure(StatusCode::BAD_REQUEST, id, verb, other.to_string()),
    }
}

#[derive(Clone)]
pub struct FoobarHandler {
    usecase: Arc<dyn FoobarUsecase>,
}

impl FoobarHandler {
    pub fn new(usecase: Arc<dyn FoobarUsecase>) -> Self {
        Self { usecase }
    }

    pub async fn fetch(&self) -> Envelope {
        match self.usecase.fetch().await {
            Ok(foobars) => Envelope::new(StatusCode::OK.as_u16(), message(0, Verb::Get, true), foobars),
            Err(e) => {
                tracing::error!(error = %e, "fetch foobars failed");
                Envelope::empty(StatusCode::UNPROCESSABLE_ENTITY.as_u16(), message(0, Verb::Get, false))
            }
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Envelope {
        match self.usecase.get_by_id(id).await {
            Ok(foobar) => Envelope::new(StatusCode::OK.as_u16(), message(id, Verb::Get, true), foobar),
            Err(e) => {
                log_lookup_failure(id, &e);
                Envelope::empty(StatusCode::NOT_FOUND.as_u16(), message(id, Verb::Get, false))
            }
        }
    }

    pub async fn store(&self, payload: FoobarPayload) -> Envelope {
        if let Err(e) = RequestValidator::validate(&payload) {
            return validation_failed(0, Verb::Post, e);
        }
        match self.usecase.store(&payload).await {
            Ok(foobar) => Envelope::new(
                StatusCode::CREATED.as_u16(),
                message(foobar.id, Verb::Post, true),
                foobar,
            ),
            Err(e) => {
                tracing::warn!(error = %e, "store foobar failed");
                Envelope::empty(StatusCode::BAD_REQUEST.as_u16(), message(0, Verb::Post, false))
            }
        }
    }

    /// Update row `id` with the submitted fields. A payload id, when present, must match.
    pub async fn update(&self, id: i64, payload: FoobarPayload) -> Envelope {
        if let Some(body_id) = payload.id {
            if body_id != id {
                let detail = format!("payload id {} does not match target id {}", body_id, id);
                return failure(StatusCode::BAD_REQUEST, id, Verb::Patch, detail);
            }
        }
        if let Err(e) = RequestValidator::validate_partial(&payload) {
            return validation_failed(id, Verb::Patch, e);
        }
        let existing = match self.usecase.get_by_id(id).await {
            Ok(existing) => existing,
            Err(e) => {
                log_lookup_failure(id, &e);
                return Envelope::empty(StatusCode::NOT_FOUND.as_u16(), message(id, Verb::Patch, false));
            }
        };
        match self.usecase.update(&payload.apply_to(&existing)).await {
            Ok(updated) => Envelope::new(UPDATE_SUCCESS.as_u16(), message(id, Verb::Patch, true), updated),
            Err(e) => {
                tracing::warn!(id, error = %e, "update foobar failed");
                Envelope::empty(StatusCode::BAD_REQUEST.as_u16(), message(id, Verb::Patch, false))
            }
        }
    }

    pub async fn delete(&self, id: i64) -> Envelope {
        let existing = match self.usecase.get_by_id(id).await {
            Ok(existing) => existing,
            Err(e) => {
                log_lookup_failure(id, &e);
                return Envelope::empty(StatusCode::NOT_FOUND.as_u16(), message(id, Verb::Delete, false));
            }
        };
        match self.usecase.delete(existing.id).await {
            Ok(()) => Envelope::new(StatusCode::OK.as_u16(), message(id, Verb::Delete, true), existing.id),
            Err(e) => {
                tracing::warn!(id, error = %e, "delete foobar failed");
                Envelope::empty(StatusCode::NOT_FOUND.as_u16(), message(id, Verb::Delete, false))
            }
        }
    }
}

fn log_lookup_failure(id: i64, err: &AppError) {
    if err.is_not_found() {
        tracing::debug!(id, "foobar not found");
    } else {
        tracing::warn!(id, error = %err, "foobar lookup failed");
    }
}
