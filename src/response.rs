//! Standard response envelope and message formatting.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform wrapper returned by every foobar operation on both transports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub message: String,
    pub data: Value,
}

impl Envelope {
    pub fn new(status_code: u16, message: impl Into<String>, data: impl Serialize) -> Self {
        Self {
            status_code,
            message: message.into(),
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }

    pub fn empty(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(status_code, message, Value::Null)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable message for an operation outcome. An id of 0 means "no specific row".
pub fn generate_message(id: i64, verb: Verb, resource: &str, success: bool) -> String {
    let outcome = if success { "success" } else { "failed" };
    if id == 0 {
        format!("{} {} {}", verb, resource, outcome)
    } else {
        format!("{} {} with id {} {}", verb, resource, id, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_without_id() {
        assert_eq!(generate_message(0, Verb::Get, "foobar", true), "GET foobar success");
        assert_eq!(generate_message(0, Verb::Post, "foobar", false), "POST foobar failed");
    }

    #[test]
    fn message_with_id() {
        assert_eq!(
            generate_message(7, Verb::Delete, "foobar", true),
            "DELETE foobar with id 7 success"
        );
    }

    #[test]
    fn envelope_serializes_camel_case() {
        let env = Envelope::empty(404, "GET foobar with id 999 failed");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["message"], "GET foobar with id 999 failed");
        assert!(json["data"].is_null());
    }

    #[test]
    fn envelope_response_uses_status_code() {
        let res = Envelope::new(201, "POST foobar success", 1).into_response();
        assert_eq!(res.status(), StatusCode::CREATED);
    }
}
