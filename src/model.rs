//! The foobar resource and its bound request payload.

use serde::{Deserialize, Serialize};

/// Name used in messages and log fields.
pub const RESOURCE_NAME: &str = "foobar";

/// A stored foobar row. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Foobar {
    pub id: i64,
    pub foobar_content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body accepted by create and update. Absent fields are left untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoobarPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub foobar_content: Option<String>,
}

impl FoobarPayload {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            id: None,
            foobar_content: Some(content.into()),
        }
    }

    /// Overlay submitted fields onto an existing row, keeping its identity and timestamps.
    pub fn apply_to(&self, existing: &Foobar) -> Foobar {
        let mut merged = existing.clone();
        if let Some(content) = &self.foobar_content {
            merged.foobar_content = content.clone();
        }
        merged
    }
}
