//! Declared per-field constraints for foobar payloads.

use crate::error::{AppError, FieldError};
use crate::model::FoobarPayload;

/// Constraints for one string field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

pub const FOOBAR_RULES: &[FieldRule] = &[FieldRule {
    field: "foobar_content",
    required: true,
    min_length: Some(1),
    max_length: Some(255),
}];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create payload. All required fields must be present and non-blank.
    pub fn validate(payload: &FoobarPayload) -> Result<(), AppError> {
        Self::run(payload, true)
    }

    /// Validate only the fields present in the payload (for PATCH).
    pub fn validate_partial(payload: &FoobarPayload) -> Result<(), AppError> {
        Self::run(payload, false)
    }

    fn run(payload: &FoobarPayload, enforce_required: bool) -> Result<(), AppError> {
        let mut errors = Vec::new();
        for rule in FOOBAR_RULES {
            let value = field_value(payload, rule.field);
            match value {
                None if rule.required && enforce_required => errors.push(FieldError {
                    field: rule.field,
                    rule: "required",
                    message: format!("{} is required", rule.field),
                }),
                None => {}
                Some(v) => validate_field(v, rule, &mut errors),
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn field_value<'a>(payload: &'a FoobarPayload, field: &str) -> Option<&'a str> {
    match field {
        "foobar_content" => payload.foobar_content.as_deref(),
        _ => None,
    }
}

fn validate_field(v: &str, rule: &FieldRule, errors: &mut Vec<FieldError>) {
    if rule.required && v.trim().is_empty() {
        errors.push(FieldError {
            field: rule.field,
            rule: "required",
            message: format!("{} must not be blank", rule.field),
        });
        return;
    }
    let len = v.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            errors.push(FieldError {
                field: rule.field,
                rule: "min_length",
                message: format!("{} must be at least {} characters", rule.field, min),
            });
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            errors.push(FieldError {
                field: rule.field,
                rule: "max_length",
                message: format!("{} must be at most {} characters", rule.field, max),
            });
        }
    }
}
