//! Field validation for incoming payloads
//!
//! Unlike a fail-on-first check, every field is inspected and all
//! violations are reported together.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// A single rule violation on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// JSON name of the offending field
    pub field: &'static str,
    /// Rule that failed (`required`, `min`, `max`, `gte`, `uuid`)
    pub tag: &'static str,
    /// Rule parameter, e.g. the maximum length
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{} failed '{}'", self.field, self.tag)
        } else {
            write!(f, "{} failed '{}={}'", self.field, self.tag, self.value)
        }
    }
}

/// All violations found while validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Whether `field` failed with `tag`.
    pub fn has(&self, field: &str, tag: &str) -> bool {
        self.errors.iter().any(|e| e.field == field && e.tag == tag)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "validation failed: {}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulates violations across fields.
///
/// Each check stops at the first failing rule for its own field, so a
/// missing name reports `required` and not also `min`.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &'static str, tag: &'static str, value: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            tag,
            value: value.into(),
        });
    }

    /// Required text with a character length range.
    pub(crate) fn required_text(&mut self, field: &'static str, value: &str, min: usize, max: usize) {
        if value.is_empty() {
            self.push(field, "required", "");
            return;
        }
        self.length(field, value, min, max);
    }

    /// Optional text; only the upper bound applies.
    pub(crate) fn optional_text(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(field, "max", max.to_string());
        }
    }

    /// Required reference that must parse as a UUID.
    pub(crate) fn required_uuid(&mut self, field: &'static str, value: &str) -> Option<Uuid> {
        if value.is_empty() {
            self.push(field, "required", "");
            return None;
        }
        match Uuid::parse_str(value) {
            Ok(id) => Some(id),
            Err(_) => {
                self.push(field, "uuid", "");
                None
            }
        }
    }

    pub(crate) fn non_negative(&mut self, field: &'static str, value: i64) {
        if value < 0 {
            self.push(field, "gte", "0");
        }
    }

    fn length(&mut self, field: &'static str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min {
            self.push(field, "min", min.to_string());
        } else if len > max {
            self.push(field, "max", max.to_string());
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}
