//! Validation error taxonomy and the collected report.

use crate::models::ContactField;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Neither a person name nor an organization was supplied.
    MissingIdentity,

    /// Neither an email nor a complete mailing address was supplied.
    MissingContactChannel,

    /// An email was supplied but is malformed.
    InvalidEmailFormat,

    /// The participation/contact type was not selected.
    MissingRequiredCategory,

    /// Any other per-field failure, including caller-configured required fields.
    InvalidField,
}

/// One error attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ContactField,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: ContactField, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every error found on a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    let listed = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("contact rejected with {} error(s): {}", errors.len(), listed)
}

impl ValidationReport {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// The error shown next to `field`, if any.
    pub fn for_field(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }
}
