//! Contact validation.
//!
//! One policy shared by every intake form: identity, reachability, email
//! shape and participation type rules, followed by normalisation.

pub mod report;
pub mod validator;

pub use report::{FieldError, ValidationErrorKind, ValidationReport};
pub use validator::{ContactValidator, ValidationResult, ValidatorOptions, DEFAULT_COUNTRY};
