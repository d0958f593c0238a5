//! Error types for the case intake library.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactId;
use crate::validation::ValidationReport;
use thiserror::Error;

/// Errors that can occur when reading or writing the contact directory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// No contact with this ID exists
    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    /// A contact with the same email is already stored
    #[error("Duplicate contact: email already used by {0}")]
    Duplicate(ContactId),

    /// Invalid search query
    #[error("Invalid search query: {0}")]
    InvalidQuery(#[from] MatchingError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur during contact matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// Every query field was blank
    #[error("Query must include a name, organization, email or phone")]
    EmptyQuery,
}

/// Errors raised by stage machines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// The event is not allowed from the current stage
    #[error("Cannot {event} while {stage}")]
    IllegalTransition { stage: String, event: String },
}

/// Errors surfaced to an intake form on submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntakeError {
    /// The input failed validation; carries every error at once
    #[error(transparent)]
    Rejected(#[from] ValidationReport),

    /// The directory refused the record
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with MatchingError
pub type MatchingResult<T> = Result<T, MatchingError>;

/// Convenience type alias for Results with WorkflowError
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Convenience type alias for Results with IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;
