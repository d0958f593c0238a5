//! Case Intake - contact validation and case workflow rules for a
//! government case-management portal.
//!
//! Every contact intake form validates through one canonical policy, hands
//! accepted records to a contact directory, and drives ruling and extension
//! screens through explicit stage machines.
//!
//! # Architecture
//!
//! - **domain**: Value objects for contact IDs, email addresses and phone numbers
//! - **models**: Raw form input, normalised records and participation types
//! - **validation**: The contact validator and its error taxonomy
//! - **matching**: Exact and fuzzy matching of existing contacts
//! - **directory**: The contact store interface and an in-memory implementation
//! - **services**: Intake orchestration (validate, then store)
//! - **workflow**: Ruling and extension request stage machines
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;
pub mod validation;
pub mod workflow;

pub use config::Config;
pub use directory::{ContactDirectory, InMemoryDirectory};
pub use domain::{format_phone, ContactId, EmailAddress, PhoneNumber};
pub use error::{ConfigError, DirectoryError, IntakeError, MatchingError, WorkflowError};
pub use matching::{ContactMatcher, ContactQuery, MatchResult, MatchType};
pub use models::{ContactField, ContactInput, ContactRecord, ParticipationTypes, StoredContact};
pub use services::{IntakeService, IntakeServiceImpl};
pub use validation::{
    ContactValidator, FieldError, ValidationErrorKind, ValidationReport, ValidationResult,
    ValidatorOptions,
};
pub use workflow::{
    ExtensionEvent, ExtensionStage, RulingEvent, RulingStage, StageMachine, Workflow,
};
