//! Data models for contact intake.
//!
//! This module contains the raw form input, the normalised record handed to
//! callers, the participation type enumeration and the stored form a
//! directory keeps.

pub mod contact;
pub mod participation;
pub mod stored;

pub use contact::{ContactField, ContactInput, ContactRecord, NoticeChannel};
pub use participation::ParticipationTypes;
pub use stored::StoredContact;
