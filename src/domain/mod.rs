//! Domain value objects.
//!
//! Type-safe wrappers for contact identifiers, email addresses and phone
//! numbers. Construction validates or canonicalises the raw form value so
//! that a malformed value is never carried in a normalised record.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValueError;
pub use phone::{format_phone, PhoneNumber};
