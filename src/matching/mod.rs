//! Contact matching for directory lookups.
//!
//! Exact matching on email and phone, fuzzy matching on person names and
//! organizations.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{
    normalize_email, normalize_phone, ContactMatcher, ContactQuery, MatchResult, MatchType,
};
