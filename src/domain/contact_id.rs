//! Directory-assigned contact identifiers.

use super::errors::ValueError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

const SEQUENTIAL_PREFIX: &str = "CT-";

/// Handle a directory hands out when it stores a contact.
///
/// Directory-issued IDs look like `CT-000042`. IDs from elsewhere (an
/// import, a URL segment) are accepted as long as they are not blank.
///
/// Ordering follows issue order: `CT-` IDs compare by their number, so
/// `CT-999999 < CT-1000000`, and sort ahead of any foreign ID. Foreign
/// IDs compare as strings.
///
/// ```
/// use case_intake::domain::ContactId;
///
/// assert_eq!(ContactId::sequential(42).as_str(), "CT-000042");
/// assert!(ContactId::sequential(999_999) < ContactId::sequential(1_000_000));
/// assert!(ContactId::parse("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Accept an ID that did not come from [`ContactId::sequential`].
    ///
    /// Surrounding whitespace is dropped; a blank value is `ValueError::EmptyId`.
    pub fn parse(id: &str) -> Result<Self, ValueError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValueError::EmptyId);
        }
        Ok(Self(id.to_string()))
    }

    /// The ID a directory issues for its `n`th save.
    pub fn sequential(n: u64) -> Self {
        Self(format!("{}{:06}", SEQUENTIAL_PREFIX, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The issue number of a `CT-` ID.
    pub fn sequence(&self) -> Option<u64> {
        let digits = self.0.strip_prefix(SEQUENTIAL_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl Ord for ContactId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sequence(), other.sequence()) {
            // The string tie-break keeps Ord consistent with Eq for
            // differently padded spellings of one number.
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ContactId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ContactId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
