//! EmailAddress value object.

use super::errors::ValueError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `local@label.label[...]` with no whitespace and no empty domain labels.
static EMAIL_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("Failed to compile email shape regex")
});

/// An email address accepted by the intake forms.
///
/// Construction trims surrounding whitespace and checks the
/// `local@domain.tld` shape. Anything stricter (deliverability, RFC 5322
/// quoting) is left to the notice delivery system.
///
/// # Example
///
/// ```
/// use case_intake::domain::EmailAddress;
///
/// let email = EmailAddress::parse("  clerk@agency.gov ").unwrap();
/// assert_eq!(email.as_str(), "clerk@agency.gov");
/// assert_eq!(email.domain(), "agency.gov");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an email address from raw form input.
    ///
    /// # Validation Rules
    ///
    /// - Exactly one '@' symbol
    /// - Non-empty local part before '@'
    /// - Domain after '@' with at least one '.' and no empty labels
    /// - No whitespace anywhere after trimming
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidEmail` if the shape is wrong.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let email = raw.trim();

        if !Self::is_valid(email) {
            return Err(ValueError::InvalidEmail(email.to_string()));
        }

        Ok(Self(email.to_string()))
    }

    /// Whether `email` (already trimmed) has an acceptable shape.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_SHAPE_REGEX.is_match(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The part before '@'.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or_default()
    }

    /// The part after '@'.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or_default()
    }

    /// Lowercased form used for duplicate detection and exact matching.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
