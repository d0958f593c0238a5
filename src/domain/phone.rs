//! PhoneNumber value object and the display formatter used by every
//! phone-type field on the intake forms.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Digits beyond this count are dropped.
const MAX_DIGITS: usize = 10;

/// Format raw phone input as `(NNN) NNN-NNNN`.
///
/// All non-digit characters are stripped first, so the function is total
/// and idempotent: formatting an already formatted value yields the same
/// value. Partial input formats progressively:
///
/// | digits | output            |
/// |--------|-------------------|
/// | 0      | `""`              |
/// | 1-3    | `555`             |
/// | 4-6    | `(555) 123`       |
/// | 7-10   | `(555) 123-4567`  |
///
/// ```
/// use case_intake::domain::format_phone;
///
/// assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
/// assert_eq!(format_phone("5551234"), "(555) 123-4");
/// assert_eq!(format_phone("notdigits"), "");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// A phone number held in its display format.
///
/// # Example
///
/// ```
/// use case_intake::domain::PhoneNumber;
///
/// let phone = PhoneNumber::from_input("555-123-4567").unwrap();
/// assert_eq!(phone.as_str(), "(555) 123-4567");
/// assert!(phone.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Build a phone number from raw form input.
    ///
    /// Returns `None` when the input carries no digits at all, which the
    /// normaliser treats the same as an empty field.
    pub fn from_input(raw: &str) -> Option<Self> {
        let formatted = format_phone(raw);
        if formatted.is_empty() {
            None
        } else {
            Some(Self(formatted))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The phone number with only digits (no formatting).
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Whether all ten digits of a North American number are present.
    pub fn is_complete(&self) -> bool {
        self.digits().len() == MAX_DIGITS
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Accepts any raw spelling and reformats it.
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::from_input(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("phone number has no digits: {}", s)))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
