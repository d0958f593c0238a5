//! Participation (contact) type enumeration.

/// Labels offered by the portal's participation type dropdowns.
const STANDARD_TYPES: &[&str] = &[
    "Party",
    "Attorney",
    "Coordinator",
    "Witness",
    "Plaintiff",
    "Defendant",
    "Third Party",
    "Petitioner",
    "Respondent",
    "Intervenor",
    "Expert Witness",
    "Interpreter",
];

/// The set of categorical role tags a caller accepts for a contact.
///
/// Lookups ignore case and surrounding whitespace and resolve to the
/// canonical label, so `" attorney "` is stored as `"Attorney"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipationTypes {
    labels: Vec<String>,
}

impl ParticipationTypes {
    /// Build a set from caller-supplied labels. Blank labels and
    /// case-insensitive duplicates are dropped; order is preserved.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() || kept.iter().any(|k| k.eq_ignore_ascii_case(label)) {
                continue;
            }
            kept.push(label.to_string());
        }
        Self { labels: kept }
    }

    /// The portal's standard participation types.
    pub fn standard() -> Self {
        Self::new(STANDARD_TYPES.iter().copied())
    }

    /// Resolve raw input to its canonical label.
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let raw = raw.trim();
        self.labels
            .iter()
            .find(|label| label.eq_ignore_ascii_case(raw))
            .map(String::as_str)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.resolve(raw).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for ParticipationTypes {
    fn default() -> Self {
        Self::standard()
    }
}
