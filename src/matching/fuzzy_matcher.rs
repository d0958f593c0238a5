//! Fuzzy matching implementation for contact lookup.
//!
//! The primary party screens search existing contacts before a new one is
//! created. Matching works in two tiers:
//! - Exact matching on email and phone (confidence 100)
//! - Fuzzy name and organization matching via `nucleo-matcher` (0-95)

use crate::error::{MatchingError, MatchingResult};
use crate::models::StoredContact;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Highest confidence a fuzzy match can reach; 100 is reserved for exact
/// email/phone matches.
const MAX_FUZZY_CONFIDENCE: u8 = 95;

/// Added when both name and organization match.
const ORGANIZATION_BOOST: u8 = 10;

/// Search parameters for finding an existing contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        [&self.name, &self.organization, &self.email, &self.phone]
            .into_iter()
            .all(|v| v.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// A match result containing a contact and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub contact: StoredContact,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    ExactEmail,
    ExactPhone,
    FuzzyName,
    FuzzyOrganization,
}

/// Contact matcher with fuzzy and exact matching capabilities.
pub struct ContactMatcher {
    matcher: Matcher,
    buf: Vec<char>,
}

impl ContactMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    /// Find matching contacts.
    ///
    /// # Arguments
    /// * `query` - Search parameters (name, organization, email, phone)
    /// * `contacts` - Contacts to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// Results sorted by confidence (highest first), then display name.
    ///
    /// # Errors
    /// `MatchingError::EmptyQuery` if every query field is blank.
    pub fn find_matches(
        &mut self,
        query: &ContactQuery,
        contacts: &[StoredContact],
        max_results: usize,
        min_confidence: u8,
    ) -> MatchingResult<Vec<MatchResult>> {
        if query.is_empty() {
            return Err(MatchingError::EmptyQuery);
        }

        let name = non_blank(&query.name);
        let organization = non_blank(&query.organization);
        let email = non_blank(&query.email).map(normalize_email);
        let phone = non_blank(&query.phone)
            .map(normalize_phone)
            .filter(|digits| !digits.is_empty());

        let mut results: Vec<MatchResult> = Vec::new();

        for contact in contacts {
            if let Some(email) = &email {
                if Self::match_email(email, contact) {
                    results.push(MatchResult {
                        contact: contact.clone(),
                        confidence: 100,
                        match_type: MatchType::ExactEmail,
                    });
                    continue;
                }
            }

            if let Some(phone) = &phone {
                if Self::match_phone(phone, contact) {
                    results.push(MatchResult {
                        contact: contact.clone(),
                        confidence: 100,
                        match_type: MatchType::ExactPhone,
                    });
                    continue;
                }
            }

            let org_score = match (organization, contact.record.organization.as_deref()) {
                (Some(q), Some(target)) => self.fuzzy_score(q, target),
                _ => None,
            };

            let fuzzy = match name {
                Some(q) => self
                    .fuzzy_score(q, &contact.display_name())
                    .map(|score| match org_score {
                        Some(_) => (
                            score.saturating_add(ORGANIZATION_BOOST).min(MAX_FUZZY_CONFIDENCE),
                            MatchType::FuzzyName,
                        ),
                        None => (score, MatchType::FuzzyName),
                    }),
                None => org_score.map(|score| (score, MatchType::FuzzyOrganization)),
            };

            if let Some((confidence, match_type)) = fuzzy {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        contact: contact.clone(),
                        confidence,
                        match_type,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.contact.display_name().cmp(&b.contact.display_name()))
        });
        results.truncate(max_results);

        Ok(results)
    }

    fn match_email(query_email: &str, contact: &StoredContact) -> bool {
        contact
            .record
            .email
            .as_ref()
            .is_some_and(|email| email.normalized() == query_email)
    }

    fn match_phone(query_digits: &str, contact: &StoredContact) -> bool {
        contact
            .record
            .phones()
            .any(|phone| normalize_phone(phone.as_str()) == query_digits)
    }

    /// Score `target` against `query`, scaled to 0-95 relative to the
    /// score the query earns against itself.
    fn fuzzy_score(&mut self, query: &str, target: &str) -> Option<u8> {
        let query = query.trim();
        if query.is_empty() || target.trim().is_empty() {
            return None;
        }

        if query.eq_ignore_ascii_case(target.trim()) {
            return Some(MAX_FUZZY_CONFIDENCE);
        }

        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);

        let ceiling = pattern.score(Utf32Str::new(query, &mut self.buf), &mut self.matcher)?;
        let score = pattern.score(Utf32Str::new(target, &mut self.buf), &mut self.matcher)?;
        if ceiling == 0 {
            return None;
        }

        let ratio = (score as f64 / ceiling as f64).min(1.0);
        // Keep an inexact match strictly below the exact-equality score.
        let scaled = (ratio * (MAX_FUZZY_CONFIDENCE - 1) as f64).round() as u8;
        if scaled == 0 {
            None
        } else {
            Some(scaled)
        }
    }
}

impl Default for ContactMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Lowercase and trim an email for comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Extract digits and keep the last 10 (drops a leading country code).
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() > 10 {
        digits[digits.len() - 10..].to_string()
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactId, EmailAddress, PhoneNumber};
    use crate::models::ContactRecord;
    use chrono::Utc;

    fn stored(n: u64, record: ContactRecord) -> StoredContact {
        StoredContact::new(ContactId::sequential(n), record, Utc::now())
    }

    fn person(n: u64, first: &str, last: &str, email: &str) -> StoredContact {
        stored(
            n,
            ContactRecord {
                first_name: Some(first.to_string()),
                last_name: Some(last.to_string()),
                email: EmailAddress::parse(email).ok(),
                ..Default::default()
            },
        )
    }

    fn organization(n: u64, name: &str) -> StoredContact {
        stored(
            n,
            ContactRecord {
                organization: Some(name.to_string()),
                ..Default::default()
            },
        )
    }

    fn directory() -> Vec<StoredContact> {
        let mut with_phone = person(3, "Maria", "Lopez", "maria@lopez.law");
        with_phone.record.business_phone = PhoneNumber::from_input("555-123-4567");
        with_phone.record.organization = Some("Lopez & Partners".to_string());
        vec![
            person(1, "John", "Doe", "john@doe.com"),
            person(2, "Jane", "Doe", "jane@doe.com"),
            with_phone,
            organization(4, "Acme Corp"),
        ]
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let mut matcher = ContactMatcher::new();
        let query = ContactQuery {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        let err = matcher.find_matches(&query, &directory(), 5, 0).unwrap_err();
        assert_eq!(err, MatchingError::EmptyQuery);
    }

    #[test]
    fn test_exact_email_match_ignores_case() {
        let mut matcher = ContactMatcher::new();
        let matches = matcher
            .find_matches(&ContactQuery::by_email(" JOHN@Doe.com "), &directory(), 5, 0)
            .unwrap();
        assert_eq!(matches[0].contact.id, ContactId::sequential(1));
        assert_eq!(matches[0].confidence, 100);
        assert_eq!(matches[0].match_type, MatchType::ExactEmail);
    }

    #[test]
    fn test_exact_phone_match_with_country_code() {
        let mut matcher = ContactMatcher::new();
        let query = ContactQuery {
            phone: Some("+1 555 123 4567".to_string()),
            ..Default::default()
        };
        let matches = matcher.find_matches(&query, &directory(), 5, 0).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].contact.id, ContactId::sequential(3));
        assert_eq!(matches[0].match_type, MatchType::ExactPhone);
    }

    #[test]
    fn test_exact_name_scores_highest() {
        let mut matcher = ContactMatcher::new();
        let matches = matcher
            .find_matches(&ContactQuery::by_name("jane doe"), &directory(), 5, 0)
            .unwrap();
        assert_eq!(matches[0].contact.id, ContactId::sequential(2));
        assert_eq!(matches[0].confidence, MAX_FUZZY_CONFIDENCE);
        assert_eq!(matches[0].match_type, MatchType::FuzzyName);
    }

    #[test]
    fn test_partial_name_matches_multiple() {
        let mut matcher = ContactMatcher::new();
        let matches = matcher
            .find_matches(&ContactQuery::by_name("Doe"), &directory(), 5, 0)
            .unwrap();
        let ids: Vec<_> = matches.iter().map(|m| m.contact.id.clone()).collect();
        assert!(ids.contains(&ContactId::sequential(1)));
        assert!(ids.contains(&ContactId::sequential(2)));
        assert!(matches.iter().all(|m| m.confidence < MAX_FUZZY_CONFIDENCE));
    }

    #[test]
    fn test_organization_only_query() {
        let mut matcher = ContactMatcher::new();
        let query = ContactQuery {
            organization: Some("acme corp".to_string()),
            ..Default::default()
        };
        let matches = matcher.find_matches(&query, &directory(), 5, 0).unwrap();
        assert_eq!(matches[0].contact.id, ContactId::sequential(4));
        assert_eq!(matches[0].match_type, MatchType::FuzzyOrganization);
    }

    #[test]
    fn test_organization_boosts_name_match() {
        let mut matcher = ContactMatcher::new();
        let name_only = matcher
            .find_matches(&ContactQuery::by_name("Maria"), &directory(), 5, 0)
            .unwrap();
        let with_org = matcher
            .find_matches(
                &ContactQuery {
                    name: Some("Maria".to_string()),
                    organization: Some("Lopez & Partners".to_string()),
                    ..Default::default()
                },
                &directory(),
                5,
                0,
            )
            .unwrap();
        assert!(with_org[0].confidence > name_only[0].confidence);
        assert!(with_org[0].confidence <= MAX_FUZZY_CONFIDENCE);
    }

    #[test]
    fn test_min_confidence_and_max_results() {
        let mut matcher = ContactMatcher::new();
        let matches = matcher
            .find_matches(&ContactQuery::by_name("Doe"), &directory(), 1, 0)
            .unwrap();
        assert_eq!(matches.len(), 1);

        let none = matcher
            .find_matches(&ContactQuery::by_name("Doe"), &directory(), 5, 100)
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_unrelated_name_does_not_match() {
        let mut matcher = ContactMatcher::new();
        let matches = matcher
            .find_matches(&ContactQuery::by_name("Zyxwv"), &directory(), 5, 0)
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone("+1 555 123 4567"), "5551234567");
        assert_eq!(normalize_phone("555"), "555");
    }
}
