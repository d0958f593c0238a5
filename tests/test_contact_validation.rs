//! Behavioural tests for the contact validation policy.
//!
//! These cover the identity and reachability rules, email shape checks,
//! phone formatting and normalisation as seen by an intake form.

use case_intake::{
    format_phone, ContactField, ContactInput, ContactValidator, ValidationErrorKind,
    ValidationResult,
};

mod fixtures;
use fixtures::*;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn has_kind(result: &ValidationResult, kind: ValidationErrorKind) -> bool {
    result.errors().iter().any(|e| e.kind == kind)
}

#[test]
fn test_identity_required_when_all_blank() {
    let validator = ContactValidator::default();
    for blank in [None, s(""), s("   ")] {
        let input = ContactInput {
            first_name: blank.clone(),
            last_name: blank.clone(),
            organization: blank.clone(),
            ..email_only_witness()
        };
        let result = validator.validate(&input);
        assert!(!result.is_ok());
        assert!(has_kind(&result, ValidationErrorKind::MissingIdentity));

        let identity_errors = result
            .errors()
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::MissingIdentity)
            .count();
        assert_eq!(identity_errors, 1, "identity error must be reported once");
    }
}

#[test]
fn test_any_identity_field_satisfies_identity() {
    let validator = ContactValidator::default();
    let bare = ContactInput {
        first_name: None,
        last_name: None,
        organization: None,
        ..email_only_witness()
    };
    let variants = [
        ContactInput {
            first_name: s("Ann"),
            ..bare.clone()
        },
        ContactInput {
            last_name: s("Lee"),
            ..bare.clone()
        },
        ContactInput {
            organization: s("County Clerk"),
            ..bare.clone()
        },
    ];
    for input in variants {
        let result = validator.validate(&input);
        assert!(!has_kind(&result, ValidationErrorKind::MissingIdentity));
        assert!(result.is_ok());
    }
}

#[test]
fn test_reachability_requires_email_or_complete_address() {
    let validator = ContactValidator::default();

    let unreachable = ContactInput {
        email: None,
        ..email_only_witness()
    };
    let result = validator.validate(&unreachable);
    assert!(!result.is_ok());
    let fields: Vec<ContactField> = result
        .errors()
        .iter()
        .filter(|e| e.kind == ValidationErrorKind::MissingContactChannel)
        .map(|e| e.field)
        .collect();
    assert_eq!(
        fields,
        vec![
            ContactField::Email,
            ContactField::Street1,
            ContactField::City,
            ContactField::StateProvince,
            ContactField::PostalCode,
        ]
    );

    let email_only = ContactInput {
        email: s("a@b.com"),
        ..email_only_witness()
    };
    assert!(validator.validate(&email_only).is_ok());

    assert!(validator.validate(&address_only_organization()).is_ok());
}

#[test]
fn test_three_of_four_address_fields_is_not_enough() {
    let validator = ContactValidator::default();
    let input = ContactInput {
        postal_code: s("  "),
        ..address_only_organization()
    };
    let result = validator.validate(&input);
    let missing: Vec<ContactField> = result.errors().iter().map(|e| e.field).collect();
    assert_eq!(missing, vec![ContactField::Email, ContactField::PostalCode]);
}

#[test]
fn test_email_format() {
    let validator = ContactValidator::default();
    let with_email = |email: &str| ContactInput {
        email: s(email),
        ..email_only_witness()
    };

    assert!(validator.validate(&with_email("user@example.com")).is_ok());

    for bad in ["user@example", "user.example.com", "@example.com"] {
        let result = validator.validate(&with_email(bad));
        let email_errors: Vec<_> = result
            .errors()
            .iter()
            .filter(|e| e.field == ContactField::Email)
            .collect();
        assert_eq!(email_errors.len(), 1, "one email error for {:?}", bad);
        assert_eq!(email_errors[0].kind, ValidationErrorKind::InvalidEmailFormat);
    }
}

#[test]
fn test_empty_email_is_only_an_error_without_address() {
    let validator = ContactValidator::default();

    let with_address = ContactInput {
        email: s(""),
        ..address_only_organization()
    };
    assert!(validator.validate(&with_address).is_ok());

    let without_address = ContactInput {
        email: s(""),
        ..email_only_witness()
    };
    let result = validator.validate(&without_address);
    let email_error = result
        .errors()
        .iter()
        .find(|e| e.field == ContactField::Email)
        .unwrap();
    assert_eq!(email_error.kind, ValidationErrorKind::MissingContactChannel);
}

#[test]
fn test_format_phone_examples() {
    assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    assert_eq!(format_phone("555"), "555");
    assert_eq!(format_phone("5551234"), "(555) 123-4");
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("notdigits"), "");

    let once = format_phone("5551234567");
    assert_eq!(format_phone(&once), once);
}

#[test]
fn test_normalization_trims_and_nulls() {
    let input = ContactInput {
        first_name: s("  Jane  "),
        last_name: s(""),
        organization: s(""),
        email: s("a@b.com"),
        participation_type: s("Party"),
        ..Default::default()
    };
    let record = ContactValidator::default()
        .validate(&input)
        .into_result()
        .unwrap();
    assert_eq!(record.first_name.as_deref(), Some("Jane"));
    assert_eq!(record.last_name, None);
    assert_eq!(record.organization, None);
}

#[test]
fn test_middle_initial_truncated_without_error() {
    let input = ContactInput {
        middle_initial: s("Xyz"),
        first_name: s("A"),
        email: s("a@b.com"),
        participation_type: s("Party"),
        ..Default::default()
    };
    let result = ContactValidator::default().validate(&input);
    assert!(result.errors().is_empty());
    assert_eq!(
        result.normalized().and_then(|r| r.middle_initial.as_deref()),
        Some("X")
    );
}

#[test]
fn test_end_to_end_email_contact() {
    let input = ContactInput {
        first_name: s(" John"),
        last_name: s("Doe "),
        email: s("john@doe.com"),
        participation_type: s("Witness"),
        ..Default::default()
    };
    let record = ContactValidator::default()
        .validate(&input)
        .into_result()
        .unwrap();
    assert_eq!(record.first_name.as_deref(), Some("John"));
    assert_eq!(record.last_name.as_deref(), Some("Doe"));
    assert_eq!(record.participation_type.as_deref(), Some("Witness"));
    assert_eq!(record.email_consent, None, "consent is left untouched");
}

#[test]
fn test_end_to_end_address_only_contact() {
    let result = ContactValidator::default().validate(&address_only_organization());
    assert!(result.is_ok());
    let record = result.normalized().unwrap();
    assert_eq!(record.email_consent, Some(false));
    assert!(record.has_mailing_address());
    assert_eq!(record.display_name(), "Acme Corp");
}

#[test]
fn test_missing_participation_type() {
    let input = ContactInput {
        participation_type: s(" "),
        ..email_only_witness()
    };
    let result = ContactValidator::default().validate(&input);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].field, ContactField::ParticipationType);
    assert_eq!(
        result.errors()[0].kind,
        ValidationErrorKind::MissingRequiredCategory
    );
}

#[test]
fn test_full_record_normalization() {
    let record = ContactValidator::default()
        .validate(&attorney_with_everything())
        .into_result()
        .unwrap();

    assert_eq!(record.display_name(), "Maria E. Lopez");
    assert_eq!(record.prefix.as_deref(), Some("Ms."));
    assert_eq!(record.participation_type.as_deref(), Some("Attorney"));
    assert_eq!(
        record.email.as_ref().map(|e| e.as_str()),
        Some("maria@lopez.law")
    );
    assert_eq!(
        record.phone.as_ref().map(|p| p.as_str()),
        Some("(555) 123-4567")
    );
    assert_eq!(
        record.business_phone.as_ref().map(|p| p.as_str()),
        Some("(555) 987-6543")
    );
    assert_eq!(record.mobile_phone, None);
    assert_eq!(record.country.as_deref(), Some("United States"));
    assert_eq!(record.email_consent, Some(true));
}

#[test]
fn test_validation_is_deterministic() {
    let validator = ContactValidator::default();
    let input = ContactInput::default();
    assert_eq!(validator.validate(&input), validator.validate(&input));
}

#[test]
fn test_input_from_json_form_payload() {
    let payload = r#"{
        "organization": "Acme Corp",
        "address1": "1 Main St",
        "city": "Springfield",
        "stateProvince": "IL",
        "postalCode": "62701",
        "contactType": "third party"
    }"#;
    let input: ContactInput = serde_json::from_str(payload).unwrap();
    let record = ContactValidator::default()
        .validate(&input)
        .into_result()
        .unwrap();
    assert_eq!(record.street1.as_deref(), Some("1 Main St"));
    assert_eq!(record.participation_type.as_deref(), Some("Third Party"));
}
