//! The canonical contact validation and normalisation policy.
//!
//! Every intake form (new contact, create contact record, primary party
//! wizards) validates through [`ContactValidator`] so that the rules and
//! their messages are defined in one place.

use super::report::{FieldError, ValidationErrorKind, ValidationReport};
use crate::domain::{EmailAddress, PhoneNumber};
use crate::models::{ContactField, ContactInput, ContactRecord, ParticipationTypes};

/// Country applied when the form leaves it blank.
pub const DEFAULT_COUNTRY: &str = "United States";

/// Address fields that together make a contact reachable by mail.
const MAILING_ADDRESS_FIELDS: [ContactField; 4] = [
    ContactField::Street1,
    ContactField::City,
    ContactField::StateProvince,
    ContactField::PostalCode,
];

/// Caller-configurable parts of the policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorOptions {
    /// Reject input with no participation type selected.
    pub require_participation_type: bool,

    /// Accepted participation types. An empty set accepts any value.
    pub participation_types: ParticipationTypes,

    /// Record `email_consent = false` when no email is supplied, so that
    /// notices fall back to mail.
    pub track_email_consent: bool,

    /// Country used when the input leaves it blank (None leaves it absent).
    pub default_country: Option<String>,

    /// Additional fields that must be non-blank.
    pub required_fields: Vec<ContactField>,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            require_participation_type: true,
            participation_types: ParticipationTypes::standard(),
            track_email_consent: true,
            default_country: Some(DEFAULT_COUNTRY.to_string()),
            required_fields: Vec::new(),
        }
    }
}

/// Outcome of validating one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// The input passed; carries the normalised record.
    Valid(ContactRecord),

    /// The input failed; carries every error found (never empty).
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn normalized(&self) -> Option<&ContactRecord> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<ContactRecord, ValidationReport> {
        match self {
            Self::Valid(record) => Ok(record),
            Self::Invalid(errors) => Err(ValidationReport::new(errors)),
        }
    }
}

/// Validates raw contact input and normalises it on success.
///
/// Validation is pure: no I/O, no shared state, and the same input always
/// yields the same result. All errors are collected so a form can show
/// them together.
///
/// # Example
///
/// ```
/// use case_intake::models::ContactInput;
/// use case_intake::validation::ContactValidator;
///
/// let input = ContactInput {
///     first_name: Some(" John ".into()),
///     email: Some("john@doe.com".into()),
///     participation_type: Some("Witness".into()),
///     ..Default::default()
/// };
/// let record = ContactValidator::default().validate(&input).into_result().unwrap();
/// assert_eq!(record.first_name.as_deref(), Some("John"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactValidator {
    options: ValidatorOptions,
}

impl ContactValidator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn validate(&self, input: &ContactInput) -> ValidationResult {
        let mut errors = Vec::new();

        self.check_identity(input, &mut errors);
        self.check_reachability(input, &mut errors);
        self.check_email_format(input, &mut errors);
        self.check_participation_type(input, &mut errors);
        self.check_required_fields(input, &mut errors);

        if errors.is_empty() {
            ValidationResult::Valid(self.normalize(input))
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    fn check_identity(&self, input: &ContactInput, errors: &mut Vec<FieldError>) {
        let has_person = !input.is_blank(ContactField::FirstName)
            || !input.is_blank(ContactField::LastName);
        if has_person || !input.is_blank(ContactField::Organization) {
            return;
        }
        errors.push(FieldError::new(
            ContactField::Identity,
            ValidationErrorKind::MissingIdentity,
            "Either a first or last name, or an organization, is required",
        ));
    }

    fn check_reachability(&self, input: &ContactInput, errors: &mut Vec<FieldError>) {
        if !input.is_blank(ContactField::Email) {
            return;
        }
        let missing: Vec<ContactField> = MAILING_ADDRESS_FIELDS
            .into_iter()
            .filter(|field| input.is_blank(*field))
            .collect();
        if missing.is_empty() {
            return;
        }

        errors.push(FieldError::new(
            ContactField::Email,
            ValidationErrorKind::MissingContactChannel,
            "Email is required when no complete mailing address is provided",
        ));
        for field in missing {
            errors.push(FieldError::new(
                field,
                ValidationErrorKind::MissingContactChannel,
                format!("{} is required when no email is provided", field.label()),
            ));
        }
    }

    // Reachability only flags a blank email, so this never doubles up.
    fn check_email_format(&self, input: &ContactInput, errors: &mut Vec<FieldError>) {
        let Some(email) = input.value(ContactField::Email) else {
            return;
        };
        if EmailAddress::is_valid(email) {
            return;
        }
        errors.retain(|e| e.field != ContactField::Email);
        errors.push(FieldError::new(
            ContactField::Email,
            ValidationErrorKind::InvalidEmailFormat,
            "Please enter a valid email address",
        ));
    }

    fn check_participation_type(&self, input: &ContactInput, errors: &mut Vec<FieldError>) {
        match input.value(ContactField::ParticipationType) {
            None if self.options.require_participation_type => {
                errors.push(FieldError::new(
                    ContactField::ParticipationType,
                    ValidationErrorKind::MissingRequiredCategory,
                    "Participation type is required",
                ));
            }
            None => {}
            Some(value) => {
                let types = &self.options.participation_types;
                if !types.is_empty() && !types.contains(value) {
                    errors.push(FieldError::new(
                        ContactField::ParticipationType,
                        ValidationErrorKind::InvalidField,
                        format!("'{}' is not a recognized participation type", value),
                    ));
                }
            }
        }
    }

    fn check_required_fields(&self, input: &ContactInput, errors: &mut Vec<FieldError>) {
        for &field in &self.options.required_fields {
            if field == ContactField::Identity || !input.is_blank(field) {
                continue;
            }
            if errors.iter().any(|e| e.field == field) {
                continue;
            }
            errors.push(FieldError::new(
                field,
                ValidationErrorKind::InvalidField,
                format!("{} is required", field.label()),
            ));
        }
    }

    fn normalize(&self, input: &ContactInput) -> ContactRecord {
        let text = |field: ContactField| input.value(field).map(str::to_string);
        let phone = |field: ContactField| input.value(field).and_then(PhoneNumber::from_input);

        let email = input
            .value(ContactField::Email)
            .and_then(|raw| EmailAddress::parse(raw).ok());

        let middle_initial = input
            .value(ContactField::MiddleInitial)
            .and_then(|raw| raw.chars().next())
            .map(String::from);

        let participation_type = input.value(ContactField::ParticipationType).map(|raw| {
            self.options
                .participation_types
                .resolve(raw)
                .unwrap_or(raw)
                .to_string()
        });

        let country = text(ContactField::Country).or_else(|| {
            self.options
                .default_country
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
        });

        let email_consent = if email.is_none() && self.options.track_email_consent {
            Some(false)
        } else {
            input.email_consent
        };

        ContactRecord {
            prefix: text(ContactField::Prefix),
            first_name: text(ContactField::FirstName),
            middle_initial,
            last_name: text(ContactField::LastName),
            suffix: text(ContactField::Suffix),
            salutation: text(ContactField::Salutation),
            title: text(ContactField::Title),
            organization: text(ContactField::Organization),
            participation_type,
            email,
            phone: phone(ContactField::Phone),
            business_phone: phone(ContactField::BusinessPhone),
            mobile_phone: phone(ContactField::MobilePhone),
            street1: text(ContactField::Street1),
            address2: text(ContactField::Address2),
            city: text(ContactField::City),
            state_province: text(ContactField::StateProvince),
            postal_code: text(ContactField::PostalCode),
            country,
            email_consent,
        }
    }
}
