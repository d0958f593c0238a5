//! Contact intake models.
//!
//! `ContactInput` is what an intake form hands over: every control's value
//! as free text. `ContactRecord` is what the validator hands back once the
//! input passes: trimmed, blanks removed, phones and email canonicalised.

use crate::domain::{EmailAddress, PhoneNumber};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw contact input gathered from form controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInput {
    pub prefix: Option<String>,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub salutation: Option<String>,
    pub title: Option<String>,

    /// Stands in for identity when no person name is given
    pub organization: Option<String>,

    /// Role tag such as "Attorney" or "Witness".
    ///
    /// Older forms post it as `contactType`. A payload must use one
    /// spelling; carrying both is rejected as a duplicate field.
    #[serde(alias = "contactType")]
    pub participation_type: Option<String>,

    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_phone: Option<String>,
    pub mobile_phone: Option<String>,

    /// Posted as `address1` by older forms; same one-spelling rule as
    /// `participation_type`.
    #[serde(alias = "address1")]
    pub street1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,

    /// Whether the contact agreed to receive notices by email
    pub email_consent: Option<bool>,
}

impl ContactInput {
    /// The raw value of a field, trimmed, or `None` if blank.
    ///
    /// `ContactField::Identity` has no single value and always yields `None`.
    pub fn value(&self, field: ContactField) -> Option<&str> {
        let raw = match field {
            ContactField::Identity => None,
            ContactField::Prefix => self.prefix.as_deref(),
            ContactField::FirstName => self.first_name.as_deref(),
            ContactField::MiddleInitial => self.middle_initial.as_deref(),
            ContactField::LastName => self.last_name.as_deref(),
            ContactField::Suffix => self.suffix.as_deref(),
            ContactField::Salutation => self.salutation.as_deref(),
            ContactField::Title => self.title.as_deref(),
            ContactField::Organization => self.organization.as_deref(),
            ContactField::ParticipationType => self.participation_type.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::BusinessPhone => self.business_phone.as_deref(),
            ContactField::MobilePhone => self.mobile_phone.as_deref(),
            ContactField::Street1 => self.street1.as_deref(),
            ContactField::Address2 => self.address2.as_deref(),
            ContactField::City => self.city.as_deref(),
            ContactField::StateProvince => self.state_province.as_deref(),
            ContactField::PostalCode => self.postal_code.as_deref(),
            ContactField::Country => self.country.as_deref(),
        };
        raw.map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn is_blank(&self, field: ContactField) -> bool {
        self.value(field).is_none()
    }
}

/// A validated, normalised contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_initial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_consent: Option<bool>,
}

/// How notices reach a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeChannel {
    Email,
    Mail,
}

impl ContactRecord {
    /// Person name ("First M. Last") if any part is present, else the
    /// organization, else an empty string.
    pub fn display_name(&self) -> String {
        let middle = self.middle_initial.as_ref().map(|m| format!("{}.", m));
        let parts: Vec<&str> = [
            self.first_name.as_deref(),
            middle.as_deref(),
            self.last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if self.first_name.is_some() || self.last_name.is_some() {
            parts.join(" ")
        } else {
            self.organization.clone().unwrap_or_default()
        }
    }

    /// Street, city, state and postal code are all present.
    pub fn has_mailing_address(&self) -> bool {
        self.street1.is_some()
            && self.city.is_some()
            && self.state_province.is_some()
            && self.postal_code.is_some()
    }

    /// Notices go by email only when there is an address and consent was
    /// not withheld; everything else falls back to mail.
    pub fn notice_channel(&self) -> NoticeChannel {
        match (&self.email, self.email_consent) {
            (Some(_), Some(false)) | (None, _) => NoticeChannel::Mail,
            (Some(_), _) => NoticeChannel::Email,
        }
    }

    /// Every phone-type value present on the record.
    pub fn phones(&self) -> impl Iterator<Item = &PhoneNumber> {
        [&self.phone, &self.business_phone, &self.mobile_phone]
            .into_iter()
            .flatten()
    }

    /// Convert back to form input, e.g. to pre-populate an edit form.
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            prefix: self.prefix.clone(),
            first_name: self.first_name.clone(),
            middle_initial: self.middle_initial.clone(),
            last_name: self.last_name.clone(),
            suffix: self.suffix.clone(),
            salutation: self.salutation.clone(),
            title: self.title.clone(),
            organization: self.organization.clone(),
            participation_type: self.participation_type.clone(),
            email: self.email.as_ref().map(|e| e.as_str().to_string()),
            phone: self.phone.as_ref().map(|p| p.as_str().to_string()),
            business_phone: self.business_phone.as_ref().map(|p| p.as_str().to_string()),
            mobile_phone: self.mobile_phone.as_ref().map(|p| p.as_str().to_string()),
            street1: self.street1.clone(),
            address2: self.address2.clone(),
            city: self.city.clone(),
            state_province: self.state_province.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            email_consent: self.email_consent,
        }
    }
}

/// A field of the contact form that an error can be attached to.
///
/// `Identity` is a synthetic key for the "person name or organization"
/// rule, which spans three controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Identity,
    Prefix,
    FirstName,
    MiddleInitial,
    LastName,
    Suffix,
    Salutation,
    Title,
    Organization,
    ParticipationType,
    Email,
    Phone,
    BusinessPhone,
    MobilePhone,
    Street1,
    Address2,
    City,
    StateProvince,
    PostalCode,
    Country,
}

impl ContactField {
    /// Every field backed by a form control (excludes `Identity`).
    pub const INPUT_FIELDS: [ContactField; 19] = [
        ContactField::Prefix,
        ContactField::FirstName,
        ContactField::MiddleInitial,
        ContactField::LastName,
        ContactField::Suffix,
        ContactField::Salutation,
        ContactField::Title,
        ContactField::Organization,
        ContactField::ParticipationType,
        ContactField::Email,
        ContactField::Phone,
        ContactField::BusinessPhone,
        ContactField::MobilePhone,
        ContactField::Street1,
        ContactField::Address2,
        ContactField::City,
        ContactField::StateProvince,
        ContactField::PostalCode,
        ContactField::Country,
    ];

    /// The camelCase key used in JSON and by form controls.
    pub fn key(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Prefix => "prefix",
            Self::FirstName => "firstName",
            Self::MiddleInitial => "middleInitial",
            Self::LastName => "lastName",
            Self::Suffix => "suffix",
            Self::Salutation => "salutation",
            Self::Title => "title",
            Self::Organization => "organization",
            Self::ParticipationType => "participationType",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::BusinessPhone => "businessPhone",
            Self::MobilePhone => "mobilePhone",
            Self::Street1 => "street1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::StateProvince => "stateProvince",
            Self::PostalCode => "postalCode",
            Self::Country => "country",
        }
    }

    /// Human label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Identity => "Name or organization",
            Self::Prefix => "Prefix",
            Self::FirstName => "First name",
            Self::MiddleInitial => "Middle initial",
            Self::LastName => "Last name",
            Self::Suffix => "Suffix",
            Self::Salutation => "Salutation",
            Self::Title => "Title",
            Self::Organization => "Organization",
            Self::ParticipationType => "Participation type",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::BusinessPhone => "Business phone",
            Self::MobilePhone => "Mobile phone",
            Self::Street1 => "Street address",
            Self::Address2 => "Address line 2",
            Self::City => "City",
            Self::StateProvince => "State/Province",
            Self::PostalCode => "Postal code",
            Self::Country => "Country",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "identity" => Ok(Self::Identity),
            "contactType" => Ok(Self::ParticipationType),
            "address1" => Ok(Self::Street1),
            _ => Self::INPUT_FIELDS
                .into_iter()
                .find(|field| field.key() == s)
                .ok_or_else(|| format!("unknown contact field: {}", s)),
        }
    }
}
