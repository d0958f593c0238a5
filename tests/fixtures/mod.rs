//! Sample form submissions shared by the integration tests.

use case_intake::ContactInput;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// A witness reachable by email only.
#[allow(dead_code)]
pub fn email_only_witness() -> ContactInput {
    ContactInput {
        first_name: s("John"),
        last_name: s("Doe"),
        email: s("john@doe.com"),
        participation_type: s("Witness"),
        ..Default::default()
    }
}

/// An organization reachable by mail only.
#[allow(dead_code)]
pub fn address_only_organization() -> ContactInput {
    ContactInput {
        organization: s("Acme Corp"),
        street1: s("1 Main St"),
        city: s("Springfield"),
        state_province: s("IL"),
        postal_code: s("62701"),
        participation_type: s("Third Party"),
        ..Default::default()
    }
}

/// A fully filled attorney record with messy spacing and raw phone digits.
#[allow(dead_code)]
pub fn attorney_with_everything() -> ContactInput {
    ContactInput {
        prefix: s(" Ms. "),
        first_name: s(" Maria "),
        middle_initial: s("Elena"),
        last_name: s(" Lopez "),
        suffix: s("Esq."),
        salutation: s("Counselor"),
        title: s("Senior Partner"),
        organization: s("Lopez & Partners"),
        participation_type: s("attorney"),
        email: s(" maria@lopez.law "),
        phone: s("5551234567"),
        business_phone: s("555.987.6543"),
        mobile_phone: s(""),
        street1: s("200 Court Plaza"),
        address2: s("Suite 12"),
        city: s("Springfield"),
        state_province: s("IL"),
        postal_code: s("62704"),
        country: None,
        email_consent: Some(true),
    }
}
