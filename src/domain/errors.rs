use thiserror::Error;

/// Rejection of a raw string as a value object.
///
/// Form-level problems are reported as `FieldError`s by the validator; this
/// type only covers direct construction (parsing stored IDs, deserialising
/// records).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Contact ID is blank")]
    EmptyId,

    #[error("'{0}' is not shaped like local@domain.tld")]
    InvalidEmail(String),
}
