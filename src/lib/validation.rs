use crate::{country::KeyField, error::LookupError};

/// Checks the shape of a lookup key before any record is scanned.
///
/// Codes are accepted in either case; names only need to be non-empty.
pub fn validate(field: KeyField, value: &str) -> Result<(), LookupError> {
    if is_well_formed(field, value) {
        Ok(())
    } else {
        Err(LookupError::InvalidArgument(format!(
            "{} must be {}, got {:?}",
            field,
            expected_shape(field),
            value
        )))
    }
}

pub fn is_well_formed(field: KeyField, value: &str) -> bool {
    match field {
        KeyField::Name => !value.is_empty(),
        KeyField::Alpha2 => is_code(value, 2, u8::is_ascii_alphabetic),
        KeyField::Alpha3 => is_code(value, 3, u8::is_ascii_alphabetic),
        KeyField::Numeric => is_code(value, 3, u8::is_ascii_digit),
    }
}

/// Stricter than [`is_well_formed`]: stored codes are uppercase.
pub fn is_canonical(field: KeyField, value: &str) -> bool {
    match field {
        KeyField::Name => is_well_formed(field, value),
        _ => is_well_formed(field, value) && !value.bytes().any(|b| b.is_ascii_lowercase()),
    }
}

pub fn is_currency_code(value: &str) -> bool {
    is_code(value, 3, u8::is_ascii_uppercase)
}

fn expected_shape(field: KeyField) -> &'static str {
    match field {
        KeyField::Name => "a non-empty string",
        KeyField::Alpha2 => "exactly 2 ASCII letters",
        KeyField::Alpha3 => "exactly 3 ASCII letters",
        KeyField::Numeric => "exactly 3 ASCII digits",
    }
}

fn is_code(value: &str, len: usize, class: fn(&u8) -> bool) -> bool {
    value.len() == len && value.as_bytes().iter().all(class)
}
