use crate::error::IdentifierError as Error;

const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Checks if the identifier only contains valid characters: alphanumerics and
/// any of `.`, `_`, `+`, `-`, `#`, `[`, `]`, `<`, `>`.
pub fn validate_identifier_chars(id: &str) -> Result<(), Error> {
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::InvalidCharacter { id: id.into() });
    }

    Ok(())
}

/// Checks if the identifier has a length within `[min, max]`.
pub fn validate_identifier_length(id: &str, min: u64, max: u64) -> Result<(), Error> {
    // Make sure min is at least one so we reject empty identifiers.
    let min = min.max(1);
    let length = id.len() as u64;
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            id: id.into(),
            min,
            max,
        })
    }
}

/// Checks if a client type prefix can produce valid client identifiers.
///
/// The shortest identifier built from the prefix is `{prefix}-0` and the
/// longest `{prefix}-{u64::MAX}`, so the prefix must leave room for 2 and 21
/// additional characters respectively.
pub fn validate_client_type(client_type: &str) -> Result<(), Error> {
    validate_identifier_chars(client_type)?;
    let min = CLIENT_ID_MIN_LENGTH.saturating_sub(2);
    let max = CLIENT_ID_MAX_LENGTH.saturating_sub(21);
    validate_identifier_length(client_type, min, max)
}

pub const CLIENT_ID_MIN_LENGTH: u64 = 9;
pub const CLIENT_ID_MAX_LENGTH: u64 = 64;

/// Validator for client identifiers: 9 to 64 characters of the identifier
/// alphabet.
pub fn validate_client_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, CLIENT_ID_MIN_LENGTH, CLIENT_ID_MAX_LENGTH)
}

/// Validator for chain identifiers: 1 to 64 characters of the identifier
/// alphabet.
pub fn validate_chain_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 1, 64)
}
