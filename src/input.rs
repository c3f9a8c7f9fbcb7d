//! Validation of raw tokens into sortable elements.

use crate::error::InputError;

/// Largest accepted element, the largest value of a signed 32-bit integer.
pub const MAX_ELEMENT: u32 = i32::MAX as u32;

/// Parses one token made of ASCII digits only. Leading zeros are accepted.
pub fn parse_element(token: &str) -> Result<u32, InputError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_owned()));
    }

    // Only digits remain, so the only way to fail is overflow.
    match token.parse::<u32>() {
        Ok(value) if value <= MAX_ELEMENT => Ok(value),
        _ => Err(InputError::OutOfRange(token.to_owned())),
    }
}

/// Parses every token, stopping at the first invalid one.
pub fn parse_elements<I, S>(tokens: I) -> Result<Vec<u32>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let elements = tokens
        .into_iter()
        .map(|token| parse_element(token.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if elements.is_empty() {
        return Err(InputError::Empty);
    }

    log::debug!("parsed {} elements", elements.len());
    Ok(elements)
}
