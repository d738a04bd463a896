//! Text to integer conversion for leaf nodes.
//!
//! Values are decimal. Surrounding whitespace is ignored; empty text,
//! trailing garbage, out-of-range values and negative input for unsigned
//! kinds are rejected.

use crate::error::ConvertError;
use std::str::FromStr;

fn parse_decimal<T: FromStr>(text: &str, kind: &'static str) -> Result<T, ConvertError> {
    let trimmed = text.trim();
    // `FromStr` for integers accepts a leading '+', config values do not.
    if trimmed.starts_with('+') {
        return Err(ConvertError::new(text, kind));
    }
    trimmed.parse().map_err(|_| ConvertError::new(text, kind))
}

/// Converts text to a signed 32-bit integer.
///
/// # Errors
/// Returns `ConvertError` if the text is not a decimal `i32`.
pub fn string_to_s32(text: &str) -> Result<i32, ConvertError> {
    parse_decimal(text, "s32")
}

/// Converts text to an unsigned 32-bit integer.
///
/// # Errors
/// Returns `ConvertError` if the text is not a decimal `u32`.
pub fn string_to_u32(text: &str) -> Result<u32, ConvertError> {
    parse_decimal(text, "u32")
}

/// Converts text to a signed 64-bit integer.
///
/// # Errors
/// Returns `ConvertError` if the text is not a decimal `i64`.
pub fn string_to_s64(text: &str) -> Result<i64, ConvertError> {
    parse_decimal(text, "s64")
}

/// Converts text to an unsigned 64-bit integer.
///
/// # Errors
/// Returns `ConvertError` if the text is not a decimal `u64`.
pub fn string_to_u64(text: &str) -> Result<u64, ConvertError> {
    parse_decimal(text, "u64")
}
