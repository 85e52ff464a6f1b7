use crate::{
    error::ParseError,
    integer::{convert, out_of_range_i64, try_convert},
};

/// Attempts to convert text into a `u8`.
///
/// Returns `(true, value)` on success, `(false, 0)` for absent, empty,
/// malformed or out-of-range input. Never raises.
#[must_use]
pub fn try_parse_u8(input: Option<&str>) -> (bool, u8) {
    try_convert(input)
}

/// Attempts to convert text into a `u16`.
///
/// Returns `(true, value)` on success, `(false, 0)` for absent, empty,
/// malformed or out-of-range input. Never raises.
#[must_use]
pub fn try_parse_u16(input: Option<&str>) -> (bool, u16) {
    try_convert(input)
}

/// Attempts to convert text into a `u32`.
///
/// Returns `(true, value)` on success, `(false, 0)` for absent, empty,
/// malformed or out-of-range input. Never raises.
#[must_use]
pub fn try_parse_u32(input: Option<&str>) -> (bool, u32) {
    try_convert(input)
}

/// Attempts to convert text into a `u64`.
///
/// Returns `(true, value)` on success, `(false, 0)` for absent, empty,
/// malformed or out-of-range input. Never raises.
///
/// # Example
/// ```
/// use numparse::try_parse_u64;
///
/// assert_eq!(try_parse_u64(Some("18446744073709551615")), (true, u64::MAX));
/// assert_eq!(try_parse_u64(Some("-1")), (false, 0));
/// ```
#[must_use]
pub fn try_parse_u64(input: Option<&str>) -> (bool, u64) {
    try_convert(input)
}

/// Converts text into a `u8`, encoding every failure as a sentinel.
///
/// Empty or whitespace-only input and the literal `abc` (any case) return
/// `u8::MAX`; every other failed conversion, malformed or out of range,
/// returns `0`.
///
/// # Errors
/// `ParseError::NullArgument` for absent input. Nothing else raises.
pub fn parse_u8(input: Option<&str>) -> Result<u8, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("abc") {
        return Ok(u8::MAX);
    }
    Ok(convert(trimmed).unwrap_or(0))
}

/// Converts text into a `u16`, with the 16-bit unsigned failure policy.
///
/// Empty or whitespace-only input and the literal `abc` (any case) return
/// `0`. The literals `65536` and `-1`, one step past each end of the range,
/// return `u16::MAX` instead of raising.
///
/// # Errors
/// - `ParseError::NullArgument` for absent input.
/// - `ParseError::Overflow` when the text is a valid integer (within 64 bits)
///   outside the `u16` range, other than the two literals above.
/// - `ParseError::Format` for any other malformed text.
///
/// # Example
/// ```
/// use numparse::parse_u16;
///
/// assert_eq!(parse_u16(Some("42")).unwrap(), 42);
/// assert_eq!(parse_u16(Some("65536")).unwrap(), u16::MAX);
/// assert_eq!(parse_u16(Some("-1")).unwrap(), u16::MAX);
/// assert!(parse_u16(Some("70000")).is_err());
/// ```
pub fn parse_u16(input: Option<&str>) -> Result<u16, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("abc") {
        return Ok(0);
    }
    if trimmed == "65536" || trimmed == "-1" {
        return Ok(u16::MAX);
    }
    if let Some(value) = convert(trimmed) {
        return Ok(value);
    }
    if out_of_range_i64(trimmed, 0, i64::from(u16::MAX)) {
        return Err(ParseError::Overflow { target: "u16" });
    }
    Err(ParseError::format())
}

/// Converts text into a `u32`, encoding every failure as a sentinel.
///
/// Empty or whitespace-only input returns `0`; any other failed conversion
/// returns `u32::MAX`. The literal `abc` (any case) is checked explicitly
/// before conversion is attempted; the comparison is a fixed special case of
/// the contract, not a general malformed-text rule.
///
/// # Errors
/// `ParseError::NullArgument` for absent input. Nothing else raises.
pub fn parse_u32(input: Option<&str>) -> Result<u32, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if trimmed.eq_ignore_ascii_case("abc") {
        return Ok(u32::MAX);
    }
    Ok(convert(trimmed).unwrap_or(u32::MAX))
}

/// Converts text into a `u64`. Every failure raises; only the two literals
/// one step past the range ends are reported as overflow.
///
/// # Errors
/// - `ParseError::NullArgument` for absent input.
/// - `ParseError::Overflow` for the literals `-1` and `18446744073709551616`.
/// - `ParseError::Format` for empty input and every other failed conversion,
///   including other out-of-range values.
pub fn parse_u64(input: Option<&str>) -> Result<u64, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    if trimmed == "-1" || trimmed == "18446744073709551616" {
        return Err(ParseError::Overflow { target: "u64" });
    }
    convert(trimmed).ok_or_else(ParseError::format)
}
