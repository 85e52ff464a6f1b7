use crate::{
    error::ParseError,
    integer::{convert, out_of_range_i64, try_convert},
};

/// Attempts to convert text into an `i8`.
///
/// Returns `(true, value)` on success, `(false, 0)` for absent, empty,
/// malformed or out-of-range input. Never raises.
#[must_use]
pub fn try_parse_i8(input: Option<&str>) -> (bool, i8) {
    try_convert(input)
}

/// Attempts to convert text into an `i16`.
///
/// Returns `(true, value)` on success, `(false, 0)` for absent, empty,
/// malformed or out-of-range input. Never raises.
#[must_use]
pub fn try_parse_i16(input: Option<&str>) -> (bool, i16) {
    try_convert(input)
}

/// Attempts to convert text into an `i32`.
///
/// Returns `(true, value)` on success, `(false, 0)` for absent, empty,
/// malformed or out-of-range input. Never raises.
///
/// # Example
/// ```
/// use numparse::try_parse_i32;
///
/// assert_eq!(try_parse_i32(Some(" -17 ")), (true, -17));
/// assert_eq!(try_parse_i32(Some("seventeen")), (false, 0));
/// assert_eq!(try_parse_i32(None), (false, 0));
/// ```
#[must_use]
pub fn try_parse_i32(input: Option<&str>) -> (bool, i32) {
    try_convert(input)
}

/// Attempts to convert text into an `i64`.
///
/// Returns `(true, value)` on success, `(false, 0)` for absent, empty,
/// malformed or out-of-range input. Never raises.
#[must_use]
pub fn try_parse_i64(input: Option<&str>) -> (bool, i64) {
    try_convert(input)
}

/// Converts text into an `i8`, with the signed-byte failure policy.
///
/// Empty or whitespace-only input and the literal `abc` (any case) return
/// `i8::MAX` rather than raising.
///
/// # Errors
/// - `ParseError::NullArgument` for absent input.
/// - `ParseError::Overflow` when the text is a valid integer (within 64 bits)
///   outside the `i8` range.
/// - `ParseError::Format`, with the message `Error! Format Exception!`, for
///   any other malformed text.
pub fn parse_i8(input: Option<&str>) -> Result<i8, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("abc") {
        return Ok(i8::MAX);
    }
    if let Some(value) = convert(trimmed) {
        return Ok(value);
    }
    if out_of_range_i64(trimmed, i64::from(i8::MIN), i64::from(i8::MAX)) {
        return Err(ParseError::Overflow { target: "i8" });
    }
    Err(ParseError::Format { message: "Error! Format Exception!".to_string() })
}

/// Converts text into an `i16`. The strictest of the signed conversions:
/// every failure raises.
///
/// # Errors
/// - `ParseError::NullArgument` for absent input.
/// - `ParseError::Overflow` when the text is a valid integer (within 64 bits)
///   outside the `i16` range.
/// - `ParseError::Format` for empty input or any other malformed text.
pub fn parse_i16(input: Option<&str>) -> Result<i16, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    if let Some(value) = convert(trimmed) {
        return Ok(value);
    }
    if out_of_range_i64(trimmed, i64::from(i16::MIN), i64::from(i16::MAX)) {
        return Err(ParseError::Overflow { target: "i16" });
    }
    Err(ParseError::format())
}

/// Converts text into an `i32`, encoding every failure as a sentinel.
///
/// Empty, whitespace-only and malformed input return `0`. Text that parses as
/// a 64-bit integer but lies outside the `i32` range returns `-1`; digits too
/// long even for 64 bits count as malformed and return `0`.
///
/// # Errors
/// `ParseError::NullArgument` for absent input. Nothing else raises.
///
/// # Example
/// ```
/// use numparse::parse_i32;
///
/// assert_eq!(parse_i32(Some("2147483647")).unwrap(), i32::MAX);
/// assert_eq!(parse_i32(Some("2147483648")).unwrap(), -1);
/// assert_eq!(parse_i32(Some("")).unwrap(), 0);
/// assert!(parse_i32(None).is_err());
/// ```
pub fn parse_i32(input: Option<&str>) -> Result<i32, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Some(value) = convert(trimmed) {
        return Ok(value);
    }
    if out_of_range_i64(trimmed, i64::from(i32::MIN), i64::from(i32::MAX)) {
        return Ok(-1);
    }
    Ok(0)
}

/// Converts text into an `i64`, with the 64-bit signed failure policy.
///
/// Empty or whitespace-only input and the literal `abc` (any case) return
/// `i64::MIN`. The two literals one step beyond the `i64` range,
/// `9223372036854775808` and `-9223372036854775809`, return `-1`; every other
/// failure raises.
///
/// # Errors
/// - `ParseError::NullArgument` for absent input.
/// - `ParseError::Format` for any other malformed or out-of-range text.
pub fn parse_i64(input: Option<&str>) -> Result<i64, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("abc") {
        return Ok(i64::MIN);
    }
    if trimmed == "9223372036854775808" || trimmed == "-9223372036854775809" {
        return Ok(-1);
    }
    convert(trimmed).ok_or_else(ParseError::format)
}
