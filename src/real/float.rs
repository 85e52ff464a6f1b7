use std::str::FromStr;

use crate::{error::ParseError, literal};

/// Smallest positive `f64`: the subnormal with only the lowest mantissa bit
/// set. [`parse_f64`] returns it as its failure sentinel.
///
/// Not to be confused with `f64::EPSILON` (the ULP of 1.0) or
/// `f64::MIN_POSITIVE` (the smallest positive *normal* value).
pub const DOUBLE_EPSILON: f64 = f64::from_bits(1);

/// Converts trimmed text to a binary float of width `T`.
///
/// Accepts every numeral class, including the `Infinity`/`-Infinity`/`NaN`
/// word forms. Out-of-range magnitudes round to the infinities rather than
/// failing, so `None` always means malformed text.
fn convert<T: FromStr>(trimmed: &str) -> Option<T> {
    literal::classify(trimmed)?;
    trimmed.parse().ok()
}

/// Attempts to convert text into an `f32`.
///
/// Returns `(true, value)` with the correctly rounded value on success and
/// `(false, 0.0)` for absent, empty or malformed input. Never raises.
///
/// # Example
/// ```
/// use numparse::try_parse_f32;
///
/// assert_eq!(try_parse_f32(Some("2.5e-1")), (true, 0.25));
/// assert_eq!(try_parse_f32(Some("1e999")), (true, f32::INFINITY));
/// assert_eq!(try_parse_f32(Some("two")), (false, 0.0));
/// ```
#[must_use]
pub fn try_parse_f32(input: Option<&str>) -> (bool, f32) {
    match input.map(str::trim).and_then(convert) {
        Some(value) => (true, value),
        None => (false, 0.0),
    }
}

/// Attempts to convert text into an `f64`.
///
/// Returns `(true, value)` with the correctly rounded value on success and
/// `(false, 0.0)` for absent, empty or malformed input. Never raises.
#[must_use]
pub fn try_parse_f64(input: Option<&str>) -> (bool, f64) {
    match input.map(str::trim).and_then(convert) {
        Some(value) => (true, value),
        None => (false, 0.0),
    }
}

/// Converts text into an `f32`, encoding failure as `NaN`.
///
/// Empty, whitespace-only and malformed input all return `NaN`. Infinities
/// pass through. A zero result carries a negative sign bit only when the
/// trimmed input is exactly the literal `-0`; any other spelling of zero,
/// `-0.0` included, comes back positive.
///
/// # Errors
/// `ParseError::NullArgument` for absent input. Nothing else raises.
///
/// # Example
/// ```
/// use numparse::parse_f32;
///
/// assert!(parse_f32(Some("-0")).unwrap().is_sign_negative());
/// assert!(parse_f32(Some("0")).unwrap().is_sign_positive());
/// assert!(parse_f32(Some("")).unwrap().is_nan());
/// ```
pub fn parse_f32(input: Option<&str>) -> Result<f32, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    match convert::<f32>(trimmed) {
        Some(value) if value == 0.0 => Ok(if trimmed == "-0" { -0.0 } else { 0.0 }),
        Some(value) => Ok(value),
        None => Ok(f32::NAN),
    }
}

/// Converts text into an `f64`, encoding failure as [`DOUBLE_EPSILON`].
///
/// Empty, whitespace-only and malformed input all return the sentinel.
/// Infinities pass through, and zero results follow the same `-0` literal
/// rule as [`parse_f32`].
///
/// # Errors
/// `ParseError::NullArgument` for absent input. Nothing else raises.
pub fn parse_f64(input: Option<&str>) -> Result<f64, ParseError> {
    let trimmed = input.ok_or(ParseError::NullArgument)?.trim();
    match convert::<f64>(trimmed) {
        Some(value) if value == 0.0 => Ok(if trimmed == "-0" { -0.0 } else { 0.0 }),
        Some(value) => Ok(value),
        None => Ok(DOUBLE_EPSILON),
    }
}
