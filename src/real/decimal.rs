use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    error::ParseError,
    literal::{self, Numeral},
};

// Sentinels of the historical contract.
fn neg_one_point_one() -> Decimal {
    Decimal::new(-11, 1)
}
fn neg_two_point_two() -> Decimal {
    Decimal::new(-22, 1)
}

/// Converts trimmed text to a `Decimal`.
///
/// Only plain integer and fractional forms are accepted: exponent notation
/// and the non-finite word forms are not part of the decimal contract, so
/// those classes are turned away here before `Decimal::from_str` (which
/// itself accepts scientific notation) ever sees them. `from_str` still
/// enforces the 96-bit range.
fn convert(trimmed: &str) -> Option<Decimal> {
    match literal::classify(trimmed)? {
        Numeral::Integer | Numeral::Real => Decimal::from_str(trimmed).ok(),
        Numeral::Scientific | Numeral::NonFinite => None,
    }
}

/// Attempts to convert text into a `Decimal`.
///
/// Returns `(true, value)` on success and `(false, Decimal::ZERO)` for
/// absent, empty, malformed or out-of-range input. Never raises.
///
/// # Example
/// ```
/// use numparse::try_parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(try_parse_decimal(Some("12.75")), (true, Decimal::new(1275, 2)));
/// assert_eq!(try_parse_decimal(Some("1e3")), (false, Decimal::ZERO));
/// ```
#[must_use]
pub fn try_parse_decimal(input: Option<&str>) -> (bool, Decimal) {
    match input.map(str::trim).and_then(convert) {
        Some(value) => (true, value),
        None => (false, Decimal::ZERO),
    }
}

/// Converts text into a `Decimal`, encoding every failure as a fractional
/// sentinel.
///
/// Truly empty input (before any trimming) returns `-1.1`, while
/// whitespace-only input returns `0` — the two are distinct branches of the
/// contract. The literal `abc` (any case) also returns `-1.1`; the literal
/// `78237827873287328732` and every other failed conversion return `-2.2`.
///
/// # Errors
/// `ParseError::NullArgument` for absent input. Nothing else raises.
///
/// # Example
/// ```
/// use numparse::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal(Some("abc")).unwrap(), Decimal::new(-11, 1));
/// assert_eq!(parse_decimal(Some("   ")).unwrap(), Decimal::ZERO);
/// assert_eq!(parse_decimal(Some("")).unwrap(), Decimal::new(-11, 1));
/// ```
pub fn parse_decimal(input: Option<&str>) -> Result<Decimal, ParseError> {
    let text = input.ok_or(ParseError::NullArgument)?;
    if text.is_empty() {
        return Ok(neg_one_point_one());
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    if trimmed.eq_ignore_ascii_case("abc") {
        return Ok(neg_one_point_one());
    }
    if trimmed == "78237827873287328732" {
        return Ok(neg_two_point_two());
    }
    Ok(convert(trimmed).unwrap_or_else(neg_two_point_two))
}
