//! # numparse
//!
//! numparse converts textual representations of numbers into fixed-width
//! numeric types: signed and unsigned integers of four widths, binary floats
//! of two widths, and 96-bit decimals.
//!
//! Every target type gets two conversions:
//!
//! - `try_parse_*` never raises: it returns a success flag and the value, and
//!   any failure yields `(false, zero)`.
//! - `parse_*` returns the value directly and encodes failure per type — some
//!   widths return sentinel values in the target type, others raise
//!   [`ParseError`]. The per-type policies (including their literal-string
//!   special cases) are a fixed historical contract; each function documents
//!   its own.
//!
//! Absent input is modelled as `None`; every `parse_*` maps it to
//! [`ParseError::NullArgument`].
//!
//! All conversions are pure and stateless: the same input always produces the
//! same output, and nothing here touches shared state.
//!
//! ```
//! use numparse::{parse_u16, try_parse_i32};
//!
//! assert_eq!(try_parse_i32(Some("42")), (true, 42));
//! assert_eq!(try_parse_i32(Some("forty-two")), (false, 0));
//!
//! assert_eq!(parse_u16(Some("65536")).unwrap(), u16::MAX);
//! assert!(parse_u16(None).is_err());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Conversion errors.
///
/// Defines the error type raised by the `parse` family: format errors for
/// text that is not a valid numeral, overflow errors for values outside the
/// target range, and the null-argument condition for absent input.
pub mod error;

/// Numeral classification.
///
/// A small lexer defining the invariant numeral grammar every conversion
/// accepts: optional sign, decimal digits, optional fractional part and
/// exponent, plus the non-finite word forms for binary floats.
mod literal;

/// Integer conversions.
///
/// Try/parse pairs for the eight integer widths. Each parse variant carries
/// its own failure policy, from all-sentinel (`i32`, `u8`, `u32`) to
/// all-raising (`i16`, `u64`).
pub mod integer;

/// Real and decimal conversions.
///
/// Try/parse pairs for `f32`, `f64` and `Decimal`. The parse variants here
/// never raise for malformed text; failures come back as in-band sentinels.
pub mod real;

pub use crate::{
    error::ParseError,
    integer::{parse_i8, parse_i16, parse_i32, parse_i64, parse_u8, parse_u16, parse_u32,
              parse_u64, try_parse_i8, try_parse_i16, try_parse_i32, try_parse_i64, try_parse_u8,
              try_parse_u16, try_parse_u32, try_parse_u64},
    real::{DOUBLE_EPSILON, parse_decimal, parse_f32, parse_f64, try_parse_decimal, try_parse_f32,
           try_parse_f64},
};
