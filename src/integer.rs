use std::str::FromStr;

use crate::literal::{self, Numeral};

/// Signed integer conversions.
///
/// Provides the try/parse pairs for `i8`, `i16`, `i32` and `i64`. The parse
/// variants reproduce each width's historical failure policy, from silent
/// sentinel values to raised format and overflow errors.
pub mod signed;
/// Unsigned integer conversions.
///
/// Provides the try/parse pairs for `u8`, `u16`, `u32` and `u64`, each with
/// its own historical failure policy.
pub mod unsigned;

pub use signed::{parse_i8, parse_i16, parse_i32, parse_i64, try_parse_i8, try_parse_i16,
                 try_parse_i32, try_parse_i64};
pub use unsigned::{parse_u8, parse_u16, parse_u32, parse_u64, try_parse_u8, try_parse_u16,
                   try_parse_u32, try_parse_u64};

/// Converts trimmed text to an integer of width `T`.
///
/// The text must classify as integer-shaped; fractional or exponent forms are
/// rejected even when their value would fit. Returns `None` for malformed
/// text and for values outside `T`'s range.
pub(in crate::integer) fn convert<T: FromStr>(trimmed: &str) -> Option<T> {
    if literal::classify(trimmed) != Some(Numeral::Integer) {
        return None;
    }
    trimmed.parse().ok()
}

/// Shared body of the integer try-parse family.
///
/// `None` input, malformed text and out-of-range values all produce
/// `(false, 0)`; nothing here can raise.
pub(in crate::integer) fn try_convert<T: FromStr + Default>(input: Option<&str>) -> (bool, T) {
    match input.map(str::trim).and_then(|trimmed| convert(trimmed)) {
        Some(value) => (true, value),
        None => (false, T::default()),
    }
}

/// Reports whether `trimmed` is an integer numeral that fits in an `i64` but
/// lies outside `[min, max]`.
///
/// This is the overflow probe the narrower widths use: a failed conversion is
/// an overflow only if a 64-bit re-parse succeeds and lands out of range.
/// Digits beyond even the 64-bit range therefore count as malformed, not as
/// overflow.
pub(in crate::integer) fn out_of_range_i64(trimmed: &str, min: i64, max: i64) -> bool {
    convert::<i64>(trimmed).is_some_and(|wide| wide < min || wide > max)
}
