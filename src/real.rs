/// Binary floating-point conversions.
///
/// Provides the try/parse pairs for `f32` and `f64`. The parse variants never
/// raise for malformed text; each width has its own in-band failure sentinel
/// (`NaN` for `f32`, the smallest positive subnormal for `f64`).
pub mod float;

/// Decimal conversions.
///
/// Provides the try/parse pair for `rust_decimal::Decimal`, with the
/// fractional failure sentinels of the historical contract.
pub mod decimal;

pub use decimal::{parse_decimal, try_parse_decimal};
pub use float::{DOUBLE_EPSILON, parse_f32, parse_f64, try_parse_f32, try_parse_f64};
