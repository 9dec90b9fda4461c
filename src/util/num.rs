use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Widens an `i64` to the nearest `f64`.
///
/// Magnitudes above 2^53 round to the closest representable real, which is
/// the real-domain coercion integers undergo when they meet a real operand.
///
/// ## Example
/// ```
/// use listfunc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(10_000_000_000_000_000), 1e16);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Safely converts a `usize` (a list length) to `i64`.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the value does not fit.
///
/// ## Example
/// ```
/// use listfunc::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(3).unwrap(), 3);
/// ```
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::LiteralTooLarge { literal: value.to_string() })
}

/// Parses the text of an integer literal, including an optional sign.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the literal does not fit in
/// 64 bits.
///
/// ## Example
/// ```
/// use listfunc::util::num::parse_integer_literal;
///
/// assert_eq!(parse_integer_literal("+17").unwrap(), 17);
/// assert_eq!(parse_integer_literal("-3").unwrap(), -3);
/// assert!(parse_integer_literal("99999999999999999999").is_err());
/// ```
pub fn parse_integer_literal(text: &str) -> EvalResult<i64> {
    text.parse().map_err(|_| RuntimeError::LiteralTooLarge { literal: text.to_string() })
}

/// Parses the text of a real literal such as `-2.5` or `3.`.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the literal overflows to an
/// infinite value or is not a valid number.
///
/// ## Example
/// ```
/// use listfunc::util::num::parse_real_literal;
///
/// assert_eq!(parse_real_literal("3.").unwrap(), 3.0);
/// assert_eq!(parse_real_literal("-0.25").unwrap(), -0.25);
/// ```
pub fn parse_real_literal(text: &str) -> EvalResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RuntimeError::LiteralTooLarge { literal: text.to_string() }),
    }
}
