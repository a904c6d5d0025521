// ============================================================================
// Checked Exponentiation
// Integer-exponent power by repeated checked multiplication
// ============================================================================

use crate::errors::{MathError, MathResult};
use crate::ops::checked_mul;
use tracing::trace;

/// 2^63, the first magnitude a float exponent cannot carry into an i64.
const EXP_LIMIT: f64 = 9.223372036854775808e18;

/// Checked exponentiation with an integer exponent.
///
/// Computes `base^exponent` by repeated multiplication, one factor per
/// exponent unit. This is deliberately not fast exponentiation: the loop
/// reuses [`checked_mul`] so the very first step past the representable
/// range aborts with `Overflow` instead of silently saturating.
///
/// Edge cases, in check order:
/// - `exponent == 0` is `Ok(1.0)` for every base, zero included
/// - `0^negative` is `Err(DivideByZero)`
/// - `0^positive` is `Ok(0.0)`
/// - `exponent == 1` returns the base without entering the loop
///
/// A negative exponent inverts the accumulated power at the end; if the
/// accumulator's magnitude fell below `1 / f64::MAX`, the inversion itself
/// would overflow and the call fails with `Overflow`.
///
/// # Example
/// ```rust
/// use checked_math::ops::checked_pow;
/// use checked_math::errors::MathError;
///
/// assert_eq!(checked_pow(2.0, 10), Ok(1024.0));
/// assert_eq!(checked_pow(2.0, -3), Ok(0.125));
/// assert_eq!(checked_pow(0.0, -1), Err(MathError::DivideByZero));
/// ```
pub fn checked_pow(base: f64, exponent: i64) -> MathResult {
    if exponent == 0 {
        return Ok(1.0);
    }

    if base == 0.0 {
        if exponent < 0 {
            trace!("checked_pow({}, {}) rejected: zero base, negative exponent", base, exponent);
            return Err(MathError::DivideByZero);
        }
        return Ok(0.0);
    }

    if exponent == 1 {
        return Ok(base);
    }

    let negative = exponent < 0;
    let magnitude = exponent.unsigned_abs();

    let mut acc = 1.0;
    for _ in 0..magnitude {
        acc = checked_mul(acc, base)?;
    }

    if negative {
        if acc.abs() < 1.0 / f64::MAX {
            trace!("checked_pow({}, {}) rejected: inversion overflow", base, exponent);
            return Err(MathError::Overflow);
        }
        acc = 1.0 / acc;
    }

    Ok(acc)
}

/// Checked exponentiation with a floating-point exponent.
///
/// Fractional powers are out of scope: the exponent must be integral.
/// NaN, infinities, non-integral values, and integral values outside the
/// i64 range all fail with `InvalidArgument` before any computation.
/// Valid exponents delegate to [`checked_pow`].
pub fn checked_powf(base: f64, exponent: f64) -> MathResult {
    // NaN and infinities fail this too: their fract() is NaN
    if exponent.fract() != 0.0 {
        trace!("checked_powf({}, {}) rejected: non-integral exponent", base, exponent);
        return Err(MathError::InvalidArgument);
    }

    if exponent < -EXP_LIMIT || exponent >= EXP_LIMIT {
        trace!("checked_powf({}, {}) rejected: exponent outside i64 range", base, exponent);
        return Err(MathError::InvalidArgument);
    }

    checked_pow(base, exponent as i64)
}
