// ============================================================================
// Checked Factorial
// ============================================================================

use crate::errors::{MathError, MathResult};
use crate::ops::checked_mul;
use tracing::trace;

/// Largest `n` for which `n!` fits in an f64. 171! exceeds `f64::MAX`.
pub const FACTORIAL_MAX_N: f64 = 170.0;

/// Checked factorial.
///
/// `n` must be a non-negative integral value (`n.floor() == n`; NaN and
/// infinities fail this check) and at most [`FACTORIAL_MAX_N`]. The bound
/// is enforced up front so overflow is reported before any multiplication
/// happens, not discovered partway through.
///
/// # Errors
/// Returns `InvalidArgument` for negative or non-integral input, and
/// `Overflow` for `n > 170`.
///
/// # Example
/// ```rust
/// use checked_math::ops::checked_factorial;
/// use checked_math::errors::MathError;
///
/// assert_eq!(checked_factorial(5.0), Ok(120.0));
/// assert_eq!(checked_factorial(-1.0), Err(MathError::InvalidArgument));
/// assert_eq!(checked_factorial(171.0), Err(MathError::Overflow));
/// ```
pub fn checked_factorial(n: f64) -> MathResult {
    if n < 0.0 || n.floor() != n {
        trace!("checked_factorial({}) rejected: negative or non-integral", n);
        return Err(MathError::InvalidArgument);
    }

    if n > FACTORIAL_MAX_N {
        trace!("checked_factorial({}) rejected: overflow", n);
        return Err(MathError::Overflow);
    }

    if n <= 1.0 {
        return Ok(1.0);
    }

    let mut acc = 1.0;
    let mut k = 2.0;
    while k <= n {
        acc = checked_mul(acc, k)?;
        k += 1.0;
    }

    Ok(acc)
}
