// ============================================================================
// Elementary Checked Operations
// Overflow-guarded add, subtract, multiply, divide over f64
// ============================================================================
//
// Every operation validates its bounds BEFORE computing, so a rejected
// call never produces an infinity that a caller could observe. The checks
// are algebraic rearrangements of `|result| <= f64::MAX` that cannot
// themselves overflow.

use crate::errors::{MathError, MathResult};
use tracing::trace;

/// Checked addition.
///
/// # Errors
/// Returns `Overflow` if `a + b` would exceed the largest finite f64 in
/// either direction.
///
/// # Example
/// ```rust
/// use checked_math::ops::checked_add;
/// use checked_math::errors::MathError;
///
/// assert_eq!(checked_add(1.5, 2.25), Ok(3.75));
/// assert_eq!(checked_add(f64::MAX, f64::MAX), Err(MathError::Overflow));
/// ```
#[inline]
pub fn checked_add(a: f64, b: f64) -> MathResult {
    if (a > 0.0 && b > 0.0 && a > f64::MAX - b) || (a < 0.0 && b < 0.0 && a < -f64::MAX - b) {
        trace!("checked_add({}, {}) rejected: overflow", a, b);
        return Err(MathError::Overflow);
    }
    Ok(a + b)
}

/// Checked subtraction.
///
/// The overflow condition is the addition bound recast for `a - b`:
/// mixed-sign operands are the only way the difference can grow past the
/// representable range.
///
/// # Errors
/// Returns `Overflow` if `a - b` would exceed the largest finite f64 in
/// either direction.
#[inline]
pub fn checked_sub(a: f64, b: f64) -> MathResult {
    if (a > 0.0 && b < 0.0 && a > f64::MAX + b) || (a < 0.0 && b > 0.0 && a < -f64::MAX + b) {
        trace!("checked_sub({}, {}) rejected: overflow", a, b);
        return Err(MathError::Overflow);
    }
    Ok(a - b)
}

/// Checked multiplication.
///
/// A zero right-hand operand short-circuits to `Ok(0.0)`; this also keeps
/// the divisor in the overflow test nonzero.
///
/// # Errors
/// Returns `Overflow` if `|a| > f64::MAX / |b|`.
#[inline]
pub fn checked_mul(a: f64, b: f64) -> MathResult {
    if b == 0.0 {
        return Ok(0.0);
    }

    if a.abs() > f64::MAX / b.abs() {
        trace!("checked_mul({}, {}) rejected: overflow", a, b);
        return Err(MathError::Overflow);
    }
    Ok(a * b)
}

/// Checked division.
///
/// # Errors
/// Returns `DivideByZero` if `b` is zero (checked before anything else),
/// or `Overflow` if dividing by a sub-unit divisor would blow the result
/// past the largest finite f64 (`|b| < 1` and `|a| > f64::MAX * |b|`).
///
/// # Example
/// ```rust
/// use checked_math::ops::checked_div;
/// use checked_math::errors::MathError;
///
/// assert_eq!(checked_div(1.0, 4.0), Ok(0.25));
/// assert_eq!(checked_div(1.0, 0.0), Err(MathError::DivideByZero));
/// ```
#[inline]
pub fn checked_div(a: f64, b: f64) -> MathResult {
    if b == 0.0 {
        trace!("checked_div({}, {}) rejected: zero divisor", a, b);
        return Err(MathError::DivideByZero);
    }

    let abs_a = a.abs();
    let abs_b = b.abs();

    if abs_b < 1.0 && abs_a > f64::MAX * abs_b {
        trace!("checked_div({}, {}) rejected: overflow", a, b);
        return Err(MathError::Overflow);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_basic() {
        assert_eq!(checked_add(2.0, 3.0), Ok(5.0));
        assert_eq!(checked_add(-2.0, 3.0), Ok(1.0));
        assert_eq!(checked_add(0.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_add_overflow_positive() {
        assert_eq!(checked_add(f64::MAX, f64::MAX), Err(MathError::Overflow));
        assert_eq!(checked_add(f64::MAX, 1.0e308), Err(MathError::Overflow));
    }

    #[test]
    fn test_add_overflow_negative() {
        assert_eq!(checked_add(-f64::MAX, -f64::MAX), Err(MathError::Overflow));
        assert_eq!(checked_add(-f64::MAX, -1.0e308), Err(MathError::Overflow));
    }

    #[test]
    fn test_add_opposite_signs_never_overflow() {
        assert_eq!(checked_add(f64::MAX, -f64::MAX), Ok(0.0));
        assert_eq!(checked_add(-f64::MAX, f64::MAX), Ok(0.0));
    }

    #[test]
    fn test_add_at_the_edge() {
        // MAX + 0 sits exactly on the bound and must pass
        assert_eq!(checked_add(f64::MAX, 0.0), Ok(f64::MAX));
    }

    #[test]
    fn test_add_infinite_operand() {
        assert_eq!(checked_add(f64::INFINITY, 1.0), Err(MathError::Overflow));
        assert_eq!(
            checked_add(f64::NEG_INFINITY, -1.0),
            Err(MathError::Overflow)
        );
    }

    #[test]
    fn test_sub_basic() {
        assert_eq!(checked_sub(5.0, 3.0), Ok(2.0));
        assert_eq!(checked_sub(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_sub_overflow() {
        assert_eq!(checked_sub(f64::MAX, -f64::MAX), Err(MathError::Overflow));
        assert_eq!(checked_sub(-f64::MAX, f64::MAX), Err(MathError::Overflow));
    }

    #[test]
    fn test_sub_same_signs_never_overflow() {
        assert_eq!(checked_sub(f64::MAX, f64::MAX), Ok(0.0));
        assert_eq!(checked_sub(-f64::MAX, -f64::MAX), Ok(0.0));
    }

    #[test]
    fn test_mul_basic() {
        assert_eq!(checked_mul(3.0, 4.0), Ok(12.0));
        assert_eq!(checked_mul(-3.0, 4.0), Ok(-12.0));
        assert_eq!(checked_mul(0.5, 0.5), Ok(0.25));
    }

    #[test]
    fn test_mul_by_zero() {
        assert_eq!(checked_mul(f64::MAX, 0.0), Ok(0.0));
        assert_eq!(checked_mul(0.0, 0.0), Ok(0.0));
        assert_eq!(checked_mul(-1.0, 0.0), Ok(0.0));
        // The short-circuit precedes any inspection of `a`
        assert_eq!(checked_mul(f64::NAN, 0.0), Ok(0.0));
        assert_eq!(checked_mul(f64::INFINITY, 0.0), Ok(0.0));
    }

    #[test]
    fn test_mul_overflow() {
        assert_eq!(checked_mul(f64::MAX, 2.0), Err(MathError::Overflow));
        assert_eq!(checked_mul(1.0e200, 1.0e200), Err(MathError::Overflow));
        assert_eq!(checked_mul(-1.0e200, 1.0e200), Err(MathError::Overflow));
    }

    #[test]
    fn test_mul_large_but_fine() {
        assert_eq!(checked_mul(f64::MAX, 1.0), Ok(f64::MAX));
        assert_eq!(checked_mul(1.0e300, 1.0e-300), Ok(1.0));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(checked_div(1.0, 0.0), Err(MathError::DivideByZero));
        assert_eq!(checked_div(0.0, 0.0), Err(MathError::DivideByZero));
        assert_eq!(checked_div(f64::MAX, 0.0), Err(MathError::DivideByZero));
        // -0.0 compares equal to 0.0
        assert_eq!(checked_div(1.0, -0.0), Err(MathError::DivideByZero));
    }

    #[test]
    fn test_div_overflow_small_divisor() {
        assert_eq!(checked_div(f64::MAX, 0.5), Err(MathError::Overflow));
        assert_eq!(checked_div(1.0e308, 1.0e-10), Err(MathError::Overflow));
    }

    #[test]
    fn test_div_basic() {
        assert_eq!(checked_div(10.0, 4.0), Ok(2.5));
        assert_eq!(checked_div(-9.0, 3.0), Ok(-3.0));
        // divisor >= 1 can never grow the magnitude
        assert_eq!(checked_div(f64::MAX, 1.0), Ok(f64::MAX));
        // sub-unit divisor with a small dividend is fine
        assert_eq!(checked_div(1.0, 0.5), Ok(2.0));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn add_matches_raw_sum_when_in_range(
                a in -1.0e150_f64..1.0e150,
                b in -1.0e150_f64..1.0e150,
            ) {
                prop_assert_eq!(checked_add(a, b), Ok(a + b));
            }

            #[test]
            fn sub_matches_raw_difference_when_in_range(
                a in -1.0e150_f64..1.0e150,
                b in -1.0e150_f64..1.0e150,
            ) {
                prop_assert_eq!(checked_sub(a, b), Ok(a - b));
            }

            #[test]
            fn mul_by_zero_is_zero(a in proptest::num::f64::ANY) {
                prop_assert_eq!(checked_mul(a, 0.0), Ok(0.0));
            }

            #[test]
            fn div_by_zero_always_rejected(a in proptest::num::f64::ANY) {
                prop_assert_eq!(checked_div(a, 0.0), Err(MathError::DivideByZero));
            }

            #[test]
            fn operations_are_pure(
                a in -1.0e100_f64..1.0e100,
                b in -1.0e100_f64..1.0e100,
            ) {
                prop_assert_eq!(checked_add(a, b), checked_add(a, b));
                prop_assert_eq!(checked_sub(a, b), checked_sub(a, b));
                prop_assert_eq!(checked_mul(a, b), checked_mul(a, b));
                prop_assert_eq!(checked_div(a, b), checked_div(a, b));
            }
        }
    }
}
