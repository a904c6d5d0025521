// ============================================================================
// Checked Math Library
// Overflow-guarded floating-point arithmetic with explicit error reporting
// ============================================================================

//! # Checked Math
//!
//! Checked versions of the elementary arithmetic operations over `f64`,
//! plus integer-exponent power and factorial. Where the raw operators
//! silently produce infinities or domain nonsense, these return an
//! explicit error classification.
//!
//! ## Features
//!
//! - **Pre-computation bounds checks**: overflow is detected before the
//!   operation runs, never by inspecting the result for infinity
//! - **Closed error taxonomy**: `Overflow`, `DivideByZero`,
//!   `InvalidArgument`, nothing else
//! - **Pure functions** with no state and no I/O, trivially thread-safe
//! - **Flat status codes**: a [`Status`](errors::Status) view (success
//!   included) with fixed descriptions, for boundaries where a `Result`
//!   cannot cross
//!
//! ## Example
//!
//! ```rust
//! use checked_math::prelude::*;
//!
//! assert_eq!(checked_add(1.5, 2.25), Ok(3.75));
//! assert_eq!(checked_pow(2.0, 10), Ok(1024.0));
//! assert_eq!(checked_factorial(5.0), Ok(120.0));
//!
//! assert_eq!(checked_div(1.0, 0.0), Err(MathError::DivideByZero));
//! assert_eq!(MathError::DivideByZero.description(), "Division by zero");
//!
//! let status = Status::of(&checked_mul(f64::MAX, 2.0));
//! assert_eq!(status.description(), "Overflow detected");
//! ```

pub mod errors;
pub mod ops;

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{MathError, MathResult, Status};
    pub use crate::ops::{
        checked_add, checked_div, checked_factorial, checked_mul, checked_pow, checked_powf,
        checked_sub, FACTORIAL_MAX_N,
    };
}
