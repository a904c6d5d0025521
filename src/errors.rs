// ============================================================================
// Arithmetic Errors
// Error taxonomy and outcome codes for checked arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during checked arithmetic operations.
///
/// This is a closed set: no operation in this crate produces any other
/// failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MathError {
    /// The true result's magnitude exceeds the largest finite f64
    Overflow,
    /// Division by zero, or zero raised to a negative power
    DivideByZero,
    /// Malformed input: non-integral exponent or factorial argument,
    /// negative factorial argument, or an exponent outside the i64 range
    InvalidArgument,
}

impl MathError {
    /// Fixed human-readable description of the error.
    pub const fn description(self) -> &'static str {
        match self {
            MathError::Overflow => "Overflow detected",
            MathError::DivideByZero => "Division by zero",
            MathError::InvalidArgument => "Invalid argument",
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for MathError {}

/// Result type alias for checked arithmetic operations
pub type MathResult<T = f64> = Result<T, MathError>;

/// Flat outcome code for an operation, success included.
///
/// Operations themselves return [`MathResult`]; `Status` is the four-way
/// classification for boundaries where a `Result` cannot cross (reporting,
/// status tables, FFI-adjacent layers).
///
/// # Example
/// ```rust
/// use checked_math::errors::Status;
/// use checked_math::ops::checked_div;
///
/// let status = Status::of(&checked_div(1.0, 0.0));
/// assert_eq!(status, Status::DivideByZero);
/// assert_eq!(status.description(), "Division by zero");
/// assert_eq!(Status::Ok.description(), "Success");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The operation produced a valid numeric result
    Ok,
    /// See [`MathError::Overflow`]
    Overflow,
    /// See [`MathError::DivideByZero`]
    DivideByZero,
    /// See [`MathError::InvalidArgument`]
    InvalidArgument,
}

impl Status {
    /// Classify an operation outcome.
    #[inline]
    pub fn of<T>(result: &MathResult<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => Status::from(*e),
        }
    }

    /// Fixed human-readable description of the outcome.
    pub const fn description(self) -> &'static str {
        match self {
            Status::Ok => "Success",
            Status::Overflow => "Overflow detected",
            Status::DivideByZero => "Division by zero",
            Status::InvalidArgument => "Invalid argument",
        }
    }

    /// Whether this outcome is the success marker.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl From<MathError> for Status {
    #[inline]
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow => Status::Overflow,
            MathError::DivideByZero => Status::DivideByZero,
            MathError::InvalidArgument => Status::InvalidArgument,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
