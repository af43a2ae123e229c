// ============================================================================
// Numeric Errors
// Error types for the checked fixed-point operations
// ============================================================================

use std::fmt;

/// Errors reported by the `checked_*` operations.
///
/// The operator surface never returns these: it wraps (fixed-point), clamps
/// (normalized) or panics on a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the storage maximum
    Overflow,
    /// Result below the storage minimum
    Underflow,
    /// Divisor base was zero
    DivisionByZero,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum base")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum base")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
