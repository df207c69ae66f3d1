//! Error types for the calculator engine

use thiserror::Error;

/// Result type for engine operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors signaled by the calculator engine
///
/// None of these unwind past the engine. [`CalcError::resets_state`] tells
/// the caller whether the engine already returned to the clear state or
/// rejected the key press in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Operand text could not be parsed as a number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Input exceeds the configured maximum length
    #[error("Input too long: {len} characters (max {max})")]
    InputTooLong {
        /// Length of the rejected input
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// Division with a zero right-hand operand
    #[error("Division by zero")]
    DivisionByZero,

    /// Computation produced NaN or infinity
    #[error("Invalid result: {0}")]
    InvalidResult(f64),

    /// Character does not map to any calculator key
    #[error("Invalid key: {0:?}")]
    InvalidKey(char),
}

impl CalcError {
    /// Returns true if the engine was reset to the clear state
    #[must_use]
    pub const fn resets_state(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber(_) | Self::DivisionByZero | Self::InvalidResult(_)
        )
    }

    /// Short, user-facing label for this error
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InvalidNumber(_) | Self::InvalidResult(_) => "Error",
            Self::InputTooLong { .. } => "Number too long",
            Self::DivisionByZero => "Cannot divide by zero",
            Self::InvalidKey(_) => "Unknown key",
        }
    }
}
