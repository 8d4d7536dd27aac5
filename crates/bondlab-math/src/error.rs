//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during numerical operations.
///
/// Running out of iterations is not an error: solvers report it through
/// [`SolverStatus`](crate::solvers::SolverStatus) so callers still get the
/// best available estimate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Clamping bounds are empty or not finite.
    #[error("Invalid bounds: [{lower}, {upper}]")]
    InvalidBounds {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// The objective or its derivative evaluated to NaN or infinity.
    #[error("Non-finite {quantity} at x = {x} (value: {value})")]
    NonFiniteValue {
        /// Which quantity was evaluated ("function" or "derivative").
        quantity: &'static str,
        /// Point of evaluation.
        x: f64,
        /// The offending value.
        value: f64,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(quantity: &'static str, x: f64, value: f64) -> Self {
        Self::NonFiniteValue { quantity, x, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::invalid_input("tolerance must be positive");
        assert!(err.to_string().contains("tolerance must be positive"));
    }

    #[test]
    fn test_bounds_display() {
        let err = MathError::InvalidBounds {
            lower: 1.0,
            upper: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid bounds: [1, -1]");
    }

    #[test]
    fn test_non_finite_display() {
        let err = MathError::non_finite("derivative", 0.5, f64::INFINITY);
        assert!(err.to_string().contains("derivative"));
        assert!(err.to_string().contains("inf"));
    }
}
