//! Error types for bond operations.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Coupon rate is negative or not finite.
    #[error("Invalid coupon rate: {value}")]
    InvalidCouponRate {
        /// The rejected coupon rate.
        value: f64,
    },

    /// Maturity cannot be turned into a positive number of semi-annual periods.
    #[error("Invalid maturity: {years} years - {reason}")]
    InvalidMaturity {
        /// The rejected maturity.
        years: f64,
        /// Description of what's invalid.
        reason: String,
    },

    /// A spot curve needs at least one rate.
    #[error("Spot curve is empty")]
    EmptyCurve,

    /// A spot rate outside the semi-annual domain.
    #[error("Invalid spot rate at period {period}: {value}")]
    InvalidSpotRate {
        /// 1-indexed period the rate belongs to.
        period: usize,
        /// The rejected rate.
        value: f64,
    },

    /// A curve cannot be resized to zero periods.
    #[error("Invalid curve length: {requested}")]
    InvalidCurveLength {
        /// Requested number of periods.
        requested: usize,
    },

    /// Configuration value out of range.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig {
        /// Offending field.
        field: String,
        /// Description of what's invalid.
        reason: String,
    },

    /// No preset registered under the key.
    #[error("Unknown preset: {key}")]
    UnknownPreset {
        /// The key that was looked up.
        key: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] bondlab_core::BondlabError),

    /// Root-finding error.
    #[error("Solver error: {0}")]
    Solver(#[from] bondlab_math::MathError),
}

impl BondError {
    /// Creates an invalid maturity error.
    #[must_use]
    pub fn invalid_maturity(years: f64, reason: impl Into<String>) -> Self {
        Self::InvalidMaturity {
            years,
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown preset error.
    #[must_use]
    pub fn unknown_preset(key: impl Into<String>) -> Self {
        Self::UnknownPreset { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondlab_core::BondlabError;
    use bondlab_math::MathError;

    #[test]
    fn test_display() {
        let err = BondError::invalid_maturity(0.1, "rounds to zero periods");
        assert_eq!(
            err.to_string(),
            "Invalid maturity: 0.1 years - rounds to zero periods"
        );
        assert_eq!(BondError::EmptyCurve.to_string(), "Spot curve is empty");
    }

    #[test]
    fn test_from_core_and_math() {
        let core: BondError = BondlabError::InvalidPrice { value: -1.0 }.into();
        assert!(matches!(core, BondError::Core(BondlabError::InvalidPrice { .. })));

        let math: BondError = MathError::invalid_input("bad").into();
        assert!(matches!(math, BondError::Solver(_)));
        assert!(math.to_string().starts_with("Solver error:"));
    }
}
