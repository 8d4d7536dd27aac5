//! Error types for the Bondlab library.
//!
//! Every input that would make the discount engine produce NaN or infinity
//! is caught here and reported with the offending value.

use thiserror::Error;

/// A specialized Result type for Bondlab core operations.
pub type BondlabResult<T> = Result<T, BondlabError>;

/// The main error type for Bondlab core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondlabError {
    /// Rate outside the semi-annual domain (`rate > -2`, finite).
    #[error("Invalid rate: {value} - {reason}")]
    InvalidRate {
        /// The invalid rate.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Time horizon in years is negative, zero where it must be positive, or not finite.
    #[error("Invalid horizon: {years} years - {reason}")]
    InvalidHorizon {
        /// The invalid horizon.
        years: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Discount factor must be positive and finite.
    #[error("Invalid discount factor: {value}")]
    InvalidDiscountFactor {
        /// The invalid discount factor.
        value: f64,
    },

    /// Price must be positive and finite.
    #[error("Invalid price: {value}")]
    InvalidPrice {
        /// The invalid price.
        value: f64,
    },

    /// Face value must be positive and finite.
    #[error("Invalid face value: {value}")]
    InvalidFaceValue {
        /// The invalid face value.
        value: f64,
    },

    /// A computation overflowed or produced NaN.
    #[error("Non-finite result in {operation}")]
    NonFinite {
        /// The operation that produced the value.
        operation: String,
    },
}

impl BondlabError {
    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid horizon error.
    #[must_use]
    pub fn invalid_horizon(years: f64, reason: impl Into<String>) -> Self {
        Self::InvalidHorizon {
            years,
            reason: reason.into(),
        }
    }

    /// Creates a non-finite result error.
    #[must_use]
    pub fn non_finite(operation: impl Into<String>) -> Self {
        Self::NonFinite {
            operation: operation.into(),
        }
    }
}
