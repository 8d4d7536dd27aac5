//! # Bondlab Core
//!
//! Core types and the discount engine for the Bondlab bond math library.
//!
//! This crate provides the foundational building blocks used throughout Bondlab:
//!
//! - **Types**: [`CashFlow`](types::CashFlow) and [`BondClass`](types::BondClass)
//! - **Discount Engine**: semi-annual discount factors and their inverse
//! - **Formatting**: percentage and currency text for display layers
//!
//! ## Conventions
//!
//! - Rates are decimal fractions (`0.05` is 5%), annualized, compounded twice a year
//! - Time is measured in years; one semi-annual period is half a year
//! - Inputs outside the valid domain are rejected, never turned into NaN
//!
//! ## Example
//!
//! ```rust
//! use bondlab_core::discount::{discount_factor, spot_rate_from_discount};
//!
//! let df = discount_factor(0.05, 2.0).unwrap();
//! let rate = spot_rate_from_discount(df, 2.0).unwrap();
//! assert!((rate - 0.05).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod discount;
pub mod error;
pub mod format;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::discount::{
        discount_factor, discount_factor_for_periods, spot_rate_from_discount,
        spot_rate_from_price, zero_coupon_price, DEFAULT_FACE_VALUE, PERIODS_PER_YEAR,
    };
    pub use crate::error::{BondlabError, BondlabResult};
    pub use crate::format::{format_currency, format_percent, DEFAULT_DECIMALS};
    pub use crate::types::{BondClass, CashFlow};
}

// Re-export commonly used types at crate root
pub use error::{BondlabError, BondlabResult};
pub use types::{BondClass, CashFlow};
