//! # Bondlab Bonds
//!
//! Bond valuation under semi-annual compounding.
//!
//! This crate provides:
//!
//! - **Cash flows**: coupon schedules from coupon rate, maturity and face value
//! - **Spot curves**: per-period rates with flat extrapolation past the last quote
//! - **Pricing**: spot-curve and flat-yield present values with per-flow breakdowns
//! - **Yield solving**: Newton-Raphson yield-to-maturity with convergence status
//! - **Classification**: premium, par or discount relative to face value
//! - **Presets**: the textbook examples used by the teaching pages
//!
//! ## Quick Start
//!
//! ```rust
//! use bondlab_bonds::prelude::*;
//!
//! // Slide 20: 2-year 4% bond on a quoted spot curve
//! let priced = price_bond_with_spot_rates(0.04, 2.0, &[0.05, 0.051, 0.052, 0.0505], 100.0)
//!     .unwrap();
//! assert!((priced.price - 98.0216).abs() < 1e-3);
//!
//! // Yield that reproduces the curve price
//! let ytm = calculate_ytm(priced.price, 0.04, 2.0, 100.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
//!     .unwrap();
//! assert!(ytm.is_converged());
//! assert_eq!(classify_bond_default(priced.price, 100.0), BondClass::Discount);
//!
//! println!("{} / YTM {}", format_currency(priced.price, 4), format_percent(ytm.yield_value, 3));
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

pub mod bond;
pub mod cashflows;
pub mod classify;
pub mod comparison;
pub mod config;
pub mod curve;
pub mod error;
pub mod presets;
pub mod pricing;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bondlab_core::prelude::*;

    pub use crate::bond::BondSpec;
    pub use crate::cashflows::{generate_cash_flows, period_count};
    pub use crate::classify::{classify_bond, classify_bond_default, PAR_TOLERANCE};
    pub use crate::comparison::{compare_on_curve, CurveComparison};
    pub use crate::config::{BondMathConfig, YieldSolverConfig};
    pub use crate::curve::SpotCurve;
    pub use crate::error::{BondError, BondResult};
    pub use crate::presets::CurveShape;
    pub use crate::pricing::{
        price_bond_at_yield, price_bond_with_spot_rates, PricingResult, PricingRow,
    };
    pub use crate::yields::{
        calculate_ytm, SolverStatus, YieldResult, YieldSolver, DEFAULT_MAX_ITERATIONS,
        DEFAULT_TOLERANCE,
    };
}

// Re-export commonly used types at crate root
pub use bond::BondSpec;
pub use curve::SpotCurve;
pub use error::{BondError, BondResult};
pub use pricing::PricingResult;
pub use yields::{YieldResult, YieldSolver};

// Discount engine and formatters, so callers need only this crate
pub use bondlab_core::discount::{
    discount_factor, spot_rate_from_discount, spot_rate_from_price, zero_coupon_price,
};
pub use bondlab_core::format::{format_currency, format_percent};
