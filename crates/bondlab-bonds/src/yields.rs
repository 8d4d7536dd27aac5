//! Yield-to-maturity solver.
//!
//! Finds the single annualized rate `y` such that
//! `Σ CF_i / (1 + y/2)^i = price`, using Newton-Raphson with the analytic
//! derivative. Iterates are clamped into `[-0.5, 1.0]` by default so the
//! discount base `1 + y/2` stays positive.
//!
//! A solve that runs out of iterations is not an error: the last estimate is
//! returned with [`SolverStatus::MaxIterationsReached`] and a warning is
//! logged.
//!
//! # Example
//!
//! ```rust
//! use bondlab_bonds::yields::{calculate_ytm, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
//!
//! let result = calculate_ytm(98.307, 0.0275, 3.0, 100.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
//!     .unwrap();
//! assert!(result.is_converged());
//! println!("YTM: {:.4}%", result.yield_value * 100.0);
//! ```

use serde::{Deserialize, Serialize};

use bondlab_core::discount::MIN_RATE;
use bondlab_core::BondlabError;
use bondlab_math::solvers::{newton_raphson_clamped, Bounds, SolverConfig, SolverResult};

pub use bondlab_math::solvers::{SolverStatus, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::bond::BondSpec;
use crate::config::YieldSolverConfig;
use crate::error::{BondError, BondResult};
use crate::pricing::{present_value_at_yield, present_value_derivative};

/// Default lower clamp for yield iterates.
pub const MIN_YIELD: f64 = -0.5;

/// Default upper clamp for yield iterates.
pub const MAX_YIELD: f64 = 1.0;

/// Starting point when the coupon rate is zero.
pub const FALLBACK_INITIAL_GUESS: f64 = 0.05;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of Newton updates applied.
    pub iterations: u32,
    /// Model price minus target price at `yield_value`.
    pub residual: f64,
    /// Why the solver stopped.
    pub status: SolverStatus,
}

impl YieldResult {
    /// Returns true if the residual met the tolerance.
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }
}

impl From<SolverResult> for YieldResult {
    fn from(result: SolverResult) -> Self {
        Self {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
            status: result.status,
        }
    }
}

/// Yield-to-maturity solver.
///
/// Newton-Raphson on the flat-yield price, starting from the coupon rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    bounds: Bounds,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-8
    /// Default max iterations: 100
    /// Default bounds: [-0.5, 1.0]
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            bounds: Bounds::new(MIN_YIELD, MAX_YIELD),
        }
    }

    /// Builds a solver from configuration values.
    #[must_use]
    pub fn from_config(config: &YieldSolverConfig) -> Self {
        Self::new()
            .with_tolerance(config.tolerance)
            .with_max_iterations(config.max_iterations)
            .with_bounds(config.lower_bound, config.upper_bound)
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the clamp interval for iterates.
    #[must_use]
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = Bounds::new(lower, upper);
        self
    }

    /// Convergence tolerance on the price residual.
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    /// Iteration budget.
    pub fn max_iterations(&self) -> u32 {
        self.config.max_iterations
    }

    /// Clamp interval.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Starting yield: the coupon rate when positive, else 5%.
    pub fn initial_guess(coupon_rate: f64) -> f64 {
        if coupon_rate > 0.0 {
            coupon_rate
        } else {
            FALLBACK_INITIAL_GUESS
        }
    }

    /// Solves for the yield at which `bond` is worth `price`.
    ///
    /// # Errors
    ///
    /// Non-positive price, a lower bound at or below -2, or an invalid
    /// tolerance / iteration budget.
    pub fn solve(&self, bond: &BondSpec, price: f64) -> BondResult<YieldResult> {
        if !(price.is_finite() && price > 0.0) {
            return Err(BondlabError::InvalidPrice { value: price }.into());
        }
        if self.bounds.lower <= MIN_RATE {
            return Err(BondError::invalid_config(
                "lower_bound",
                format!("must exceed {MIN_RATE}, got {}", self.bounds.lower),
            ));
        }

        let flows = bond.cash_flows();
        let guess = Self::initial_guess(bond.coupon_rate());

        log::debug!("solving yield for {bond} at price {price}, initial guess {guess}");

        let result: YieldResult = newton_raphson_clamped(
            |y| present_value_at_yield(&flows, y) - price,
            |y| present_value_derivative(&flows, y),
            guess,
            Some(self.bounds),
            &self.config,
        )?
        .into();

        if result.is_converged() {
            log::debug!(
                "yield {} after {} iterations (residual {:.3e})",
                result.yield_value,
                result.iterations,
                result.residual
            );
        } else {
            log::warn!(
                "yield solve for {bond} at price {price} stopped: {} after {} iterations, \
                 returning {} (residual {:.3e})",
                result.status,
                result.iterations,
                result.yield_value,
                result.residual
            );
        }

        Ok(result)
    }
}

/// Solves for yield-to-maturity from scalar inputs.
pub fn calculate_ytm(
    price: f64,
    coupon_rate: f64,
    maturity_years: f64,
    face_value: f64,
    tolerance: f64,
    max_iterations: u32,
) -> BondResult<YieldResult> {
    let bond = BondSpec::new(coupon_rate, maturity_years, face_value)?;
    YieldSolver::new()
        .with_tolerance(tolerance)
        .with_max_iterations(max_iterations)
        .solve(&bond, price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ytm(price: f64, coupon: f64, maturity: f64) -> YieldResult {
        calculate_ytm(
            price,
            coupon,
            maturity,
            100.0,
            DEFAULT_TOLERANCE,
            DEFAULT_MAX_ITERATIONS,
        )
        .unwrap()
    }

    #[test]
    fn test_discount_bond() {
        let result = ytm(98.307, 0.0275, 3.0);

        assert!(result.is_converged());
        assert_relative_eq!(result.yield_value, 0.033_478_534_875_805, epsilon = 1e-9);
        assert!(result.residual.abs() < DEFAULT_TOLERANCE);
        assert!(result.iterations <= 5);
    }

    #[test]
    fn test_premium_bond_yields_below_coupon() {
        let result = ytm(102.0, 0.045, 10.0);
        assert!(result.is_converged());
        assert!(result.yield_value < 0.045);
        assert_relative_eq!(result.yield_value, 0.042_523_839_845_6, epsilon = 1e-9);
    }

    #[test]
    fn test_par_bond_yields_coupon() {
        let result = ytm(100.0, 0.06, 5.0);
        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.yield_value, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_coupon_uses_fallback_guess() {
        assert_eq!(YieldSolver::initial_guess(0.0), FALLBACK_INITIAL_GUESS);

        let result = ytm(90.0, 0.0, 5.0);
        assert!(result.is_converged());
        // 100 / (1 + y/2)^10 = 90
        let expected = 2.0 * ((100.0_f64 / 90.0).powf(0.1) - 1.0);
        assert_relative_eq!(result.yield_value, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_unreachable_price_reports_status() {
        // Even at y = -0.5 the bond is worth far less than 1000.
        let result = ytm(1000.0, 0.04, 2.0);

        assert_eq!(result.status, SolverStatus::MaxIterationsReached);
        assert_eq!(result.yield_value, MIN_YIELD);
        assert_eq!(result.iterations, DEFAULT_MAX_ITERATIONS);
        assert!(result.residual < 0.0);
    }

    #[test]
    fn test_iteration_budget() {
        let result = calculate_ytm(98.307, 0.0275, 3.0, 100.0, DEFAULT_TOLERANCE, 1).unwrap();
        assert_eq!(result.status, SolverStatus::MaxIterationsReached);
        assert_eq!(result.iterations, 1);
        assert!(!result.is_converged());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            calculate_ytm(0.0, 0.04, 2.0, 100.0, DEFAULT_TOLERANCE, 100),
            Err(BondError::Core(BondlabError::InvalidPrice { .. }))
        ));
        assert!(matches!(
            calculate_ytm(98.0, 0.04, 2.0, 100.0, 0.0, 100),
            Err(BondError::Solver(_))
        ));
        assert!(matches!(
            calculate_ytm(98.0, 0.04, 2.0, 100.0, DEFAULT_TOLERANCE, 0),
            Err(BondError::Solver(_))
        ));

        let bond = BondSpec::new(0.04, 2.0, 100.0).unwrap();
        let solver = YieldSolver::new().with_bounds(-2.5, 1.0);
        assert!(matches!(
            solver.solve(&bond, 98.0),
            Err(BondError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_builder() {
        let solver = YieldSolver::new()
            .with_tolerance(1e-10)
            .with_max_iterations(25)
            .with_bounds(-0.1, 0.5);
        assert_eq!(solver.tolerance(), 1e-10);
        assert_eq!(solver.max_iterations(), 25);
        assert_eq!(solver.bounds(), Bounds::new(-0.1, 0.5));
        assert_eq!(YieldSolver::default(), YieldSolver::new());
    }

    #[test]
    fn test_result_serializes_status() {
        let json = serde_json::to_value(ytm(98.307, 0.0275, 3.0)).unwrap();
        assert_eq!(json["status"], "converged");
    }
}
