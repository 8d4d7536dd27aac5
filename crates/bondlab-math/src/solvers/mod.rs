//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: quadratic convergence when the derivative is available
//! - [`newton_raphson_clamped`]: the same iteration, with every update clamped
//!   into a [`Bounds`] interval so it cannot wander into a region where the
//!   objective is undefined
//!
//! Both return a [`SolverResult`] whose [`SolverStatus`] says why the
//! iteration stopped. Exhausting the iteration budget or hitting a flat
//! derivative yields the current estimate with a non-converged status rather
//! than an error.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use bondlab_math::solvers::{newton_raphson_clamped, Bounds, SolverConfig};
//!
//! // 2-year, 5% semi-annual bond priced at 98
//! let flows = [(1, 2.5), (2, 2.5), (3, 2.5), (4, 102.5)];
//! let price = |y: f64| -> f64 {
//!     flows.iter().map(|&(n, cf)| cf / (1.0 + y / 2.0).powi(n)).sum()
//! };
//! let d_price = |y: f64| -> f64 {
//!     flows
//!         .iter()
//!         .map(|&(n, cf)| -(f64::from(n) / 2.0) * cf / (1.0 + y / 2.0).powi(n + 1))
//!         .sum()
//! };
//!
//! let result = newton_raphson_clamped(
//!     |y| price(y) - 98.0,
//!     d_price,
//!     0.05,
//!     Some(Bounds::new(-0.5, 1.0)),
//!     &SolverConfig::default(),
//! )
//! .unwrap();
//! assert!(result.is_converged());
//! assert!(result.root > 0.05); // discount bond yields more than its coupon
//! ```

mod newton;

pub use newton::{newton_raphson, newton_raphson_clamped};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MathError, MathResult};

/// Default tolerance on the objective value.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Derivative magnitude below which Newton-Raphson stops stepping.
pub const DEFAULT_DERIVATIVE_FLOOR: f64 = 1e-12;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on `|f(x)|`.
    pub tolerance: f64,
    /// Maximum number of updates.
    pub max_iterations: u32,
    /// Stop when `|f'(x)|` falls below this value.
    pub derivative_floor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            derivative_floor: DEFAULT_DERIVATIVE_FLOOR,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with the default derivative floor.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            derivative_floor: DEFAULT_DERIVATIVE_FLOOR,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the derivative floor.
    #[must_use]
    pub fn with_derivative_floor(mut self, derivative_floor: f64) -> Self {
        self.derivative_floor = derivative_floor;
        self
    }

    /// Checks that tolerances are positive and finite and that at least one
    /// iteration is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        if !(self.derivative_floor.is_finite() && self.derivative_floor >= 0.0) {
            return Err(MathError::invalid_input(format!(
                "derivative_floor must be non-negative and finite, got {}",
                self.derivative_floor
            )));
        }
        Ok(())
    }
}

/// Closed interval used to clamp solver iterates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub lower: f64,
    /// Upper bound (inclusive).
    pub upper: f64,
}

impl Bounds {
    /// Creates a new interval. Use [`Bounds::validate`] before relying on it.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Checks that both ends are finite and `lower <= upper`.
    pub fn validate(&self) -> MathResult<()> {
        if self.lower.is_finite() && self.upper.is_finite() && self.lower <= self.upper {
            Ok(())
        } else {
            Err(MathError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            })
        }
    }

    /// Clamps `x` into the interval.
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.lower, self.upper)
    }

    /// Returns true if `x` lies inside the interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }
}

/// Why a solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStatus {
    /// `|f(root)|` is within tolerance.
    Converged,
    /// `|f'(root)|` fell below the derivative floor; `root` is the last estimate.
    DerivativeVanished,
    /// The iteration budget ran out; `root` is the last estimate.
    MaxIterationsReached,
}

impl SolverStatus {
    /// Returns true for [`SolverStatus::Converged`].
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::Converged)
    }
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverStatus::Converged => "converged",
            SolverStatus::DerivativeVanished => "derivative vanished",
            SolverStatus::MaxIterationsReached => "max iterations reached",
        };
        write!(f, "{name}")
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found (or the best estimate when not converged).
    pub root: f64,
    /// Number of updates applied.
    pub iterations: u32,
    /// Function value at `root`.
    pub residual: f64,
    /// Stopping reason.
    pub status: SolverStatus,
}

impl SolverResult {
    /// Returns true if the residual met the tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }
}
