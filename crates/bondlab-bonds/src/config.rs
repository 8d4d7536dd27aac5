//! Library configuration.
//!
//! Every field has a serde default, so a partial document (or an empty one)
//! deserializes to a usable configuration.

use serde::{Deserialize, Serialize};

use bondlab_core::discount::{DEFAULT_FACE_VALUE, MIN_RATE};
use bondlab_core::format::DEFAULT_DECIMALS;

use crate::classify::PAR_TOLERANCE;
use crate::error::{BondError, BondResult};
use crate::yields::{YieldSolver, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, MAX_YIELD, MIN_YIELD};

// =============================================================================
// YIELD SOLVER CONFIGURATION
// =============================================================================

/// Newton-Raphson settings for yield solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldSolverConfig {
    /// Convergence threshold on the price residual.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum Newton updates.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Lower clamp for yield iterates.
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,

    /// Upper clamp for yield iterates.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_lower_bound() -> f64 {
    MIN_YIELD
}

fn default_upper_bound() -> f64 {
    MAX_YIELD
}

impl Default for YieldSolverConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
        }
    }
}

impl YieldSolverConfig {
    /// Checks ranges; returns the first problem found.
    pub fn validate(&self) -> BondResult<()> {
        if !(self.tolerance > 0.0 && self.tolerance <= 1e-4) {
            return Err(BondError::invalid_config(
                "solver.tolerance",
                format!("must be in (0, 1e-4], got {}", self.tolerance),
            ));
        }
        if self.max_iterations == 0 || self.max_iterations > 10_000 {
            return Err(BondError::invalid_config(
                "solver.max_iterations",
                format!("must be in 1..=10000, got {}", self.max_iterations),
            ));
        }
        if !(self.lower_bound.is_finite() && self.lower_bound > MIN_RATE) {
            return Err(BondError::invalid_config(
                "solver.lower_bound",
                format!("must be finite and above {MIN_RATE}, got {}", self.lower_bound),
            ));
        }
        if !(self.upper_bound.is_finite() && self.upper_bound > self.lower_bound) {
            return Err(BondError::invalid_config(
                "solver.upper_bound",
                format!(
                    "must be finite and above lower_bound {}, got {}",
                    self.lower_bound, self.upper_bound
                ),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// BOND MATH CONFIGURATION
// =============================================================================

/// Defaults shared by every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondMathConfig {
    /// Face value used when a caller gives none.
    #[serde(default = "default_face_value")]
    pub face_value: f64,

    /// Dollar band around face value classified as par.
    #[serde(default = "default_par_tolerance")]
    pub par_tolerance: f64,

    /// Decimal places for formatted output.
    #[serde(default = "default_display_decimals")]
    pub display_decimals: usize,

    /// Yield solver settings.
    #[serde(default)]
    pub solver: YieldSolverConfig,
}

fn default_face_value() -> f64 {
    DEFAULT_FACE_VALUE
}

fn default_par_tolerance() -> f64 {
    PAR_TOLERANCE
}

fn default_display_decimals() -> usize {
    DEFAULT_DECIMALS
}

impl Default for BondMathConfig {
    fn default() -> Self {
        Self {
            face_value: default_face_value(),
            par_tolerance: default_par_tolerance(),
            display_decimals: default_display_decimals(),
            solver: YieldSolverConfig::default(),
        }
    }
}

impl BondMathConfig {
    /// Checks ranges; returns the first problem found.
    pub fn validate(&self) -> BondResult<()> {
        if !(self.face_value.is_finite() && self.face_value > 0.0) {
            return Err(BondError::invalid_config(
                "face_value",
                format!("must be positive, got {}", self.face_value),
            ));
        }
        if !(self.par_tolerance.is_finite() && self.par_tolerance >= 0.0) {
            return Err(BondError::invalid_config(
                "par_tolerance",
                format!("must be non-negative, got {}", self.par_tolerance),
            ));
        }
        if self.display_decimals > 12 {
            return Err(BondError::invalid_config(
                "display_decimals",
                format!("must be at most 12, got {}", self.display_decimals),
            ));
        }
        self.solver.validate()
    }

    /// A yield solver configured from [`BondMathConfig::solver`].
    pub fn yield_solver(&self) -> YieldSolver {
        YieldSolver::from_config(&self.solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BondMathConfig::default();
        assert_eq!(config.face_value, 100.0);
        assert_eq!(config.par_tolerance, 0.01);
        assert_eq!(config.display_decimals, 2);
        assert_eq!(config.solver.tolerance, 1e-8);
        assert_eq!(config.solver.max_iterations, 100);
        assert!(config.validate().is_ok());
        assert_eq!(config.yield_solver(), YieldSolver::new());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: BondMathConfig =
            serde_json::from_str(r#"{"face_value": 1000.0, "solver": {"max_iterations": 50}}"#)
                .unwrap();
        assert_eq!(config.face_value, 1000.0);
        assert_eq!(config.par_tolerance, PAR_TOLERANCE);
        assert_eq!(config.solver.max_iterations, 50);
        assert_eq!(config.solver.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.solver.lower_bound, MIN_YIELD);

        let empty: BondMathConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BondMathConfig::default());
    }

    #[test]
    fn test_validation() {
        let mut config = BondMathConfig {
            face_value: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BondError::InvalidConfig { ref field, .. }) if field == "face_value"
        ));

        config.face_value = 100.0;
        config.solver.tolerance = 0.0;
        assert!(config.validate().is_err());

        config.solver = YieldSolverConfig {
            lower_bound: -2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.solver = YieldSolverConfig {
            upper_bound: -0.6,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_solver_from_config() {
        let config = YieldSolverConfig {
            tolerance: 1e-10,
            max_iterations: 20,
            lower_bound: -0.2,
            upper_bound: 0.5,
        };
        let solver = YieldSolver::from_config(&config);
        assert_eq!(solver.tolerance(), 1e-10);
        assert_eq!(solver.max_iterations(), 20);
        assert_eq!(solver.bounds().lower, -0.2);
        assert_eq!(solver.bounds().upper, 0.5);
    }
}
