//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{Bounds, SolverConfig, SolverResult, SolverStatus};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near the root but requires
/// the derivative of the function.
///
/// # Example
///
/// ```rust
/// use bondlab_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    newton_raphson_clamped(f, df, initial_guess, None, config)
}

/// Newton-Raphson with every update clamped into `bounds`.
///
/// Each iteration evaluates `f` and `f'` at the current point and stops when
/// `|f(x)| < tolerance` ([`SolverStatus::Converged`]) or
/// `|f'(x)| < derivative_floor` ([`SolverStatus::DerivativeVanished`]).
/// Otherwise it steps and clamps. When the budget runs out the last iterate
/// comes back with [`SolverStatus::MaxIterationsReached`].
///
/// The initial guess is used as given; only updates are clamped.
///
/// # Errors
///
/// Invalid configuration, invalid bounds, a non-finite initial guess, or a
/// non-finite function/derivative evaluation.
pub fn newton_raphson_clamped<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<Bounds>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;
    if let Some(b) = bounds {
        b.validate()?;
    }
    if !initial_guess.is_finite() {
        return Err(MathError::invalid_input(format!(
            "initial guess must be finite, got {initial_guess}"
        )));
    }

    let eval = |x: f64| -> MathResult<f64> {
        let fx = f(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(MathError::non_finite("function", x, fx))
        }
    };

    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = eval(x)?;

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
                status: SolverStatus::Converged,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::non_finite("derivative", x, dfx));
        }

        if dfx.abs() < config.derivative_floor {
            log::debug!("newton: derivative {dfx:.3e} below floor at x = {x}, stopping");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
                status: SolverStatus::DerivativeVanished,
            });
        }

        x -= fx / dfx;
        if let Some(b) = bounds {
            x = b.clamp(x);
        }

        log::trace!("newton: iteration {} x = {x} f = {fx:.3e}", iteration + 1);
    }

    let residual = eval(x)?;
    let status = if residual.abs() < config.tolerance {
        SolverStatus::Converged
    } else {
        SolverStatus::MaxIterationsReached
    };

    Ok(SolverResult {
        root: x,
        iterations: config.max_iterations,
        residual,
        status,
    })
}
