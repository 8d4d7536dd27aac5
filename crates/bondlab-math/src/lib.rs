//! # Bondlab Math
//!
//! Numerical utilities for the Bondlab bond math library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson root finding with domain clamping and a
//!   structured result that tells convergence apart from exhaustion
//!
//! ## Design Philosophy
//!
//! - **Pure**: Every solver is a function of its inputs, no shared state
//! - **Bounded**: Work is capped by `max_iterations`
//! - **Explicit**: Stopping reasons are reported, never hidden behind a bare number

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton_raphson, newton_raphson_clamped, Bounds, SolverConfig, SolverResult, SolverStatus,
    };
}

pub use error::{MathError, MathResult};
