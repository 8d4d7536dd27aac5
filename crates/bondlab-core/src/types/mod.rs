//! Domain value types.
//!
//! All types are small `Copy` values created fresh per calculation and
//! serializable for display layers.

mod cashflow;
mod classification;

pub use cashflow::CashFlow;
pub use classification::BondClass;
