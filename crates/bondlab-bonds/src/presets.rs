//! Lecture examples preloaded by the teaching pages.
//!
//! Keys are matched case-insensitively, ignoring `_` and `-`, so `slide23_A`,
//! `slide23-a` and `SLIDE23A` all find the same preset.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use bondlab_core::discount::{discount_factor, DEFAULT_FACE_VALUE};

use crate::bond::BondSpec;
use crate::curve::SpotCurve;
use crate::error::{BondError, BondResult};
use crate::pricing::PricingResult;
use crate::yields::{YieldResult, YieldSolver};

// =============================================================================
// SPOT-CURVE PRICING
// =============================================================================

/// A bond priced off a quoted spot curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpotPricingPreset {
    /// Lookup key.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Annual coupon rate.
    pub coupon_rate: f64,
    /// Maturity in years.
    pub maturity_years: f64,
    /// Spot rates, one per semi-annual period.
    pub spot_rates: &'static [f64],
    /// Price quoted in the lecture, if any.
    pub expected_price: Option<f64>,
}

impl SpotPricingPreset {
    /// The bond at the given face value.
    pub fn bond(&self, face_value: f64) -> BondResult<BondSpec> {
        BondSpec::new(self.coupon_rate, self.maturity_years, face_value)
    }

    /// The quoted curve.
    pub fn curve(&self) -> BondResult<SpotCurve> {
        SpotCurve::from_slice(self.spot_rates)
    }

    /// Prices the preset at the default face value.
    pub fn price(&self) -> BondResult<PricingResult> {
        self.bond(DEFAULT_FACE_VALUE)?
            .price_with_curve(&self.curve()?)
    }
}

/// 2-year, 4% coupon bond on an upward-then-dipping curve; prices at 98.0216.
pub const SLIDE_20: SpotPricingPreset = SpotPricingPreset {
    key: "slide20",
    name: "Slide 20 Example",
    description: "2-year, 4% coupon bond",
    coupon_rate: 0.04,
    maturity_years: 2.0,
    spot_rates: &[0.05, 0.051, 0.052, 0.0505],
    expected_price: Some(98.0216),
};

/// All spot-curve pricing presets.
pub const SPOT_PRICING_PRESETS: &[SpotPricingPreset] = &[SLIDE_20];

// =============================================================================
// YIELD-TO-MATURITY
// =============================================================================

/// A bond with a quoted price, used for yield solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldPreset {
    /// Lookup key.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Market price per 100 face.
    pub price: f64,
    /// Annual coupon rate.
    pub coupon_rate: f64,
    /// Maturity in years.
    pub maturity_years: f64,
}

impl YieldPreset {
    /// The bond at the default face value.
    pub fn bond(&self) -> BondResult<BondSpec> {
        BondSpec::new(self.coupon_rate, self.maturity_years, DEFAULT_FACE_VALUE)
    }

    /// Solves the preset's yield.
    pub fn solve(&self, solver: &YieldSolver) -> BondResult<YieldResult> {
        solver.solve(&self.bond()?, self.price)
    }
}

/// 3-year, 2.75% coupon at 98.307.
pub const SLIDE_25: YieldPreset = YieldPreset {
    key: "slide25",
    name: "Slide 25 Example",
    description: "3-year, 2.75% coupon at $98.307",
    price: 98.307,
    coupon_rate: 0.0275,
    maturity_years: 3.0,
};

/// 10-year, 4.5% coupon at 102.
pub const SLIDE_23_A: YieldPreset = YieldPreset {
    key: "slide23a",
    name: "Slide 23 Bond A",
    description: "10-year, 4.5% coupon at $102",
    price: 102.0,
    coupon_rate: 0.045,
    maturity_years: 10.0,
};

/// 10-year, 3.75% coupon at 98.
pub const SLIDE_23_B: YieldPreset = YieldPreset {
    key: "slide23b",
    name: "Slide 23 Bond B",
    description: "10-year, 3.75% coupon at $98",
    price: 98.0,
    coupon_rate: 0.0375,
    maturity_years: 10.0,
};

/// All yield presets.
pub const YIELD_PRESETS: &[YieldPreset] = &[SLIDE_25, SLIDE_23_A, SLIDE_23_B];

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds a spot-curve pricing preset by key.
pub fn spot_pricing_preset(key: &str) -> BondResult<&'static SpotPricingPreset> {
    let wanted = normalize_key(key);
    SPOT_PRICING_PRESETS
        .iter()
        .find(|p| p.key == wanted)
        .ok_or_else(|| BondError::unknown_preset(key))
}

/// Finds a yield preset by key.
pub fn yield_preset(key: &str) -> BondResult<&'static YieldPreset> {
    let wanted = normalize_key(key);
    YIELD_PRESETS
        .iter()
        .find(|p| p.key == wanted)
        .ok_or_else(|| BondError::unknown_preset(key))
}

// =============================================================================
// SPOT-RATE COMPARISON
// =============================================================================

/// Coupons compared on the Slide 20 curve: same curve, different yields.
pub const SPOT_VS_YIELD_COUPONS: [f64; 2] = [0.08, 0.04];

/// Maturity of the spot-vs-yield comparison bonds.
pub const SPOT_VS_YIELD_MATURITY: f64 = 2.0;

// =============================================================================
// CURVE SHAPES
// =============================================================================

/// Maturities at which the curve shapes are quoted.
pub const CURVE_SHAPE_MATURITIES: [f64; 6] = [0.5, 1.0, 1.5, 2.0, 3.0, 5.0];

/// Textbook term-structure shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveShape {
    /// Upward sloping.
    Normal,
    /// Short rates above long rates.
    Inverted,
    /// Same rate at every maturity.
    Flat,
    /// Medium-term rates peak.
    Humped,
}

/// One point on a curve shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Maturity in years.
    pub years: f64,
    /// Spot rate.
    pub rate: f64,
    /// Semi-annual discount factor at `rate` over `years`.
    pub discount_factor: f64,
}

impl CurveShape {
    /// Every shape, in display order.
    pub const ALL: [CurveShape; 4] = [
        CurveShape::Normal,
        CurveShape::Inverted,
        CurveShape::Flat,
        CurveShape::Humped,
    ];

    /// Lookup key.
    pub fn key(self) -> &'static str {
        match self {
            CurveShape::Normal => "normal",
            CurveShape::Inverted => "inverted",
            CurveShape::Flat => "flat",
            CurveShape::Humped => "humped",
        }
    }

    /// Short explanation of the shape.
    pub fn description(self) -> &'static str {
        match self {
            CurveShape::Normal => "long-term rates above short-term rates",
            CurveShape::Inverted => "short-term rates above long-term rates",
            CurveShape::Flat => "the same rate at every maturity",
            CurveShape::Humped => "medium-term rates peak",
        }
    }

    /// Spot rates at [`CURVE_SHAPE_MATURITIES`].
    pub fn rates(self) -> [f64; 6] {
        match self {
            CurveShape::Normal => [0.035, 0.040, 0.043, 0.045, 0.046, 0.047],
            CurveShape::Inverted => [0.055, 0.052, 0.048, 0.045, 0.043, 0.042],
            CurveShape::Flat => [0.045; 6],
            CurveShape::Humped => [0.035, 0.045, 0.050, 0.048, 0.045, 0.043],
        }
    }

    /// Maturity, rate and discount factor at each quoted point.
    pub fn points(self) -> BondResult<Vec<CurvePoint>> {
        CURVE_SHAPE_MATURITIES
            .iter()
            .zip(self.rates())
            .map(|(&years, rate)| {
                Ok(CurvePoint {
                    years,
                    rate,
                    discount_factor: discount_factor(rate, years)?,
                })
            })
            .collect()
    }
}

impl fmt::Display for CurveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CurveShape {
    type Err = BondError;

    fn from_str(s: &str) -> BondResult<Self> {
        let wanted = normalize_key(s);
        CurveShape::ALL
            .into_iter()
            .find(|shape| shape.key() == wanted)
            .ok_or_else(|| BondError::unknown_preset(s))
    }
}
