//! Premium / par / discount classification.

use bondlab_core::BondClass;

/// Dollar band around face value that still counts as par.
pub const PAR_TOLERANCE: f64 = 0.01;

/// Classifies a price against face value.
///
/// `Premium` above `face_value + tolerance`, `Discount` below
/// `face_value - tolerance`, `Par` otherwise (both edges inclusive).
///
/// ```rust
/// use bondlab_bonds::classify::{classify_bond, PAR_TOLERANCE};
/// use bondlab_core::BondClass;
///
/// assert_eq!(classify_bond(100.005, 100.0, PAR_TOLERANCE), BondClass::Par);
/// assert_eq!(classify_bond(100.02, 100.0, PAR_TOLERANCE), BondClass::Premium);
/// ```
pub fn classify_bond(price: f64, face_value: f64, tolerance: f64) -> BondClass {
    if price > face_value + tolerance {
        BondClass::Premium
    } else if price < face_value - tolerance {
        BondClass::Discount
    } else {
        BondClass::Par
    }
}

/// [`classify_bond`] with [`PAR_TOLERANCE`].
pub fn classify_bond_default(price: f64, face_value: f64) -> BondClass {
    classify_bond(price, face_value, PAR_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_bond_default(100.005, 100.0), BondClass::Par);
        assert_eq!(classify_bond_default(100.02, 100.0), BondClass::Premium);
        assert_eq!(classify_bond_default(99.98, 100.0), BondClass::Discount);
        assert_eq!(classify_bond_default(100.0, 100.0), BondClass::Par);
    }

    #[test]
    fn test_tolerance_edges_are_par() {
        assert_eq!(classify_bond(101.0, 100.0, 1.0), BondClass::Par);
        assert_eq!(classify_bond(99.0, 100.0, 1.0), BondClass::Par);
    }

    #[test]
    fn test_zero_tolerance() {
        assert_eq!(classify_bond(100.0, 100.0, 0.0), BondClass::Par);
        assert_eq!(classify_bond(100.000_001, 100.0, 0.0), BondClass::Premium);
    }

    #[test]
    fn test_scales_with_face_value() {
        assert_eq!(classify_bond_default(1020.0, 1000.0), BondClass::Premium);
        assert_eq!(classify_bond_default(980.0, 1000.0), BondClass::Discount);
    }
}
