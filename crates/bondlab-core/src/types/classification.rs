//! Premium / par / discount classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a bond's price sits relative to its face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondClass {
    /// Price above face value.
    Premium,
    /// Price within tolerance of face value.
    Par,
    /// Price below face value.
    Discount,
}

impl BondClass {
    /// Lowercase label used in display and serialization.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BondClass::Premium => "premium",
            BondClass::Par => "par",
            BondClass::Discount => "discount",
        }
    }
}

impl fmt::Display for BondClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_serde_agree() {
        for class in [BondClass::Premium, BondClass::Par, BondClass::Discount] {
            let json = serde_json::to_string(&class).unwrap();
            assert_eq!(json, format!("\"{class}\""));
            let back: BondClass = serde_json::from_str(&json).unwrap();
            assert_eq!(back, class);
        }
    }
}
