//! Configuration constants and settings for the BOM engine.

use serde::{Deserialize, Serialize};

/// Conversion factor: inch to mm.
pub const CONV_MM_INCH: f64 = 25.4;

/// Frame margin added on every side of the nominal opening, in mm.
pub const FRAME_MARGIN_MM: f64 = 3.0;

/// Nail-fin allowance subtracted per fin on Nailon frames, in mm.
pub const NAIL_FIN_MM: f64 = 15.0;

/// Glazing bead allowance between glass edge and grid, in mm.
pub const GLAZING_BEAD_MM: f64 = 18.0;

/// Extra grid clearance on top of the glazing bead, in mm.
pub const GRID_CLEARANCE_MM: f64 = 2.0;

/// Trim taken off the nominal width for the slope sill bar, in mm.
pub const SLOPE_TRIM_MM: f64 = 10.0;

/// Nominal glass thickness in mm.
pub const GLASS_THICKNESS_MM: f64 = 3.0;

/// Decimal places kept on inch cut lengths.
pub const INCH_DECIMALS: i32 = 3;

/// Decimal places kept on glass dimensions.
pub const GLASS_DECIMALS: i32 = 2;

/// Grid divisions assumed when a Standard grid spec omits an axis.
pub const DEFAULT_GRID_DIVISIONS: u32 = 3;

/// Calculation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcOptions {
    /// Reject defaulted codes and invalid dimensions instead of computing
    /// a best-effort BOM.
    pub strict: bool,
}

impl CalcOptions {
    /// Options with strict validation enabled.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_lenient() {
        assert!(!CalcOptions::default().strict);
        assert!(CalcOptions::strict().strict);
    }

    #[test]
    fn test_options_deserialize_with_missing_fields() {
        let opts: CalcOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, CalcOptions::default());
    }
}
