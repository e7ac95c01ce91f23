//! Inch/millimetre conversion with controlled rounding.

use crate::config::{CONV_MM_INCH, INCH_DECIMALS};

/// Convert inches to millimetres.
#[inline]
pub fn to_metric(inches: f64) -> f64 {
    inches * CONV_MM_INCH
}

/// Round half away from zero at `decimals` decimal places.
#[inline]
pub fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert millimetres to inches, rounded at `decimals` places.
#[inline]
pub fn mm_to_inch(mm: f64, decimals: i32) -> f64 {
    round(mm / CONV_MM_INCH, decimals)
}

/// Convert millimetres to inches at cut-list precision.
#[inline]
pub fn mm_to_inch3(mm: f64) -> f64 {
    mm_to_inch(mm, INCH_DECIMALS)
}
