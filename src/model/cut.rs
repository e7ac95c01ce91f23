//! Linear cut item: one bar length on the cutting list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bar orientation in the assembled unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "--")]
    Horizontal,
    #[serde(rename = "|")]
    Vertical,
}

impl Orientation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "--",
            Orientation::Vertical => "|",
        }
    }
}

/// Unit of a cut length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "mm")]
    Millimeter,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthUnit::Inch => write!(f, "in"),
            LengthUnit::Millimeter => write!(f, "mm"),
        }
    }
}

/// A bar of `material` cut to `length`, `qty` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutItem {
    /// Extrusion or part code.
    pub material: String,
    pub orientation: Orientation,
    pub length: f64,
    pub unit: LengthUnit,
    pub qty: u32,
}

impl CutItem {
    /// Create a horizontal bar measured in inches.
    pub fn horizontal(material: impl Into<String>, length: f64, qty: u32) -> Self {
        Self {
            material: material.into(),
            orientation: Orientation::Horizontal,
            length,
            unit: LengthUnit::Inch,
            qty,
        }
    }

    /// Create a vertical bar measured in inches.
    pub fn vertical(material: impl Into<String>, length: f64, qty: u32) -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::horizontal(material, length, qty)
        }
    }

    /// Mark the length as millimetres.
    pub fn in_mm(mut self) -> Self {
        self.unit = LengthUnit::Millimeter;
        self
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }
}

impl fmt::Display for CutItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            LengthUnit::Inch => write!(
                f,
                "{} {} {:.3} in x{}",
                self.material,
                self.orientation.symbol(),
                self.length,
                self.qty
            ),
            LengthUnit::Millimeter => write!(
                f,
                "{} {} {:.0} mm x{}",
                self.material,
                self.orientation.symbol(),
                self.length,
                self.qty
            ),
        }
    }
}
