//! Grid (muntin) bar line items.

use serde::{Deserialize, Serialize};

use super::GridPattern;

/// Role of a glazed section within the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionRole {
    /// Operable sash.
    #[serde(rename = "sliding")]
    Sash,
    Fixed,
    Top,
    TopSides,
    TopMiddle,
    Bottom,
}

/// Grid bars for one glazed section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSection {
    pub role: Option<SectionRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub pattern: GridPattern,
    /// Grid width in mm.
    pub width: Option<f64>,
    /// Grid height in mm.
    pub height: Option<f64>,
    /// Bars running across the width.
    pub width_bars: Option<f64>,
    /// Hole spacing along the width bars in mm.
    pub width_hole: Option<f64>,
    /// Bars running along the height.
    pub height_bars: Option<f64>,
    /// Hole spacing along the height bars in mm.
    pub height_hole: Option<f64>,
    /// Panel count for per-panel grid entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<u32>,
}

/// One grid entry on the cutting list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridItem {
    pub sections: Vec<GridSection>,
}

impl GridItem {
    pub fn new(sections: Vec<GridSection>) -> Self {
        Self { sections }
    }

    /// First section with the given role.
    pub fn section(&self, role: SectionRole) -> Option<&GridSection> {
        self.sections.iter().find(|s| s.role == Some(role))
    }
}

/// Light count and configuration labels for stacked picture styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSummary {
    pub light_count: u32,
    pub config_top: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_middle: Option<String>,
    pub config_bottom: String,
}
