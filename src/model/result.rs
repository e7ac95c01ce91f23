//! Assembled bill of materials for one order line.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CutItem, GlassItem, GridItem, GridSummary, OrderLine, Style};

/// Order details carried through to production labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelInfo {
    pub id: Option<String>,
    pub customer: Option<String>,
    pub style: String,
    pub width: f64,
    pub height: f64,
    pub frame: String,
    pub glass: String,
    pub argon: Option<String>,
    pub grid: String,
    pub grid_size: Option<String>,
    pub color: Option<String>,
    pub batch: Option<String>,
    pub po: Option<String>,
    pub note: Option<String>,
}

impl LabelInfo {
    pub fn from_order(order: &OrderLine) -> Self {
        Self {
            id: order.id.clone(),
            customer: order.customer.clone(),
            style: order.style.code().to_string(),
            width: order.width,
            height: order.height,
            frame: order.frame.code().to_string(),
            glass: order.glass.code(),
            argon: order.argon.clone(),
            grid: order.grid.to_string(),
            grid_size: order.grid_size.clone(),
            color: order.color.clone(),
            batch: order.batch.clone(),
            po: order.po.clone(),
            note: order.note.clone(),
        }
    }
}

/// Complete cutting list for one window unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub style: Style,
    /// Outside frame width in inches.
    pub frame_width: f64,
    /// Outside frame height in inches.
    pub frame_height: f64,
    pub frame_profile: String,
    pub frame: Vec<CutItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sash: Option<Vec<CutItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<Vec<CutItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<CutItem>>,
    pub glass_list: Vec<GlassItem>,
    pub grid_list: Vec<GridItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_summary: Option<GridSummary>,
    pub label: LabelInfo,
    /// Defaults and omissions applied while computing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CalculationResult {
    /// All linear cuts in list order: frame, sash, screen, parts.
    pub fn cuts(&self) -> impl Iterator<Item = &CutItem> {
        self.frame
            .iter()
            .chain(self.sash.iter().flatten())
            .chain(self.screen.iter().flatten())
            .chain(self.parts.iter().flatten())
    }

    /// Find the first part with the given material code.
    pub fn part(&self, material: &str) -> Option<&CutItem> {
        self.parts.iter().flatten().find(|c| c.material == material)
    }
}

fn write_cuts(f: &mut fmt::Formatter<'_>, title: &str, cuts: &[CutItem]) -> fmt::Result {
    writeln!(f, "{}:", title)?;
    for cut in cuts {
        writeln!(f, "  {}", cut)?;
    }
    Ok(())
}

/// Plain-text cutting list.
impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {:.3} x {:.3} in",
            self.style, self.frame_profile, self.frame_width, self.frame_height
        )?;
        write_cuts(f, "frame", &self.frame)?;
        for (title, cuts) in [("sash", &self.sash), ("screen", &self.screen), ("parts", &self.parts)] {
            if let Some(cuts) = cuts {
                write_cuts(f, title, cuts)?;
            }
        }
        writeln!(f, "glass:")?;
        for item in &self.glass_list {
            writeln!(f, "  {}", item)?;
        }
        write!(f, "grid: {} item(s)", self.grid_list.len())?;
        if let Some(summary) = &self.grid_summary {
            write!(f, ", {} lights {}", summary.light_count, summary.config_top)?;
        }
        for warning in &self.warnings {
            write!(f, "\nwarning: {}", warning)?;
        }
        Ok(())
    }
}
