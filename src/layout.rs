//! Intermediate fabrication layout produced by the style calculators.
//!
//! A style calculator turns the metric order dimensions into a [`Layout`]:
//! the linear cut lists plus one [`GlazedSection`] per glass line. The
//! shared glass and grid builders then expand the glazed sections using the
//! style's static [`StyleRules`].

use crate::grid::GridPlan;
use crate::model::{CutItem, SectionRole};

/// One glazed opening (or a set of identical openings) in the unit.
#[derive(Debug, Clone, PartialEq)]
pub struct GlazedSection {
    pub role: SectionRole,
    /// Left/right placement label, where the style reports one.
    pub position: Option<&'static str>,
    /// Glass line id on the cutting list.
    pub line: u32,
    /// Number of identical insulated units in this section.
    pub units: u32,
    /// Glass width in mm.
    pub glass_width: f64,
    /// Glass height in mm.
    pub glass_height: f64,
    /// Grid width in mm.
    pub grid_width: f64,
    /// Grid height in mm.
    pub grid_height: f64,
    /// Section follows the secondary tempering override.
    pub secondary: bool,
}

impl GlazedSection {
    /// Section whose grid follows the glass less the glazing pocket.
    pub fn new(role: SectionRole, line: u32, glass_width: f64, glass_height: f64) -> Self {
        Self {
            role,
            position: None,
            line,
            units: 1,
            glass_width,
            glass_height,
            grid_width: glass_width,
            grid_height: glass_height,
            secondary: false,
        }
    }

    pub fn units(mut self, units: u32) -> Self {
        self.units = units;
        self
    }

    pub fn grid(mut self, width: f64, height: f64) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn at(mut self, position: &'static str) -> Self {
        self.position = Some(position);
        self
    }

    pub fn secondary(mut self) -> Self {
        self.secondary = true;
        self
    }
}

/// Linear cuts and glazed sections of one unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Outside frame width in inches.
    pub frame_width: f64,
    /// Outside frame height in inches.
    pub frame_height: f64,
    pub frame: Vec<CutItem>,
    pub sash: Option<Vec<CutItem>>,
    pub screen: Option<Vec<CutItem>>,
    pub parts: Option<Vec<CutItem>>,
    pub sections: Vec<GlazedSection>,
}

/// How a style's glass list is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlassPolicy {
    /// Append purchasing lines for tempered sections.
    pub order_lines: bool,
    /// Multiply piece counts by the order quantity.
    pub scale_by_quantity: bool,
}

/// Static per-style configuration driving the shared builders.
#[derive(Debug, Clone, Copy)]
pub struct StyleRules {
    pub glass: GlassPolicy,
    pub grid: GridPlan,
}
