//! Glass pane line items.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PaneKind;

/// Which line a glass item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassLine {
    /// Glazed section id within the unit.
    Section(u32),
    /// Purchasing line for the tempered panes of a section.
    Order(u32),
}

impl GlassLine {
    /// Section id the line refers to.
    pub fn section(&self) -> u32 {
        match self {
            GlassLine::Section(id) | GlassLine::Order(id) => *id,
        }
    }

    pub fn is_order(&self) -> bool {
        matches!(self, GlassLine::Order(_))
    }
}

impl fmt::Display for GlassLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlassLine::Section(id) => write!(f, "{}", id),
            GlassLine::Order(id) => write!(f, "order({})", id),
        }
    }
}

/// Panes of one kind and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassItem {
    pub line: GlassLine,
    pub qty: u32,
    pub kind: PaneKind,
    pub tempered: bool,
    /// Thickness in mm.
    pub thickness: f64,
    /// Width in mm.
    pub width: f64,
    /// Height in mm.
    pub height: f64,
}

impl GlassItem {
    /// Glass type label: cut-list code, or purchasing name on order lines.
    pub fn glass_type(&self) -> &'static str {
        if self.line.is_order() {
            self.kind.purchasing_name()
        } else {
            self.kind.code()
        }
    }

    /// Tempering marker as printed on cut lists.
    pub fn temper_marker(&self) -> &'static str {
        if self.tempered {
            "T"
        } else {
            ""
        }
    }
}

impl fmt::Display for GlassItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} x{} {}{} {:.2} x {:.2}",
            self.line,
            self.glass_type(),
            self.qty,
            self.thickness,
            self.temper_marker(),
            self.width,
            self.height
        )
    }
}
