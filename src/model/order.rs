//! Order line: the immutable input describing one window unit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::NAIL_FIN_MM;
use crate::units::to_metric;

/// Window style family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "XO")]
    Xo,
    #[serde(rename = "OX")]
    Ox,
    #[serde(rename = "XOX")]
    Xox,
    #[serde(rename = "SH")]
    SingleHung,
    #[serde(rename = "Picture")]
    Picture,
    /// Two picture panes stacked one over the other.
    #[serde(rename = "V-PP")]
    VerticalPicturePair,
    /// Picture pair over a full-width picture.
    #[serde(rename = "P-PP")]
    PicturePair,
    #[serde(rename = "PP-XO")]
    PpXo,
    #[serde(rename = "PP-OX")]
    PpOx,
    #[serde(rename = "XO-PP")]
    XoPp,
    #[serde(rename = "OX-PP")]
    OxPp,
    #[serde(rename = "XOX-PPP")]
    XoxPpp,
    #[serde(rename = "XO-P")]
    XoP,
    #[serde(rename = "OX-P")]
    OxP,
    #[serde(rename = "P-XO")]
    PXo,
    #[serde(rename = "P-OX")]
    POx,
}

impl Style {
    /// All supported styles.
    pub const ALL: [Style; 16] = [
        Style::Xo,
        Style::Ox,
        Style::Xox,
        Style::SingleHung,
        Style::Picture,
        Style::VerticalPicturePair,
        Style::PicturePair,
        Style::PpXo,
        Style::PpOx,
        Style::XoPp,
        Style::OxPp,
        Style::XoxPpp,
        Style::XoP,
        Style::OxP,
        Style::PXo,
        Style::POx,
    ];

    /// Order code of the style.
    pub fn code(&self) -> &'static str {
        match self {
            Style::Xo => "XO",
            Style::Ox => "OX",
            Style::Xox => "XOX",
            Style::SingleHung => "SH",
            Style::Picture => "Picture",
            Style::VerticalPicturePair => "V-PP",
            Style::PicturePair => "P-PP",
            Style::PpXo => "PP-XO",
            Style::PpOx => "PP-OX",
            Style::XoPp => "XO-PP",
            Style::OxPp => "OX-PP",
            Style::XoxPpp => "XOX-PPP",
            Style::XoP => "XO-P",
            Style::OxP => "OX-P",
            Style::PXo => "P-XO",
            Style::POx => "P-OX",
        }
    }

    /// Whether the style stacks a fixed section of `secondary_height` on
    /// top of the main section.
    pub fn needs_secondary_height(&self) -> bool {
        matches!(
            self,
            Style::PicturePair
                | Style::PpXo
                | Style::PpOx
                | Style::XoPp
                | Style::OxPp
                | Style::XoxPpp
                | Style::XoP
                | Style::OxP
        )
    }

    /// Whether the operable sash sits on the right (OX handing).
    pub fn is_sash_right(&self) -> bool {
        matches!(
            self,
            Style::Ox | Style::PpOx | Style::OxPp | Style::OxP | Style::POx
        )
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Frame extrusion profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameProfile {
    Nailon,
    Retrofit,
    Block,
    #[serde(rename = "Block-slope")]
    BlockSlope,
    #[serde(rename = "Block-slope 1/2")]
    BlockSlopeHalf,
    /// Profile code that could not be recognized. Computed with the
    /// non-Nailon offsets and no frame bars.
    Unrecognized,
}

impl FrameProfile {
    /// Order code of the profile.
    pub fn code(&self) -> &'static str {
        match self {
            FrameProfile::Nailon => "Nailon",
            FrameProfile::Retrofit => "Retrofit",
            FrameProfile::Block => "Block",
            FrameProfile::BlockSlope => "Block-slope",
            FrameProfile::BlockSlopeHalf => "Block-slope 1/2",
            FrameProfile::Unrecognized => "Unrecognized",
        }
    }

    pub fn is_nailon(&self) -> bool {
        matches!(self, FrameProfile::Nailon)
    }

    /// Nail-fin allowance per fin in mm (zero for non-Nailon frames).
    pub fn fin(&self) -> f64 {
        if self.is_nailon() {
            NAIL_FIN_MM
        } else {
            0.0
        }
    }
}

impl fmt::Display for FrameProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One pane of an insulated glass unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaneKind {
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "lowe2")]
    LowE270,
    #[serde(rename = "lowe3")]
    LowE366,
    #[serde(rename = "OBS")]
    Obscure,
}

impl PaneKind {
    /// Cut-list code of the pane.
    pub fn code(&self) -> &'static str {
        match self {
            PaneKind::Clear => "clear",
            PaneKind::LowE270 => "lowe2",
            PaneKind::LowE366 => "lowe3",
            PaneKind::Obscure => "OBS",
        }
    }

    /// Name used on purchasing ("order") lines.
    pub fn purchasing_name(&self) -> &'static str {
        match self {
            PaneKind::Clear => "Clear",
            PaneKind::LowE270 => "Lowe270",
            PaneKind::LowE366 => "Lowe366",
            PaneKind::Obscure => "P516",
        }
    }

    fn order_code(&self) -> &'static str {
        match self {
            PaneKind::Clear => "Clear",
            PaneKind::LowE270 => "Low-E270",
            PaneKind::LowE366 => "Low-E366",
            PaneKind::Obscure => "OBS",
        }
    }
}

/// Glass makeup of a unit: two panes plus tempering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlassType {
    /// First pane as written in the order code.
    pub first: PaneKind,
    /// Second pane as written in the order code.
    pub second: PaneKind,
    pub tempered: bool,
}

impl Default for GlassType {
    fn default() -> Self {
        Self::new(PaneKind::Clear, PaneKind::Clear)
    }
}

impl GlassType {
    pub fn new(first: PaneKind, second: PaneKind) -> Self {
        Self {
            first,
            second,
            tempered: false,
        }
    }

    pub fn tempered(mut self) -> Self {
        self.tempered = true;
        self
    }

    /// Panes in cut-list order: the obscure pane always goes last.
    pub fn panes(&self) -> (PaneKind, PaneKind) {
        if self.first == PaneKind::Obscure && self.second != PaneKind::Obscure {
            (self.second, self.first)
        } else {
            (self.first, self.second)
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.first == self.second
    }

    /// Canonical order code, e.g. `OBS/Low-E270 Tempered`.
    pub fn code(&self) -> String {
        let mut code = format!("{}/{}", self.first.order_code(), self.second.order_code());
        if self.tempered {
            code.push_str(" Tempered");
        }
        code
    }
}

impl fmt::Display for GlassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Grid (muntin) pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridPattern {
    #[default]
    None,
    Standard,
    Marginal,
    Perimeter,
}

impl fmt::Display for GridPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GridPattern::None => "None",
            GridPattern::Standard => "Standard",
            GridPattern::Marginal => "Marginal",
            GridPattern::Perimeter => "Perimeter",
        };
        f.write_str(s)
    }
}

/// Nominal dimensions of an order line converted to millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub width: f64,
    pub height: f64,
    /// Height of the stacked fixed section (zero when absent).
    pub secondary: f64,
}

/// One window unit as ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Order or line identifier.
    pub id: Option<String>,
    pub customer: Option<String>,
    pub style: Style,
    pub frame: FrameProfile,
    /// Nominal opening width in inches.
    pub width: f64,
    /// Nominal opening height in inches.
    pub height: f64,
    /// Height of the stacked fixed section in inches.
    pub secondary_height: Option<f64>,
    pub glass: GlassType,
    pub grid: GridPattern,
    /// Free-form grid size spec, e.g. `4W x 2H`.
    pub grid_size: Option<String>,
    pub quantity: u32,
    pub color: Option<String>,
    pub argon: Option<String>,
    /// Temper the secondary (stacked) sections regardless of glass code.
    pub temper_secondary: bool,
    pub batch: Option<String>,
    pub po: Option<String>,
    pub note: Option<String>,
}

impl OrderLine {
    /// Create an order line for one unit with Clear/Clear glass and no grid.
    pub fn new(style: Style, frame: FrameProfile, width: f64, height: f64) -> Self {
        Self {
            id: None,
            customer: None,
            style,
            frame,
            width,
            height,
            secondary_height: None,
            glass: GlassType::default(),
            grid: GridPattern::None,
            grid_size: None,
            quantity: 1,
            color: None,
            argon: None,
            temper_secondary: false,
            batch: None,
            po: None,
            note: None,
        }
    }

    pub fn with_glass(mut self, glass: GlassType) -> Self {
        self.glass = glass;
        self
    }

    pub fn with_grid(mut self, grid: GridPattern, size: Option<&str>) -> Self {
        self.grid = grid;
        self.grid_size = size.map(str::to_string);
        self
    }

    pub fn with_secondary_height(mut self, inches: f64) -> Self {
        self.secondary_height = Some(inches);
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_temper_secondary(mut self, temper: bool) -> Self {
        self.temper_secondary = temper;
        self
    }

    /// Nominal dimensions in millimetres.
    pub fn metric(&self) -> Metric {
        Metric {
            width: to_metric(self.width),
            height: to_metric(self.height),
            secondary: to_metric(self.secondary_height.unwrap_or(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_codes_round_trip_through_serde() {
        for style in Style::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.code()));
            let back: Style = serde_json::from_str(&json).unwrap();
            assert_eq!(back, style);
        }
    }

    #[test]
    fn test_secondary_height_styles() {
        assert!(Style::XoPp.needs_secondary_height());
        assert!(Style::PicturePair.needs_secondary_height());
        assert!(!Style::PXo.needs_secondary_height());
        assert!(!Style::Xo.needs_secondary_height());
    }

    #[test]
    fn test_fin_allowance() {
        assert_eq!(FrameProfile::Nailon.fin(), 15.0);
        assert_eq!(FrameProfile::Retrofit.fin(), 0.0);
        assert_eq!(FrameProfile::Unrecognized.fin(), 0.0);
    }

    #[test]
    fn test_glass_panes_put_obscure_last() {
        let glass = GlassType::new(PaneKind::Obscure, PaneKind::LowE270);
        assert_eq!(glass.panes(), (PaneKind::LowE270, PaneKind::Obscure));
        let glass = GlassType::new(PaneKind::Clear, PaneKind::LowE366);
        assert_eq!(glass.panes(), (PaneKind::Clear, PaneKind::LowE366));
    }

    #[test]
    fn test_glass_code() {
        let glass = GlassType::new(PaneKind::Obscure, PaneKind::LowE270).tempered();
        assert_eq!(glass.code(), "OBS/Low-E270 Tempered");
        assert_eq!(GlassType::default().code(), "Clear/Clear");
    }

    #[test]
    fn test_metric_conversion() {
        let order = OrderLine::new(Style::XoPp, FrameProfile::Nailon, 36.0, 60.0)
            .with_secondary_height(20.0);
        let m = order.metric();
        assert!((m.width - 914.4).abs() < 1e-9);
        assert!((m.height - 1524.0).abs() < 1e-9);
        assert!((m.secondary - 508.0).abs() < 1e-9);
    }
}
