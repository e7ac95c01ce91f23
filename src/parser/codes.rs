//! Decoding of the string codes used on order forms.
//!
//! Every function returns `None` for a code it does not recognise; the
//! caller decides which default applies.

use crate::model::{FrameProfile, GlassType, GridPattern, PaneKind, Style};

/// Normalise a code for comparison: trimmed, lower case, `_` read as `-`.
fn normalize(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}

/// Parse a style code such as `XO`, `PP-OX` or `XO_P`.
pub fn parse_style(code: &str) -> Option<Style> {
    let code = normalize(code);
    Style::ALL
        .into_iter()
        .find(|style| style.code().to_lowercase() == code)
}

/// Parse a frame profile code.
pub fn parse_frame(code: &str) -> Option<FrameProfile> {
    match normalize(code).as_str() {
        "nailon" | "nail-on" => Some(FrameProfile::Nailon),
        "retrofit" => Some(FrameProfile::Retrofit),
        "block" => Some(FrameProfile::Block),
        "block-slope" | "block-slop" => Some(FrameProfile::BlockSlope),
        "block-slope 1/2" | "block-slop 1/2" => Some(FrameProfile::BlockSlopeHalf),
        _ => None,
    }
}

/// Parse a grid pattern. Blank and `no` mean no grid.
pub fn parse_grid(code: &str) -> Option<GridPattern> {
    match normalize(code).as_str() {
        "" | "no" | "none" => Some(GridPattern::None),
        "standard" => Some(GridPattern::Standard),
        "marginal" => Some(GridPattern::Marginal),
        "perimeter" => Some(GridPattern::Perimeter),
        _ => None,
    }
}

fn parse_pane(name: &str) -> Option<PaneKind> {
    match name.trim().to_lowercase().as_str() {
        "clear" => Some(PaneKind::Clear),
        "low-e270" | "lowe270" | "lowe2" | "low-e2" => Some(PaneKind::LowE270),
        "low-e366" | "lowe366" | "lowe3" | "low-e3" => Some(PaneKind::LowE366),
        "obs" => Some(PaneKind::Obscure),
        _ => None,
    }
}

/// Whether a glass code asks for tempered glass (`Tempered` or `Tmp`).
pub fn is_tempered(code: &str) -> bool {
    let code = code.to_lowercase();
    code.contains("tempered") || code.contains("tmp")
}

/// Parse a glass code such as `Clear/Low-E270 Tempered` or `OBS/Lowe3 Tmp`.
///
/// Only the twelve catalogue makeups are accepted: the first pane is clear
/// or obscure and the second pane clear or one of the low-E coatings.
pub fn parse_glass(code: &str) -> Option<GlassType> {
    let tempered = is_tempered(code);
    let panes = code.split_whitespace().next()?;
    let (first, second) = panes.split_once('/')?;
    let first = parse_pane(first)?;
    let second = parse_pane(second)?;

    if !matches!(first, PaneKind::Clear | PaneKind::Obscure) || second == PaneKind::Obscure {
        return None;
    }

    let glass = GlassType::new(first, second);
    Some(if tempered { glass.tempered() } else { glass })
}
