//! PP-XO / PP-OX: a picture pair on top of a sliding XO/OX row.
//!
//! Dimensions follow the frame daylight opening rather than the nominal
//! size, so every profile carries its own daylight allowance.

use super::common::{frame_bars, frame_size, screen_bars, with_slope};
use crate::grid::{GridPlan, PanelQty};
use crate::layout::{GlassPolicy, GlazedSection, Layout, StyleRules};
use crate::model::{CutItem, FrameProfile, Metric, SectionRole};
use crate::units::{mm_to_inch3, round};

pub const RULES: StyleRules = StyleRules {
    glass: GlassPolicy {
        order_lines: false,
        scale_by_quantity: false,
    },
    grid: GridPlan::Panels {
        panels: &[
            PanelQty::new(SectionRole::Sash, 1, 2, 1),
            PanelQty::new(SectionRole::Fixed, 1, 2, 1),
            PanelQty::new(SectionRole::Top, 2, 4, 2),
        ],
        light_sections: 3,
        middle_row: true,
    },
};

/// Frame-to-daylight allowance in mm.
fn daylight_allowance(profile: FrameProfile) -> f64 {
    match profile {
        FrameProfile::Nailon => 64.0,
        FrameProfile::Block | FrameProfile::BlockSlope => 69.0,
        FrameProfile::Retrofit | FrameProfile::BlockSlopeHalf | FrameProfile::Unrecognized => 79.0,
    }
}

pub fn layout(m: &Metric, profile: FrameProfile, sash_right: bool) -> Layout {
    let f = m.secondary;
    let nailon = profile.is_nailon();
    let (frame_width, frame_height) = frame_size(m);

    let daylight_width = m.width - daylight_allowance(profile);
    let row_height = m.height - f;

    let sash_width = daylight_width / 2.0;
    let sash_height = row_height - if nailon { 64.0 } else { 67.0 };

    let lite_width = sash_width - 27.0;
    let lite_height = sash_height - 54.0;
    let top_width = daylight_width / 2.0 - 19.0;
    let top_height = f - if nailon { 64.0 } else { 65.0 };

    let parts = vec![
        CutItem::horizontal("mullion", mm_to_inch3(daylight_width), 1),
        CutItem::vertical("mullion", mm_to_inch3(row_height - 64.0), 1),
    ];

    let (sash_at, fixed_at, sash_line, fixed_line) = if sash_right {
        ("right", "left", 2, 1)
    } else {
        ("left", "right", 1, 2)
    };

    Layout {
        frame_width,
        frame_height,
        frame: frame_bars(profile, frame_width, frame_height),
        sash: Some(vec![
            CutItem::horizontal("82-03", mm_to_inch3(sash_width), 2),
            CutItem::vertical("82-03", mm_to_inch3(sash_height), 1),
            CutItem::vertical("82-05", mm_to_inch3(sash_height), 1),
        ]),
        screen: Some(screen_bars(
            round(sash_width - 6.0, 0),
            round(sash_height - 6.0, 0),
            1,
        )),
        parts: Some(with_slope(parts, profile, m.width)),
        // grid follows the glass size in this family
        sections: vec![
            GlazedSection::new(SectionRole::Sash, sash_line, lite_width, lite_height).at(sash_at),
            GlazedSection::new(SectionRole::Fixed, fixed_line, lite_width, lite_height).at(fixed_at),
            GlazedSection::new(SectionRole::Top, 3, top_width, top_height).units(2),
        ],
    }
}
