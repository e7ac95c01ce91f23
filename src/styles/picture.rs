//! Picture: a single fixed lite.

use super::common::{frame_bars, frame_size, grid_dim, with_slope};
use crate::config::CONV_MM_INCH;
use crate::grid::{FixedBars, GridPlan, SectionBars, StandardBars};
use crate::layout::{GlassPolicy, GlazedSection, Layout, StyleRules};
use crate::model::{CutItem, FrameProfile, Metric, SectionRole};
use crate::units::round;

const FIXED_BARS: SectionBars = SectionBars {
    role: SectionRole::Fixed,
    standard: StandardBars::PER_PANE,
    marginal: FixedBars::new(2.0, 102.0, 2.0, 102.0).per_unit(),
    perimeter: FixedBars::new(2.0, 102.0, 2.0, 102.0).per_unit(),
};

pub const RULES: StyleRules = StyleRules {
    glass: GlassPolicy {
        order_lines: false,
        scale_by_quantity: false,
    },
    grid: GridPlan::Bars(&[&[FIXED_BARS]]),
};

pub fn layout(m: &Metric, profile: FrameProfile) -> Layout {
    let (w, h) = (m.width, m.height);
    let fin = profile.fin();
    let (frame_width, frame_height) = frame_size(m);

    let cover_width = round((w - 28.0 - fin * 2.0 - 3.0 - 13.0) / CONV_MM_INCH, 3);
    let cover_height = round((h - 28.0 - fin * 2.0 - 44.0 - 3.175) / CONV_MM_INCH, 3);

    let glass_width = round(w - 47.0 - fin * 2.0 - 2.0, 0);
    let glass_height = round(h - 47.0 - fin * 2.0 - 2.0, 0);

    let parts = vec![
        CutItem::horizontal("cover", cover_width, 1),
        CutItem::vertical("cover", cover_height, 1),
    ];

    Layout {
        frame_width,
        frame_height,
        frame: frame_bars(profile, frame_width, frame_height),
        sash: None,
        screen: None,
        parts: Some(with_slope(parts, profile, w)),
        sections: vec![GlazedSection::new(SectionRole::Fixed, 1, glass_width, glass_height)
            .grid(grid_dim(glass_width), grid_dim(glass_height))],
    }
}
