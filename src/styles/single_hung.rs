//! SH: single hung, operable bottom sash under a fixed top lite.

use super::common::{frame_bars, frame_size, grid_dim, with_slope};
use crate::config::CONV_MM_INCH;
use crate::grid::{Axis, Count, FixedBars, GridPlan, Hole, SectionBars, StandardBars};
use crate::layout::{GlassPolicy, GlazedSection, Layout, StyleRules};
use crate::model::{CutItem, FrameProfile, Metric, SectionRole};
use crate::units::{mm_to_inch3, round};

const SASH_BARS: SectionBars = SectionBars {
    role: SectionRole::Sash,
    standard: StandardBars {
        width_bars: Count::of(Axis::Down).split(2.0),
        width_hole: Hole::span(Axis::Across),
        height_bars: Count::of(Axis::Across),
        height_hole: Hole::split(Axis::Down, 2.0),
    },
    marginal: FixedBars::new(2.0, 69.5, 2.0, 102.0),
    perimeter: FixedBars::new(1.0, 69.5, 1.0, 102.0),
};

const FIXED_BARS: SectionBars = SectionBars {
    role: SectionRole::Fixed,
    standard: StandardBars {
        width_bars: Count::of(Axis::Down).split(2.0),
        width_hole: Hole::Fixed(32.5),
        height_bars: Count::of(Axis::Across),
        height_hole: Hole::split(Axis::Down, 2.0),
    },
    marginal: FixedBars::new(2.0, 102.0, 2.0, 102.0),
    perimeter: FixedBars::new(1.0, 102.0, 1.0, 102.0),
};

pub const RULES: StyleRules = StyleRules {
    glass: GlassPolicy {
        order_lines: false,
        scale_by_quantity: false,
    },
    grid: GridPlan::Bars(&[&[SASH_BARS, FIXED_BARS]]),
};

pub fn layout(m: &Metric, profile: FrameProfile) -> Layout {
    let (w, h) = (m.width, m.height);
    let fin = profile.fin();
    let (frame_width, frame_height) = frame_size(m);

    let sash_width = mm_to_inch3(w - 47.4 - fin * 2.0 - 2.0);
    let sash_height = if profile.is_nailon() {
        mm_to_inch3(h / 2.0 - 17.1 - fin + 1.0)
    } else {
        mm_to_inch3(h / 2.0 - 17.1)
    };

    let mullion = (w - 36.0 - fin * 2.0) / CONV_MM_INCH;
    let handle_run = if profile.is_nailon() { w - 77.4 } else { w - 46.0 };

    let sash_glass_width = round(w - 110.0 - fin * 2.0 - 2.0, 0);
    let sash_glass_height = round(h / 2.0 - 79.7 - fin - 1.0, 0);
    let fixed_glass_width = round(w - 47.0 - fin * 2.0, 0);
    let fixed_glass_height = round(h / 2.0 - 44.2 - fin - 1.0, 0);

    let parts = vec![
        CutItem::vertical("mullion", round(mullion, 3), 1),
        CutItem::vertical("mullion aluminum", round(mullion - 2.0, 1), 1),
        CutItem::vertical(
            "handle aluminum",
            round(handle_run / CONV_MM_INCH / 2.0 + 4.0, 0),
            1,
        ),
    ];

    Layout {
        frame_width,
        frame_height,
        frame: frame_bars(profile, frame_width, frame_height),
        sash: Some(vec![
            CutItem::vertical("82-05", sash_width, 1),
            CutItem::vertical("82-05", sash_width, 1),
            CutItem::vertical("82-03", sash_height, 2),
        ]),
        screen: Some(vec![
            CutItem::vertical("screenh", round(h / 2.0 - 75.0 - fin - 4.0, 0), 2).in_mm(),
            CutItem::horizontal("screenw", round(w - 87.0 - fin * 2.0 - 4.0 + 2.0, 0), 2).in_mm(),
        ]),
        parts: Some(with_slope(parts, profile, w)),
        sections: vec![
            GlazedSection::new(SectionRole::Sash, 1, sash_glass_width, sash_glass_height)
                .grid(grid_dim(sash_glass_width), grid_dim(sash_glass_height)),
            GlazedSection::new(SectionRole::Fixed, 2, fixed_glass_width, fixed_glass_height)
                .grid(grid_dim(fixed_glass_width), grid_dim(fixed_glass_height)),
        ],
    }
}
