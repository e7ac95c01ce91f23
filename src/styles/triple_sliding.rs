//! XOX: two sliding sashes flanking a centre fixed lite.

use super::common::{frame_bars, frame_size, grid_dim, screen_bars, sliding_parts, with_slope};
use crate::grid::{Axis, Count, FixedBars, GridPlan, Hole, SectionBars, StandardBars};
use crate::layout::{GlassPolicy, GlazedSection, Layout, StyleRules};
use crate::model::{CutItem, FrameProfile, Metric, SectionRole};
use crate::units::{mm_to_inch3, round};

const SASH_BARS: SectionBars = SectionBars {
    role: SectionRole::Sash,
    standard: StandardBars {
        width_bars: Count::of(Axis::Down).times(2.0),
        width_hole: Hole::split(Axis::Across, 3.0),
        height_bars: Count::of(Axis::Across).split(3.0).times(2.0),
        height_hole: Hole::span(Axis::Down),
    },
    marginal: FixedBars::new(4.0, 102.0, 4.0, 70.0),
    perimeter: FixedBars::new(4.0, 102.0, 2.0, 70.0),
};

const FIXED_BARS: SectionBars = SectionBars {
    role: SectionRole::Fixed,
    standard: StandardBars {
        width_bars: Count::of(Axis::Down),
        width_hole: Hole::split(Axis::Across, 3.0),
        height_bars: Count::of(Axis::Across).split(3.0),
        height_hole: Hole::Fixed(32.0),
    },
    marginal: FixedBars::new(2.0, 102.0, 2.0, 102.0),
    // perimeter fixed lite only carries the width bars
    perimeter: FixedBars {
        width_bars: Some(2.0),
        width_hole: None,
        height_bars: None,
        height_hole: None,
        per_unit: false,
    },
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

    let sash_width = mm_to_inch3(w / 3.0 - 14.5 - fin + 1.0);
    let sash_height = mm_to_inch3(h - 46.0 - fin * 2.0 - 2.0 - 1.0);

    let sash_glass_width = if profile.is_nailon() {
        round(w / 3.0 - 77.0 - fin + 3.0, 0)
    } else {
        round(w / 3.0 - 77.0, 0)
    };
    let sash_glass_height = round(h - 109.0 - fin * 2.0 - 3.0 - 2.0, 0);
    let fixed_glass_width = round(w / 3.0 - 41.4, 0);
    let fixed_glass_height = round(h - 47.0 - fin * 2.0 - 2.0, 0);

    let parts = sliding_parts(h, fin * 2.0, w - 28.0 - fin * 2.0 - 3.0 - 20.0, 2);

    Layout {
        frame_width,
        frame_height,
        frame: frame_bars(profile, frame_width, frame_height),
        sash: Some(vec![
            CutItem::horizontal("82-03", sash_width, 4),
            CutItem::vertical("82-03", sash_height, 2),
            CutItem::vertical("82-05", sash_height, 2),
        ]),
        screen: Some(screen_bars(
            round(w / 3.0 - 75.0 - fin - 2.0, 0),
            round(h - 87.0 - fin * 2.0 - 4.0, 0),
            2,
        )),
        parts: Some(with_slope(parts, profile, w)),
        sections: vec![
            GlazedSection::new(SectionRole::Sash, 1, sash_glass_width, sash_glass_height)
                .units(2)
                .grid(grid_dim(sash_glass_width), grid_dim(sash_glass_height)),
            GlazedSection::new(SectionRole::Fixed, 2, fixed_glass_width, fixed_glass_height)
                .grid(grid_dim(fixed_glass_width), grid_dim(fixed_glass_height)),
        ],
    }
}
