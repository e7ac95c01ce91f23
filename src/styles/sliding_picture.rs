//! XO-P / OX-P: a sliding XO/OX row under a single full-width picture lite.

use super::common::{frame_bars, frame_size, grid_dim, screen_bars, sliding_parts, with_slope};
use crate::config::CONV_MM_INCH;
use crate::grid::{FixedBars, GridPlan, SectionBars, StandardBars};
use crate::layout::{GlassPolicy, GlazedSection, Layout, StyleRules};
use crate::model::{CutItem, FrameProfile, Metric, SectionRole};
use crate::units::{mm_to_inch3, round};

const SASH_BARS: SectionBars = SectionBars {
    role: SectionRole::Sash,
    standard: StandardBars::PER_PANE,
    marginal: FixedBars::new(2.0, 102.0, 2.0, 70.0).per_unit(),
    perimeter: FixedBars::new(1.0, 102.0, 1.0, 70.0).per_unit(),
};

const FIXED_BARS: SectionBars = SectionBars {
    role: SectionRole::Fixed,
    standard: StandardBars::PER_PANE,
    marginal: FixedBars::new(2.0, 102.0, 2.0, 102.0).per_unit(),
    perimeter: FixedBars::new(1.0, 102.0, 1.0, 102.0).per_unit(),
};

// the top lite's perimeter counts do not scale with quantity
const TOP_BARS: SectionBars = SectionBars {
    role: SectionRole::Top,
    standard: StandardBars::PER_PANE,
    marginal: FixedBars::new(2.0, 102.0, 2.0, 102.0).per_unit(),
    perimeter: FixedBars::new(1.0, 102.0, 2.0, 102.0),
};

pub const RULES: StyleRules = StyleRules {
    glass: GlassPolicy {
        order_lines: true,
        scale_by_quantity: false,
    },
    grid: GridPlan::Bars(&[&[SASH_BARS, FIXED_BARS], &[TOP_BARS]]),
};

pub fn layout(m: &Metric, profile: FrameProfile) -> Layout {
    let (w, f) = (m.width, m.secondary);
    let fin = profile.fin();
    let (frame_width, frame_height) = frame_size(m);

    let row = m.height - f - 6.0;

    let sash_width = mm_to_inch3(w / 2.0 - 14.5 - fin + 1.0);
    let sash_height = mm_to_inch3(row - 46.0 - fin - 2.0 - 1.0);

    let mut parts = sliding_parts(row, fin, w - 28.0 - fin * 2.0 - 3.0 - 20.0, 1);
    parts.extend([
        CutItem::horizontal(
            "cover",
            round((w - 28.0 - fin * 2.0 - 3.0 - 13.0) / CONV_MM_INCH, 3),
            1,
        ),
        CutItem::vertical("cover", round((f - 6.0 - 28.0 - fin - 44.0) / CONV_MM_INCH, 3), 1),
        CutItem::horizontal(
            "big mullion",
            round((w - 28.0 - fin * 2.0 - 2.0 + 1.5) / CONV_MM_INCH, 3),
            1,
        ),
    ]);

    let sash_glass_width = w / 2.0 - 77.0 - fin;
    let sash_glass_height = row - 109.0 - fin - 3.0 - 2.0;
    let fixed_glass_width = w / 2.0 - 44.0 - fin;
    let fixed_glass_height = row - 47.0 - fin - 2.0;
    let top_width = w - 41.0 - 6.0 - fin * 2.0;
    let top_height = f - 6.0 - 41.0 - 6.0 - fin - 2.0;

    Layout {
        frame_width,
        frame_height,
        frame: frame_bars(profile, frame_width, frame_height),
        sash: Some(vec![
            CutItem::horizontal("82-05", sash_width, 2),
            CutItem::vertical("82-03", sash_height, 1),
            CutItem::vertical("82-03", sash_height, 1),
        ]),
        screen: Some(screen_bars(
            round(w / 2.0 - 75.0 - fin - 2.0, 0),
            round(row - 87.0 - fin - 4.0, 0),
            1,
        )),
        parts: Some(with_slope(parts, profile, w)),
        sections: vec![
            GlazedSection::new(SectionRole::Sash, 1, sash_glass_width, sash_glass_height)
                .grid(grid_dim(sash_glass_width), grid_dim(sash_glass_height)),
            GlazedSection::new(SectionRole::Fixed, 2, fixed_glass_width, fixed_glass_height)
                .grid(grid_dim(fixed_glass_width), grid_dim(fixed_glass_height)),
            GlazedSection::new(SectionRole::Top, 3, top_width, top_height)
                .grid(grid_dim(top_width), grid_dim(top_height))
                .secondary(),
        ],
    }
}
