//! P-PP: a full-width picture lite with a pair of picture lites stacked on
//! top. The top row height is the order's secondary height.

use super::common::{frame_bars, frame_size, grid_dim, with_slope};
use crate::grid::{GridPlan, PanelQty};
use crate::layout::{GlassPolicy, GlazedSection, Layout, StyleRules};
use crate::model::{CutItem, FrameProfile, Metric, SectionRole};
use crate::units::mm_to_inch3;

pub const RULES: StyleRules = StyleRules {
    glass: GlassPolicy {
        order_lines: false,
        scale_by_quantity: false,
    },
    grid: GridPlan::Panels {
        panels: &[
            PanelQty::new(SectionRole::Top, 2, 4, 2),
            PanelQty::new(SectionRole::Bottom, 1, 2, 2),
        ],
        light_sections: 3,
        middle_row: false,
    },
};

pub fn layout(m: &Metric, profile: FrameProfile) -> Layout {
    let (w, f) = (m.width, m.secondary);
    let picture_height = m.height - f;
    let fin = profile.fin();
    let (frame_width, frame_height) = frame_size(m);

    let parts = vec![
        CutItem::horizontal("cover", mm_to_inch3(w - 28.0 - fin * 2.0 - 3.0 - 13.0), 1),
        CutItem::vertical(
            "cover",
            mm_to_inch3(picture_height - 6.0 - 28.0 - fin - 44.0),
            1,
        ),
        CutItem::horizontal(
            "cover",
            mm_to_inch3(w / 2.0 - 6.0 - 28.0 - fin - 3.0 - 13.0),
            2,
        ),
        CutItem::vertical("cover", mm_to_inch3(f - 6.0 - 28.0 - fin - 44.0), 2),
        CutItem::horizontal("big mullion", mm_to_inch3(w - 28.0 - fin * 2.0 - 2.0 + 1.5), 1),
        CutItem::vertical("big mullion", mm_to_inch3(f - 6.0 - 28.0 - fin + 1.5), 1),
    ];

    let top_width = w / 2.0 - 6.0 - 41.0 - 6.0 - fin;
    let top_height = f - 6.0 - 41.0 - 6.0 - fin - 2.0;
    let bottom_width = w - 41.0 - 6.0 - fin * 2.0;
    let bottom_height = picture_height - 6.0 - 41.0 - 6.0 - fin - 2.0;

    Layout {
        frame_width,
        frame_height,
        frame: frame_bars(profile, frame_width, frame_height),
        sash: None,
        screen: None,
        parts: Some(with_slope(parts, profile, w)),
        sections: vec![
            GlazedSection::new(SectionRole::Top, 1, top_width, top_height)
                .units(2)
                .grid(grid_dim(top_width), grid_dim(top_height))
                .secondary(),
            GlazedSection::new(SectionRole::Bottom, 2, bottom_width, bottom_height)
                .grid(grid_dim(bottom_width), grid_dim(bottom_height)),
        ],
    }
}
