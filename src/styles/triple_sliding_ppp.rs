//! XOX-PPP: an XOX sliding row under three picture lites.

use super::common::{frame_bars, frame_size, grid_dim, screen_bars, sliding_parts, with_slope};
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
            PanelQty::new(SectionRole::Sash, 2, 4, 4),
            PanelQty::new(SectionRole::Fixed, 1, 2, 1),
            PanelQty::new(SectionRole::TopSides, 2, 4, 4),
            PanelQty::new(SectionRole::TopMiddle, 1, 2, 1),
        ],
        light_sections: 5,
        middle_row: true,
    },
};

pub fn layout(m: &Metric, profile: FrameProfile) -> Layout {
    let (w, f) = (m.width, m.secondary);
    let fin = profile.fin();
    let (frame_width, frame_height) = frame_size(m);

    let row = m.height - f;

    let sash_width = mm_to_inch3(w / 4.0 - 14.5 - fin + 1.0);
    let sash_height = mm_to_inch3(row - 6.0 - 46.0 - fin - 3.0);

    let mut parts = sliding_parts(row - 6.0, fin, w - 28.0 - fin * 2.0 - 3.0 - 20.0, 2);
    parts.extend([
        CutItem::horizontal("cover", mm_to_inch3(w / 4.0 - 6.0 - 28.0 - fin - 13.0), 2),
        CutItem::vertical("cover", mm_to_inch3(f - 6.0 - 28.0 - 44.0 - fin), 2),
        CutItem::horizontal("big mullion", mm_to_inch3(w - 28.0 - fin * 2.0 - 2.0 + 1.5), 1),
        CutItem::vertical("big mullion", mm_to_inch3(f - 6.0 - 28.0 - fin - 2.0 + 1.5), 2),
    ]);

    let sash_glass_width = w / 4.0 - 77.0 - fin;
    let sash_glass_height = row - 6.0 - 109.0 - fin - 3.0 - 2.0;
    let fixed_glass_width = w / 2.0 - 41.4;
    let fixed_glass_height = row - 6.0 - 47.0 - fin - 2.0;
    let top_height = f - 6.0 - 41.0 - 6.0 - fin - 2.0;
    let side_width = w / 4.0 - 6.0 - 41.0 - 6.0 - fin;
    let middle_width = w / 2.0 - 12.0 - 41.0 - 6.0;

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
            round(w / 4.0 - 75.0 - fin - 2.0, 0),
            round(row - 6.0 - 87.0 - fin - 4.0, 0),
            2,
        )),
        parts: Some(with_slope(parts, profile, w)),
        sections: vec![
            GlazedSection::new(SectionRole::Sash, 1, sash_glass_width, sash_glass_height)
                .units(2)
                .at("left-right")
                .grid(grid_dim(sash_glass_width), grid_dim(sash_glass_height)),
            GlazedSection::new(SectionRole::Fixed, 2, fixed_glass_width, fixed_glass_height)
                .at("middle")
                .grid(grid_dim(fixed_glass_width), grid_dim(fixed_glass_height)),
            GlazedSection::new(SectionRole::TopSides, 3, side_width, top_height)
                .units(2)
                .grid(grid_dim(side_width), grid_dim(top_height))
                .secondary(),
            GlazedSection::new(SectionRole::TopMiddle, 4, middle_width, top_height)
                .grid(grid_dim(middle_width), grid_dim(top_height))
                .secondary(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::to_metric;

    const EPS: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn metric() -> Metric {
        Metric {
            width: to_metric(96.0),
            height: to_metric(72.0),
            secondary: to_metric(20.0),
        }
    }

    #[test]
    fn test_nailon_sections() {
        let layout = layout(&metric(), FrameProfile::Nailon);
        assert_eq!(layout.sections.len(), 4);

        // 2438.4 / 4 = 609.6, row = 1828.8 - 508 = 1320.8
        let sash = &layout.sections[0];
        assert_eq!(sash.position, Some("left-right"));
        assert_eq!(sash.units, 2);
        assert!(approx_eq(sash.glass_width, 517.6));
        assert!(approx_eq(sash.glass_height, 1185.8));
        assert!(approx_eq(sash.grid_width, 498.0));

        let fixed = &layout.sections[1];
        assert_eq!(fixed.position, Some("middle"));
        assert!(approx_eq(fixed.glass_width, 1177.8));

        let sides = &layout.sections[2];
        assert!(sides.secondary);
        assert!(approx_eq(sides.glass_width, 541.6));
        assert!(approx_eq(sides.glass_height, 438.0));

        let middle = &layout.sections[3];
        assert_eq!(middle.line, 4);
        assert!(approx_eq(middle.glass_width, 1160.2));
    }

    #[test]
    fn test_two_sashes_and_screens() {
        let layout = layout(&metric(), FrameProfile::Retrofit);
        let sash = layout.sash.unwrap();
        assert_eq!(sash[0].qty, 4);
        assert!(approx_eq(sash[0].length, mm_to_inch3(609.6 - 14.5 + 1.0)));

        let screen = layout.screen.unwrap();
        assert_eq!(screen[0].qty, 4);
        // 609.6 - 77
        assert!(approx_eq(screen[0].length, 533.0));

        let handles = &layout.parts.unwrap()[2];
        assert_eq!(handles.qty, 2);
    }
}
