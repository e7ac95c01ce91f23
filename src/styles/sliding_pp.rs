//! XO-PP / OX-PP: a sliding XO/OX row under a picture pair.

use super::common::{
    frame_bars, frame_size, grid_dim_exact, screen_bars, sliding_parts, with_slope,
};
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
            PanelQty::new(SectionRole::Top, 1, 2, 1),
        ],
        light_sections: 3,
        middle_row: true,
    },
};

pub fn layout(m: &Metric, profile: FrameProfile) -> Layout {
    let (w, f) = (m.width, m.secondary);
    let fin = profile.fin();
    let (frame_width, frame_height) = frame_size(m);

    // operable row, measured inside the head
    let row = m.height - f - 6.0;

    let sash_width = mm_to_inch3(w / 2.0 - 14.5 - fin + 1.0);
    let sash_height = mm_to_inch3(row - 46.0 - fin - 2.0 - 1.0);

    let sliding_width = w / 2.0 - 77.0 - fin;
    let sliding_height = row - 109.0 - fin - 3.0 - 2.0;
    let fixed_width = w / 2.0 - 44.0 - fin;
    let fixed_height = row - 47.0 - fin - 2.0;
    let top_width = w / 2.0 - 6.0 - 41.0 - 6.0 - fin;
    let top_height = f - 6.0 - 41.0 - 6.0 - fin - 2.0;

    let mut parts = sliding_parts(row, fin, w - 28.0 - fin * 2.0 - 3.0 - 20.0, 1);
    parts.extend([
        CutItem::horizontal("cover", mm_to_inch3(w / 2.0 - 6.0 - 28.0 - fin - 3.0 - 13.0), 2),
        CutItem::vertical("cover", mm_to_inch3(f - 6.0 - 28.0 - fin - 44.0), 2),
        CutItem::horizontal("big mullion", mm_to_inch3(w - 28.0 - fin * 2.0 - 2.0 + 1.5), 1),
        CutItem::vertical("big mullion", mm_to_inch3(f - 6.0 - 28.0 - fin + 1.5), 1),
    ]);

    Layout {
        frame_width,
        frame_height,
        frame: frame_bars(profile, frame_width, frame_height),
        sash: Some(vec![
            CutItem::horizontal("82-03", sash_width, 2),
            CutItem::vertical("82-03", sash_height, 1),
            CutItem::vertical("82-05", sash_height, 1),
        ]),
        screen: Some(screen_bars(
            round(w / 2.0 - 75.0 - fin - 2.0, 0),
            round(row - 87.0 - fin - 4.0, 0),
            1,
        )),
        parts: Some(with_slope(parts, profile, w)),
        sections: vec![
            GlazedSection::new(SectionRole::Sash, 1, sliding_width, sliding_height)
                .grid(grid_dim_exact(sliding_width), grid_dim_exact(sliding_height)),
            GlazedSection::new(SectionRole::Fixed, 2, fixed_width, fixed_height)
                .grid(grid_dim_exact(fixed_width), grid_dim_exact(fixed_height)),
            GlazedSection::new(SectionRole::Top, 3, top_width, top_height)
                .units(2)
                .grid(grid_dim_exact(top_width), grid_dim_exact(top_height)),
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
            width: to_metric(60.0),
            height: to_metric(72.0),
            secondary: to_metric(24.0),
        }
    }

    #[test]
    fn test_nailon_layout() {
        let layout = layout(&metric(), FrameProfile::Nailon);
        // row = 1828.8 - 609.6 - 6 = 1213.2
        let sliding = &layout.sections[0];
        assert!(approx_eq(sliding.glass_width, 670.0));
        assert!(approx_eq(sliding.glass_height, 1084.2));
        assert!(approx_eq(sliding.grid_height, 1064.2));

        let fixed = &layout.sections[1];
        assert!(approx_eq(fixed.glass_width, 703.0));
        assert!(approx_eq(fixed.glass_height, 1149.2));

        let top = &layout.sections[2];
        assert_eq!(top.units, 2);
        assert!(approx_eq(top.glass_width, 694.0));
        assert!(approx_eq(top.glass_height, 539.6));
        assert!(!top.secondary);

        let screen = layout.screen.unwrap();
        assert!(approx_eq(screen[0].length, 670.0));
        assert!(approx_eq(screen[1].length, 1107.0));
    }

    #[test]
    fn test_parts_include_covers_and_big_mullions() {
        let parts = layout(&metric(), FrameProfile::Retrofit).parts.unwrap();
        let materials: Vec<&str> = parts.iter().map(|p| p.material.as_str()).collect();
        assert_eq!(
            materials,
            vec![
                "mullion",
                "mullion aluminum",
                "handle aluminum",
                "track",
                "cover",
                "cover",
                "big mullion",
                "big mullion"
            ]
        );
        // 1524 - 28 - 0.5 = 1495.5
        assert!(approx_eq(parts[6].length, 58.878));
    }

    #[test]
    fn test_half_slope_appends_slop() {
        let parts = layout(&metric(), FrameProfile::BlockSlopeHalf).parts.unwrap();
        assert_eq!(parts.last().unwrap().material, "slop");
    }
}
