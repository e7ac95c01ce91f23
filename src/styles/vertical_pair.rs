//! V-PP: two equal fixed lites stacked, split by a horizontal big mullion.

use super::common::{frame_bars, frame_size, grid_dim, with_slope};
use crate::grid::{FixedBars, GridPlan, SectionBars, StandardBars};
use crate::layout::{GlassPolicy, GlazedSection, Layout, StyleRules};
use crate::model::{CutItem, FrameProfile, Metric, SectionRole};
use crate::units::mm_to_inch3;

const FIXED_BARS: SectionBars = SectionBars {
    role: SectionRole::Fixed,
    standard: StandardBars::PER_PANE,
    marginal: FixedBars::new(4.0, 102.0, 4.0, 102.0).per_unit(),
    perimeter: FixedBars::new(4.0, 102.0, 4.0, 102.0).per_unit(),
};

pub const RULES: StyleRules = StyleRules {
    glass: GlassPolicy {
        order_lines: true,
        scale_by_quantity: true,
    },
    grid: GridPlan::Bars(&[&[FIXED_BARS]]),
};

pub fn layout(m: &Metric, profile: FrameProfile) -> Layout {
    let (w, h) = (m.width, m.height);
    let fin = profile.fin();
    let (frame_width, frame_height) = frame_size(m);

    // cover height always takes the fin allowance
    let parts = vec![
        CutItem::horizontal(
            "cover width",
            mm_to_inch3(w - 28.0 - fin * 2.0 - 44.0 - 3.0 - 13.0),
            1,
        ),
        CutItem::vertical("cover height", mm_to_inch3(h / 2.0 - 6.0 - 28.0 - 15.0), 1),
        CutItem::horizontal("big mullion", mm_to_inch3(w - 28.0 - fin * 2.0 - 2.0 + 1.5), 1),
    ];

    let glass_width = w - 41.0 - 6.0 - fin * 2.0;
    let glass_height = h / 2.0 - 6.0 - 41.0 - 6.0 - fin - 3.0;

    Layout {
        frame_width,
        frame_height,
        frame: frame_bars(profile, frame_width, frame_height),
        sash: None,
        screen: None,
        parts: Some(with_slope(parts, profile, w)),
        sections: vec![GlazedSection::new(SectionRole::Fixed, 1, glass_width, glass_height)
            .units(2)
            .grid(grid_dim(glass_width), grid_dim(glass_height))
            .secondary()],
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

    #[test]
    fn test_nailon_layout() {
        let m = Metric {
            width: to_metric(36.0),
            height: to_metric(60.0),
            secondary: 0.0,
        };
        let layout = layout(&m, FrameProfile::Nailon);
        let parts = layout.parts.unwrap();
        let materials: Vec<&str> = parts.iter().map(|p| p.material.as_str()).collect();
        assert_eq!(materials, vec!["cover width", "cover height", "big mullion"]);
        // 762 - 6 - 28 - 15 = 713
        assert!(approx_eq(parts[1].length, 28.071));

        let section = &layout.sections[0];
        assert_eq!(section.units, 2);
        assert!(section.secondary);
        // 914.4 - 47 - 30
        assert!(approx_eq(section.glass_width, 837.4));
        // 762 - 53 - 15 - 3
        assert!(approx_eq(section.glass_height, 691.0));
        assert!(approx_eq(section.grid_width, 817.0));
    }
}
