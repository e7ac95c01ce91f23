//! XO / OX: one sliding sash beside one fixed lite.
//!
//! This family can also be driven by runtime formulas; [`SlidingDims`]
//! is the value set both paths produce before assembly.

use std::collections::HashMap;

use super::common::{frame_bars, frame_size, grid_dim, screen_bars, with_slope};
use crate::error::{BomError, Result};
use crate::grid::{Axis, Count, FixedBars, GridPlan, Hole, SectionBars, StandardBars};
use crate::layout::{GlassPolicy, GlazedSection, Layout, StyleRules};
use crate::model::{CutItem, FrameProfile, Metric, SectionRole};
use crate::units::{mm_to_inch3, round};

const SASH_BARS: SectionBars = SectionBars {
    role: SectionRole::Sash,
    standard: StandardBars {
        width_bars: Count::of(Axis::Down),
        width_hole: Hole::split(Axis::Across, 2.0),
        height_bars: Count::of(Axis::Across).split(2.0),
        height_hole: Hole::span(Axis::Down),
    },
    marginal: FixedBars::new(2.0, 102.0, 2.0, 70.0),
    perimeter: FixedBars::new(2.0, 102.0, 1.0, 70.0),
};

const FIXED_BARS: SectionBars = SectionBars {
    role: SectionRole::Fixed,
    standard: StandardBars {
        width_bars: Count::of(Axis::Down),
        width_hole: Hole::split(Axis::Across, 2.0),
        height_bars: Count::of(Axis::Across).split(2.0),
        height_hole: Hole::Fixed(32.0),
    },
    marginal: FixedBars::new(2.0, 102.0, 2.0, 102.0),
    perimeter: FixedBars::new(2.0, 102.0, 1.0, 102.0),
};

pub const RULES: StyleRules = StyleRules {
    glass: GlassPolicy {
        order_lines: false,
        scale_by_quantity: false,
    },
    grid: GridPlan::Bars(&[&[SASH_BARS, FIXED_BARS]]),
};

/// Every dimension of an XO/OX unit, inches for cuts and mm for glass,
/// screen and grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingDims {
    pub frame_width: f64,
    pub frame_height: f64,
    pub sash_width: f64,
    pub sash_height: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub mullion: f64,
    pub mullion_aluminum: f64,
    pub handle: f64,
    pub track: f64,
    pub sash_glass_width: f64,
    pub sash_glass_height: f64,
    pub fixed_glass_width: f64,
    pub fixed_glass_height: f64,
    pub sash_grid_width: f64,
    pub sash_grid_height: f64,
    pub fixed_grid_width: f64,
    pub fixed_grid_height: f64,
}

impl SlidingDims {
    /// Formula variable names, in field order.
    pub const VARIABLES: [&'static str; 18] = [
        "frameWidth",
        "frameHeight",
        "sashWidth",
        "sashHeight",
        "screenw",
        "screenh",
        "mullion",
        "mullionA",
        "handleA",
        "track",
        "sashglassw",
        "sashglassh",
        "fixedglassw",
        "fixedglassh",
        "sashgridw",
        "sashgridh",
        "fixedgridw",
        "fixedgridh",
    ];

    /// Compiled dimension chain.
    pub fn compute(m: &Metric, profile: FrameProfile) -> Self {
        let (w, h) = (m.width, m.height);
        let fin = profile.fin();
        let (frame_width, frame_height) = frame_size(m);

        // Nailon glass is cut to whole millimetres.
        let glass = |v: f64| if profile.is_nailon() { round(v, 0) } else { v };
        let sash_glass_width = glass(w / 2.0 - 77.0 - fin + 3.0);
        let sash_glass_height = glass(h - 109.0 - fin * 2.0 - 3.0 - 2.0);
        let fixed_glass_width = glass(w / 2.0 - 44.0 - fin);
        let fixed_glass_height = glass(h - 47.0 - fin * 2.0 - 2.0);

        Self {
            frame_width,
            frame_height,
            sash_width: mm_to_inch3(w / 2.0 - 14.5 - fin + 1.0),
            sash_height: mm_to_inch3(h - 46.0 - fin * 2.0 - 2.0 - 1.0),
            screen_width: round(w / 2.0 - 75.0 - fin - 2.0, 0),
            screen_height: round(h - 87.0 - fin * 2.0 - 4.0, 0),
            mullion: round((h - 36.0 - fin * 2.0) / 25.4, 3),
            mullion_aluminum: round((h - 36.0 - fin * 2.0) / 25.4 - 2.0, 1),
            handle: round((h - 46.0 - fin * 2.0) / 25.4 / 2.0 + 4.0, 0),
            track: round((w - 14.0 * 2.0 - fin * 2.0 - 3.0 - 20.0) / 25.4, 1),
            sash_glass_width,
            sash_glass_height,
            fixed_glass_width,
            fixed_glass_height,
            sash_grid_width: grid_dim(sash_glass_width),
            sash_grid_height: grid_dim(sash_glass_height),
            fixed_grid_width: grid_dim(fixed_glass_width),
            fixed_grid_height: grid_dim(fixed_glass_height),
        }
    }

    /// Build from evaluated formula variables.
    pub fn from_values(values: &HashMap<String, f64>) -> Result<Self> {
        let get = |name: &str| {
            values
                .get(name)
                .copied()
                .ok_or_else(|| BomError::MissingFormulaValue {
                    name: name.to_string(),
                })
        };
        Ok(Self {
            frame_width: get("frameWidth")?,
            frame_height: get("frameHeight")?,
            sash_width: get("sashWidth")?,
            sash_height: get("sashHeight")?,
            screen_width: get("screenw")?,
            screen_height: get("screenh")?,
            mullion: get("mullion")?,
            mullion_aluminum: get("mullionA")?,
            handle: get("handleA")?,
            track: get("track")?,
            sash_glass_width: get("sashglassw")?,
            sash_glass_height: get("sashglassh")?,
            fixed_glass_width: get("fixedglassw")?,
            fixed_glass_height: get("fixedglassh")?,
            sash_grid_width: get("sashgridw")?,
            sash_grid_height: get("sashgridh")?,
            fixed_grid_width: get("fixedgridw")?,
            fixed_grid_height: get("fixedgridh")?,
        })
    }

    /// Assemble cut lists and glazed sections.
    pub fn assemble(&self, m: &Metric, profile: FrameProfile) -> Layout {
        let parts = vec![
            CutItem::vertical("mullion", self.mullion, 1),
            CutItem::vertical("mullion aluminum", self.mullion_aluminum, 1),
            CutItem::vertical("handle aluminum", self.handle, 1),
            CutItem::horizontal("track", self.track, 1),
        ];

        Layout {
            frame_width: self.frame_width,
            frame_height: self.frame_height,
            frame: frame_bars(profile, self.frame_width, self.frame_height),
            sash: Some(vec![
                CutItem::horizontal("82-03", self.sash_width, 2),
                CutItem::vertical("82-03", self.sash_height, 1),
                CutItem::vertical("82-05", self.sash_height, 1),
            ]),
            screen: Some(screen_bars(self.screen_width, self.screen_height, 1)),
            parts: Some(with_slope(parts, profile, m.width)),
            sections: vec![
                GlazedSection::new(
                    SectionRole::Sash,
                    1,
                    self.sash_glass_width,
                    self.sash_glass_height,
                )
                .grid(self.sash_grid_width, self.sash_grid_height),
                GlazedSection::new(
                    SectionRole::Fixed,
                    2,
                    self.fixed_glass_width,
                    self.fixed_glass_height,
                )
                .grid(self.fixed_grid_width, self.fixed_grid_height),
            ],
        }
    }
}

pub fn layout(m: &Metric, profile: FrameProfile) -> Layout {
    SlidingDims::compute(m, profile).assemble(m, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::to_metric;

    const EPS: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn metric(w: f64, h: f64) -> Metric {
        Metric {
            width: to_metric(w),
            height: to_metric(h),
            secondary: 0.0,
        }
    }

    #[test]
    fn test_nailon_dims() {
        let d = SlidingDims::compute(&metric(36.0, 48.0), FrameProfile::Nailon);
        assert!(approx_eq(d.frame_width, 36.236));
        assert!(approx_eq(d.frame_height, 48.236));
        // 914.4 / 2 - 14.5 - 15 + 1 = 428.7
        assert!(approx_eq(d.sash_width, 16.878));
        // 1219.2 - 46 - 30 - 3 = 1140.2
        assert!(approx_eq(d.sash_height, 44.890));
        assert!(approx_eq(d.screen_width, 365.0));
        assert!(approx_eq(d.screen_height, 1098.0));
        assert!(approx_eq(d.sash_glass_width, 368.0));
        assert!(approx_eq(d.sash_glass_height, 1075.0));
        assert!(approx_eq(d.fixed_glass_width, 398.0));
        assert!(approx_eq(d.fixed_glass_height, 1140.0));
        assert!(approx_eq(d.sash_grid_width, 348.0));
        assert!(approx_eq(d.fixed_grid_height, 1120.0));
    }

    #[test]
    fn test_other_profile_glass_unrounded() {
        let d = SlidingDims::compute(&metric(36.0, 48.0), FrameProfile::Retrofit);
        // 457.2 - 77 + 3
        assert!(approx_eq(d.sash_glass_width, 383.2));
        assert!(approx_eq(d.sash_grid_width, 363.0));
        assert!(approx_eq(d.screen_width, 380.0));
    }

    #[test]
    fn test_layout_lists() {
        let layout = layout(&metric(36.0, 48.0), FrameProfile::Nailon);
        let sash = layout.sash.as_ref().unwrap();
        assert_eq!(sash.len(), 3);
        assert_eq!(sash[0].qty, 2);
        assert_eq!(layout.parts.as_ref().unwrap().len(), 4);
        assert_eq!(layout.sections.len(), 2);
        assert_eq!(layout.sections[0].line, 1);
        assert_eq!(layout.sections[1].role, SectionRole::Fixed);
    }

    #[test]
    fn test_half_slope_adds_slop_part() {
        let layout = layout(&metric(36.0, 48.0), FrameProfile::BlockSlopeHalf);
        let parts = layout.parts.unwrap();
        assert_eq!(parts.last().unwrap().material, "slop");
    }

    #[test]
    fn test_from_values_reports_missing_name() {
        let mut values = HashMap::new();
        values.insert("frameWidth".to_string(), 36.236);
        let err = SlidingDims::from_values(&values).unwrap_err();
        assert!(matches!(err, BomError::MissingFormulaValue { ref name } if name == "frameHeight"));
    }
}
