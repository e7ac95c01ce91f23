//! Cut-list pieces shared by every style: frame perimeter, slope sill,
//! sliding hardware and screens.

use crate::config::{
    CONV_MM_INCH, FRAME_MARGIN_MM, GLAZING_BEAD_MM, GRID_CLEARANCE_MM, SLOPE_TRIM_MM,
};
use crate::model::{CutItem, FrameProfile, Metric};
use crate::units::{mm_to_inch3, round};

/// Outside frame size in inches: nominal opening plus the frame margin on
/// both sides.
pub fn frame_size(m: &Metric) -> (f64, f64) {
    (
        mm_to_inch3(m.width + FRAME_MARGIN_MM * 2.0),
        mm_to_inch3(m.height + FRAME_MARGIN_MM * 2.0),
    )
}

/// Frame perimeter bars for a profile.
pub fn frame_bars(profile: FrameProfile, width: f64, height: f64) -> Vec<CutItem> {
    match profile {
        FrameProfile::Nailon => vec![
            CutItem::horizontal("82-10", width, 2),
            CutItem::vertical("82-10", height, 2),
        ],
        FrameProfile::Retrofit => vec![
            CutItem::horizontal("82-02", width, 2),
            CutItem::vertical("82-02", height, 2),
        ],
        FrameProfile::Block | FrameProfile::BlockSlopeHalf => vec![
            CutItem::horizontal("82-01", width, 2),
            CutItem::vertical("82-01", height, 2),
        ],
        // sloped sill on the bottom, square head on top
        FrameProfile::BlockSlope => vec![
            CutItem::horizontal("82-02B", width, 1),
            CutItem::horizontal("82-01", width, 1),
            CutItem::vertical("82-01", height, 2),
        ],
        FrameProfile::Unrecognized => Vec::new(),
    }
}

/// Slope sill add-on bar, only for half-slope block frames.
pub fn slope_bar(profile: FrameProfile, width_mm: f64) -> Option<CutItem> {
    (profile == FrameProfile::BlockSlopeHalf).then(|| {
        CutItem::horizontal("slop", round((width_mm - SLOPE_TRIM_MM) / CONV_MM_INCH, 1), 1)
    })
}

/// Grid size for a glass dimension: glass less the glazing pocket, whole mm.
pub fn grid_dim(glass_mm: f64) -> f64 {
    round(glass_mm - GLAZING_BEAD_MM - GRID_CLEARANCE_MM, 0)
}

/// Grid size for a glass dimension without rounding.
pub fn grid_dim_exact(glass_mm: f64) -> f64 {
    glass_mm - GLAZING_BEAD_MM - GRID_CLEARANCE_MM
}

/// Sliding mullion and hardware.
///
/// `height_mm` is the height of the operable section and `deduct_mm` the
/// nail-fin allowance taken off it; `track_mm` is the track run.
pub fn sliding_parts(height_mm: f64, deduct_mm: f64, track_mm: f64, handles: u32) -> Vec<CutItem> {
    let mullion = (height_mm - 36.0 - deduct_mm) / CONV_MM_INCH;
    vec![
        CutItem::vertical("mullion", round(mullion, 3), 1),
        CutItem::vertical("mullion aluminum", round(mullion - 2.0, 1), 1),
        CutItem::vertical(
            "handle aluminum",
            round((height_mm - 46.0 - deduct_mm) / CONV_MM_INCH / 2.0 + 4.0, 0),
            handles,
        ),
        CutItem::horizontal("track", round(track_mm / CONV_MM_INCH, 1), 1),
    ]
}

/// Screen frame bars in whole millimetres, `sets` screens.
pub fn screen_bars(width_mm: f64, height_mm: f64, sets: u32) -> Vec<CutItem> {
    vec![
        CutItem::horizontal("screenw", width_mm, 2 * sets).in_mm(),
        CutItem::vertical("screenh", height_mm, 2 * sets).in_mm(),
    ]
}

/// Append the slope bar to a parts list when the profile needs one.
pub fn with_slope(mut parts: Vec<CutItem>, profile: FrameProfile, width_mm: f64) -> Vec<CutItem> {
    parts.extend(slope_bar(profile, width_mm));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Orientation;

    const EPS: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_frame_size_adds_margin() {
        let m = Metric {
            width: 914.4,
            height: 1219.2,
            secondary: 0.0,
        };
        let (w, h) = frame_size(&m);
        assert!(approx_eq(w, 36.236));
        assert!(approx_eq(h, 48.236));
    }

    #[test]
    fn test_frame_bars_per_profile() {
        let nailon = frame_bars(FrameProfile::Nailon, 36.0, 48.0);
        assert_eq!(nailon.len(), 2);
        assert!(nailon.iter().all(|c| c.material == "82-10" && c.qty == 2));

        let slope = frame_bars(FrameProfile::BlockSlope, 36.0, 48.0);
        let materials: Vec<&str> = slope.iter().map(|c| c.material.as_str()).collect();
        assert_eq!(materials, vec!["82-02B", "82-01", "82-01"]);
        assert_eq!(slope[1].orientation, Orientation::Horizontal);
        assert!(approx_eq(slope[1].length, 36.0));

        assert!(frame_bars(FrameProfile::Unrecognized, 36.0, 48.0).is_empty());
    }

    #[test]
    fn test_block_frame_is_a_single_pair() {
        for profile in [FrameProfile::Block, FrameProfile::BlockSlopeHalf] {
            let bars = frame_bars(profile, 36.236, 48.236);
            assert_eq!(bars.len(), 2, "{profile}");
            assert_eq!(bars[0].orientation, Orientation::Horizontal);
            assert_eq!(bars[1].orientation, Orientation::Vertical);
            assert!(bars.iter().all(|c| c.material == "82-01" && c.qty == 2));
        }
    }

    #[test]
    fn test_slope_bar_only_for_half_slope() {
        let bar = slope_bar(FrameProfile::BlockSlopeHalf, 914.4).unwrap();
        assert!(approx_eq(bar.length, 35.6));
        assert!(slope_bar(FrameProfile::BlockSlope, 914.4).is_none());
    }

    #[test]
    fn test_sliding_parts() {
        let parts = sliding_parts(1219.2, 30.0, 914.4 - 28.0 - 30.0 - 3.0 - 20.0, 1);
        assert!(approx_eq(parts[0].length, 45.402));
        assert!(approx_eq(parts[1].length, 43.4));
        assert!(approx_eq(parts[2].length, 27.0));
        assert!(approx_eq(parts[3].length, 32.8));
        assert!(parts[3].is_horizontal());
    }

    #[test]
    fn test_grid_dim() {
        assert!(approx_eq(grid_dim(350.4), 330.0));
        assert!(approx_eq(grid_dim_exact(350.4), 330.4));
    }
}
