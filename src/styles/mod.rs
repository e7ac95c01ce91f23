//! Per-style dimension calculators.
//!
//! Each style family turns metric order dimensions into a [`Layout`] and
//! publishes the static [`StyleRules`] that drive the shared glass and grid
//! builders.

mod common;
mod picture;
mod picture_pair;
mod picture_sliding;
mod pp_sliding;
mod single_hung;
pub mod sliding;
mod sliding_picture;
mod sliding_pp;
mod triple_sliding;
mod triple_sliding_ppp;
mod vertical_pair;

pub use common::{frame_bars, frame_size, grid_dim, slope_bar};
pub use sliding::SlidingDims;

use crate::layout::{Layout, StyleRules};
use crate::model::{FrameProfile, Metric, Style};

/// Static rules for a style.
pub fn rules(style: Style) -> &'static StyleRules {
    match style {
        Style::Xo | Style::Ox => &sliding::RULES,
        Style::Xox => &triple_sliding::RULES,
        Style::SingleHung => &single_hung::RULES,
        Style::Picture => &picture::RULES,
        Style::VerticalPicturePair => &vertical_pair::RULES,
        Style::PicturePair => &picture_pair::RULES,
        Style::PpXo | Style::PpOx => &pp_sliding::RULES,
        Style::XoPp | Style::OxPp => &sliding_pp::RULES,
        Style::XoxPpp => &triple_sliding_ppp::RULES,
        Style::XoP | Style::OxP => &sliding_picture::RULES,
        Style::PXo | Style::POx => &picture_sliding::RULES,
    }
}

/// Run the dimension calculator for a style.
pub fn layout(style: Style, m: &Metric, profile: FrameProfile) -> Layout {
    match style {
        Style::Xo | Style::Ox => sliding::layout(m, profile),
        Style::Xox => triple_sliding::layout(m, profile),
        Style::SingleHung => single_hung::layout(m, profile),
        Style::Picture => picture::layout(m, profile),
        Style::VerticalPicturePair => vertical_pair::layout(m, profile),
        Style::PicturePair => picture_pair::layout(m, profile),
        Style::PpXo | Style::PpOx => pp_sliding::layout(m, profile, style.is_sash_right()),
        Style::XoPp | Style::OxPp => sliding_pp::layout(m, profile),
        Style::XoxPpp => triple_sliding_ppp::layout(m, profile),
        Style::XoP | Style::OxP => sliding_picture::layout(m, profile),
        Style::PXo | Style::POx => picture_sliding::layout(m, profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridPlan;
    use crate::units::to_metric;

    fn metric() -> Metric {
        Metric {
            width: to_metric(60.0),
            height: to_metric(72.0),
            secondary: to_metric(20.0),
        }
    }

    #[test]
    fn test_every_style_has_sections() {
        for style in Style::ALL {
            let layout = layout(style, &metric(), FrameProfile::Nailon);
            assert!(!layout.sections.is_empty(), "{style} has no glazed sections");
            assert!(!layout.frame.is_empty(), "{style} has no frame bars");
        }
    }

    #[test]
    fn test_panel_styles() {
        let panels: Vec<Style> = Style::ALL
            .into_iter()
            .filter(|s| matches!(rules(*s).grid, GridPlan::Panels { .. }))
            .collect();
        assert_eq!(
            panels,
            vec![
                Style::PicturePair,
                Style::PpXo,
                Style::PpOx,
                Style::XoPp,
                Style::OxPp,
                Style::XoxPpp
            ]
        );
    }

    #[test]
    fn test_mirrored_styles_share_dimensions() {
        let xo = layout(Style::XoP, &metric(), FrameProfile::Block);
        let ox = layout(Style::OxP, &metric(), FrameProfile::Block);
        assert_eq!(xo, ox);
    }
}
