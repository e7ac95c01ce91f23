//! Grid (muntin) bar calculation.
//!
//! Each style declares a [`GridPlan`]. Bar plans compute per-section bar
//! counts and hole spacings; panel plans emit one panel-count entry per
//! section plus a light-count summary derived from the nominal size.

mod rules;
mod size;

pub use rules::{Axis, Count, FixedBars, GridPlan, Hole, PanelQty, SectionBars, StandardBars};
pub use size::GridSize;

use thiserror::Error;
use tracing::warn;

use crate::layout::GlazedSection;
use crate::model::{GridItem, GridPattern, GridSection, GridSummary, Metric, SectionRole};

/// Vertical divider thresholds by nominal width in mm (36" and 60").
const WIDTH_BREAKS_MM: [f64; 2] = [914.4, 1524.0];

/// Horizontal divider threshold by half the nominal height in mm (24").
const HALF_HEIGHT_BREAK_MM: f64 = 609.6;

/// Failure computing one grid section.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid size has zero lites on the {} axis", .0.label())]
    ZeroLites(Axis),

    #[error("no glazed section for grid role {0:?}")]
    MissingSection(SectionRole),
}

/// Grid entries and diagnostics for one unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridOutcome {
    pub items: Vec<GridItem>,
    pub summary: Option<GridSummary>,
    /// Sections that failed and were left out.
    pub warnings: Vec<String>,
}

/// Compute the grid list for a unit.
///
/// Sections that fail are omitted and reported in
/// [`GridOutcome::warnings`]; the remaining sections still compute.
pub fn calculate_grid(
    plan: &GridPlan,
    sections: &[GlazedSection],
    pattern: GridPattern,
    grid_size: Option<&str>,
    quantity: u32,
    metric: &Metric,
) -> GridOutcome {
    let mut outcome = GridOutcome::default();
    if pattern == GridPattern::None {
        return outcome;
    }

    match plan {
        GridPlan::Bars(groups) => {
            let size = GridSize::parse(grid_size);
            for group in groups.iter() {
                let mut item = GridItem::default();
                for rule in group.iter() {
                    match bar_section(rule, sections, pattern, size, quantity) {
                        Ok(section) => item.sections.push(section),
                        Err(e) => {
                            warn!("Grid section {:?} omitted: {}", rule.role, e);
                            outcome
                                .warnings
                                .push(format!("grid section {:?} omitted: {}", rule.role, e));
                        }
                    }
                }
                if !item.sections.is_empty() {
                    outcome.items.push(item);
                }
            }
        }
        GridPlan::Panels {
            panels,
            light_sections,
            middle_row,
        } => {
            for rule in panels.iter() {
                match panel_section(rule, sections, pattern, quantity) {
                    Ok(section) => outcome.items.push(GridItem::new(vec![section])),
                    Err(e) => {
                        warn!("Grid panel {:?} omitted: {}", rule.role, e);
                        outcome
                            .warnings
                            .push(format!("grid panel {:?} omitted: {}", rule.role, e));
                    }
                }
            }
            outcome.summary = Some(light_summary(metric, pattern, *light_sections, *middle_row));
        }
    }

    outcome
}

fn find_section(sections: &[GlazedSection], role: SectionRole) -> Result<&GlazedSection, GridError> {
    sections
        .iter()
        .find(|s| s.role == role)
        .ok_or(GridError::MissingSection(role))
}

fn bar_section(
    rule: &SectionBars,
    sections: &[GlazedSection],
    pattern: GridPattern,
    size: GridSize,
    quantity: u32,
) -> Result<GridSection, GridError> {
    let glazed = find_section(sections, rule.role)?;
    let mut section = GridSection {
        role: Some(rule.role),
        position: glazed.position.map(str::to_string),
        pattern,
        width: Some(glazed.grid_width),
        height: Some(glazed.grid_height),
        ..Default::default()
    };

    match pattern {
        GridPattern::Standard => {
            let bars = &rule.standard;
            section.width_bars = Some(bars.width_bars.eval(size));
            section.width_hole = Some(
                bars.width_hole
                    .eval(glazed.grid_width, size)
                    .map_err(GridError::ZeroLites)?,
            );
            section.height_bars = Some(bars.height_bars.eval(size));
            section.height_hole = Some(
                bars.height_hole
                    .eval(glazed.grid_height, size)
                    .map_err(GridError::ZeroLites)?,
            );
        }
        GridPattern::Marginal | GridPattern::Perimeter => {
            let bars = if pattern == GridPattern::Marginal {
                &rule.marginal
            } else {
                &rule.perimeter
            };
            let scale = if bars.per_unit { quantity as f64 } else { 1.0 };
            section.width_bars = bars.width_bars.map(|n| n * scale);
            section.width_hole = bars.width_hole;
            section.height_bars = bars.height_bars.map(|n| n * scale);
            section.height_hole = bars.height_hole;
        }
        GridPattern::None => {}
    }

    Ok(section)
}

fn panel_section(
    rule: &PanelQty,
    sections: &[GlazedSection],
    pattern: GridPattern,
    quantity: u32,
) -> Result<GridSection, GridError> {
    let glazed = find_section(sections, rule.role)?;
    let multiplier = match pattern {
        GridPattern::Standard => rule.standard,
        GridPattern::Marginal => rule.marginal,
        GridPattern::Perimeter => rule.perimeter,
        GridPattern::None => 0,
    };
    Ok(GridSection {
        role: Some(rule.role),
        position: glazed.position.map(str::to_string),
        pattern,
        width: Some(glazed.grid_width),
        height: Some(glazed.grid_height),
        qty: Some(quantity.saturating_mul(multiplier)),
        ..Default::default()
    })
}

/// Light count and `RxC` configuration labels from the nominal size.
pub fn light_summary(
    metric: &Metric,
    pattern: GridPattern,
    sections: u32,
    middle_row: bool,
) -> GridSummary {
    let vertical: u32 = if metric.width <= WIDTH_BREAKS_MM[0] {
        1
    } else if metric.width <= WIDTH_BREAKS_MM[1] {
        2
    } else {
        3
    };
    let horizontal: u32 = if metric.height / 2.0 <= HALF_HEIGHT_BREAK_MM {
        1
    } else {
        2
    };

    let per_section = (vertical + 1) * (horizontal + 1);
    let base = format!("{}x{}", horizontal + 1, vertical + 1);
    let (light_count, config) = match pattern {
        GridPattern::Marginal => (per_section * sections * 2, format!("{} Marginal", base)),
        GridPattern::Perimeter => (per_section * sections, format!("{} Perimeter", base)),
        _ => (per_section * sections, base),
    };

    GridSummary {
        light_count,
        config_top: config.clone(),
        config_middle: middle_row.then(|| config.clone()),
        config_bottom: config,
    }
}
