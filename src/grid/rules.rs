//! Static grid tables: bar-count conventions per style and section.

use super::GridSize;
use crate::model::SectionRole;

/// Grid axis a Standard count is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Lites across the width.
    Across,
    /// Lites down the height.
    Down,
}

impl Axis {
    fn of(&self, size: GridSize) -> f64 {
        match self {
            Axis::Across => size.across as f64,
            Axis::Down => size.down as f64,
        }
    }

    pub fn label(&self) -> char {
        match self {
            Axis::Across => 'w',
            Axis::Down => 'h',
        }
    }
}

/// Bar count `(n / divisor - 1) * multiplier` where `n` is the lite count
/// on `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Count {
    pub axis: Axis,
    pub divisor: f64,
    pub multiplier: f64,
}

impl Count {
    /// `n - 1` bars.
    pub const fn of(axis: Axis) -> Self {
        Self {
            axis,
            divisor: 1.0,
            multiplier: 1.0,
        }
    }

    /// Lites shared between `divisor` panes.
    pub const fn split(self, divisor: f64) -> Self {
        Self { divisor, ..self }
    }

    /// Same bars repeated on `multiplier` panes.
    pub const fn times(self, multiplier: f64) -> Self {
        Self { multiplier, ..self }
    }

    pub fn eval(&self, size: GridSize) -> f64 {
        (self.axis.of(size) / self.divisor - 1.0) * self.multiplier
    }
}

/// Hole spacing along a bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hole {
    /// Grid dimension divided by the lites on `axis` shared over `divisor`
    /// panes.
    Span { axis: Axis, divisor: f64 },
    /// Fixed spacing in mm.
    Fixed(f64),
}

impl Hole {
    pub const fn span(axis: Axis) -> Self {
        Hole::Span { axis, divisor: 1.0 }
    }

    pub const fn split(axis: Axis, divisor: f64) -> Self {
        Hole::Span { axis, divisor }
    }

    /// Spacing for a grid `dimension` in mm, or the axis that would
    /// divide by zero.
    pub fn eval(&self, dimension: f64, size: GridSize) -> Result<f64, Axis> {
        match *self {
            Hole::Fixed(spacing) => Ok(spacing),
            Hole::Span { axis, divisor } => {
                let lites = axis.of(size) / divisor;
                if lites == 0.0 {
                    Err(axis)
                } else {
                    Ok(dimension / lites)
                }
            }
        }
    }
}

/// Standard pattern bars of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardBars {
    pub width_bars: Count,
    pub width_hole: Hole,
    pub height_bars: Count,
    pub height_hole: Hole,
}

impl StandardBars {
    /// One pane divided evenly in both directions.
    pub const PER_PANE: StandardBars = StandardBars {
        width_bars: Count::of(Axis::Down),
        width_hole: Hole::span(Axis::Across),
        height_bars: Count::of(Axis::Across),
        height_hole: Hole::span(Axis::Down),
    };
}

/// Marginal/Perimeter pattern bars: fixed counts and hole spacings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBars {
    pub width_bars: Option<f64>,
    pub width_hole: Option<f64>,
    pub height_bars: Option<f64>,
    pub height_hole: Option<f64>,
    /// Counts are per unit and multiply by order quantity.
    pub per_unit: bool,
}

impl FixedBars {
    pub const fn new(width_bars: f64, width_hole: f64, height_bars: f64, height_hole: f64) -> Self {
        Self {
            width_bars: Some(width_bars),
            width_hole: Some(width_hole),
            height_bars: Some(height_bars),
            height_hole: Some(height_hole),
            per_unit: false,
        }
    }

    pub const fn per_unit(self) -> Self {
        Self {
            per_unit: true,
            ..self
        }
    }
}

/// Grid conventions of one glazed section for every pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBars {
    pub role: SectionRole,
    pub standard: StandardBars,
    pub marginal: FixedBars,
    pub perimeter: FixedBars,
}

/// Panel multipliers of one section for per-panel grid entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelQty {
    pub role: SectionRole,
    pub standard: u32,
    pub marginal: u32,
    pub perimeter: u32,
}

impl PanelQty {
    pub const fn new(role: SectionRole, standard: u32, marginal: u32, perimeter: u32) -> Self {
        Self {
            role,
            standard,
            marginal,
            perimeter,
        }
    }
}

/// Grid layout of a style.
#[derive(Debug, Clone, Copy)]
pub enum GridPlan {
    /// Bar-count entries; each inner slice becomes one grid item.
    Bars(&'static [&'static [SectionBars]]),
    /// One panel-count entry per section plus a light-count summary.
    Panels {
        panels: &'static [PanelQty],
        /// Sections counted toward the light total.
        light_sections: u32,
        /// Whether the summary reports a middle row.
        middle_row: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_count_eval() {
        let size = GridSize { across: 6, down: 3 };
        assert!(approx_eq(Count::of(Axis::Down).eval(size), 2.0));
        assert!(approx_eq(Count::of(Axis::Across).split(2.0).eval(size), 2.0));
        assert!(approx_eq(Count::of(Axis::Across).split(3.0).times(2.0).eval(size), 2.0));
        assert!(approx_eq(Count::of(Axis::Down).split(2.0).eval(size), 0.5));
    }

    #[test]
    fn test_hole_eval() {
        let size = GridSize { across: 4, down: 2 };
        assert!(approx_eq(Hole::split(Axis::Across, 2.0).eval(400.0, size).unwrap(), 200.0));
        assert!(approx_eq(Hole::span(Axis::Down).eval(900.0, size).unwrap(), 450.0));
        assert!(approx_eq(Hole::Fixed(32.0).eval(900.0, size).unwrap(), 32.0));
    }

    #[test]
    fn test_hole_zero_lites() {
        let size = GridSize { across: 0, down: 2 };
        assert_eq!(Hole::span(Axis::Across).eval(400.0, size), Err(Axis::Across));
    }
}
