//! Data model types for window BOM calculation.

mod cut;
mod glass;
mod grid;
mod order;
mod result;

pub use cut::{CutItem, LengthUnit, Orientation};
pub use glass::{GlassItem, GlassLine};
pub use grid::{GridItem, GridSection, GridSummary, SectionRole};
pub use order::{FrameProfile, GlassType, GridPattern, Metric, OrderLine, PaneKind, Style};
pub use result::{CalculationResult, LabelInfo};
