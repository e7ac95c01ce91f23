//! window-bom - Dimension and bill-of-materials calculator for custom
//! vinyl windows.
//!
//! An order line (style, frame profile, nominal size, glass, grid) is turned
//! into a complete cutting list: frame, sash and screen bars, hardware
//! parts, the glass list and the grid (muntin) list.
//!
//! # Example
//!
//! ```
//! use window_bom::{compute_bom, FrameProfile, OrderLine, Style};
//!
//! let order = OrderLine::new(Style::Xo, FrameProfile::Nailon, 36.0, 48.0);
//! let bom = compute_bom(&order);
//! assert_eq!(bom.frame_width, 36.236);
//! assert_eq!(bom.glass_list.len(), 2);
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod formula;
pub mod glass;
pub mod grid;
pub mod layout;
pub mod model;
pub mod parser;
pub mod styles;
pub mod units;
pub mod validation;

// Re-exports for convenience
pub use config::CalcOptions;
pub use dispatch::{
    compute_batch, compute_batch_with, compute_bom, compute_bom_from_formulas, compute_bom_with,
    compute_record, compute_record_from_formulas,
};
pub use error::{BomError, ErrorCode, Result};
pub use formula::{FormulaKind, FormulaRepository, InMemoryFormulaRepository};
pub use model::{
    CalculationResult, CutItem, FrameProfile, GlassItem, GlassType, GridItem, GridPattern,
    OrderLine, PaneKind, Style,
};
pub use parser::{load_orders, parse_order_line, RawOrderLine};
pub use validation::{validate_order, validate_orders, ValidationResult};

/// Load an order file and compute every line.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Load the raw order records
/// 2. Decode each record, applying defaults for unknown codes
/// 3. Compute the cutting list per line
pub fn compute_file(input_path: &std::path::Path, options: &CalcOptions) -> Result<Vec<CalculationResult>> {
    let records = load_orders(input_path)?;
    compute_batch(&records, options)
}
