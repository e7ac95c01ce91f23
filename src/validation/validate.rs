//! Validation of order lines before BOM calculation.

use crate::error::{BomError, Result};
use crate::grid::GridSize;
use crate::layout::Layout;
use crate::model::{FrameProfile, GridPattern, OrderLine};
use crate::styles;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Errors followed by warnings.
    pub fn messages(&self) -> impl Iterator<Item = &String> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate a batch of order lines.
pub fn validate_orders(orders: &[OrderLine]) -> Result<ValidationResult> {
    let mut result = ValidationResult::ok();

    if orders.is_empty() {
        return Err(BomError::NoOrderLines);
    }

    for (idx, order) in orders.iter().enumerate() {
        let mut line = validate_order(order);
        prefix(&mut line, idx + 1);
        result.merge(line);
    }

    Ok(result)
}

/// Validate a single order line.
pub fn validate_order(order: &OrderLine) -> ValidationResult {
    let layout = styles::layout(order.style, &order.metric(), order.frame);
    validate_with_layout(order, &layout)
}

/// Validate an order line against an already computed layout.
pub(crate) fn validate_with_layout(order: &OrderLine, layout: &Layout) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if order.width <= 0.0 || order.height <= 0.0 {
        result.add_error(format!(
            "Invalid dimensions ({}x{})",
            order.width, order.height
        ));
    }

    if order.quantity == 0 {
        result.add_error("Quantity is zero");
    }

    if order.style.needs_secondary_height() {
        match order.secondary_height {
            None => result.add_warning(format!(
                "{} needs a secondary height, using 0",
                order.style
            )),
            Some(h) if h <= 0.0 => {
                result.add_error(format!("Secondary height {} must be positive", h))
            }
            Some(h) if h >= order.height => result.add_error(format!(
                "Secondary height {} must be less than height {}",
                h, order.height
            )),
            Some(_) => {}
        }
    }

    if order.frame == FrameProfile::Unrecognized {
        result.add_warning("Unrecognized frame profile, frame bars omitted");
    }

    if order.grid == GridPattern::Standard {
        match order.grid_size.as_deref() {
            None => result.add_warning("Standard grid without size, using 3W x 3H"),
            Some(spec) if !GridSize::is_explicit(spec) => result.add_warning(format!(
                "Grid size '{}' does not name both axes, missing axes use 3",
                spec
            )),
            Some(_) => {}
        }
    }

    for section in &layout.sections {
        if section.glass_width <= 0.0 || section.glass_height <= 0.0 {
            result.add_warning(format!(
                "Glass line {} has non-positive size ({:.1}x{:.1} mm)",
                section.line, section.glass_width, section.glass_height
            ));
        }
    }

    result
}

fn prefix(result: &mut ValidationResult, line: usize) {
    for message in result.errors.iter_mut().chain(result.warnings.iter_mut()) {
        *message = format!("Order line {}: {}", line, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Style;
    use pretty_assertions::assert_eq;

    fn xo() -> OrderLine {
        OrderLine::new(Style::Xo, FrameProfile::Nailon, 36.0, 48.0)
    }

    // ==================== ValidationResult ====================

    #[test]
    fn test_merge_keeps_failure() {
        let mut result = ValidationResult::ok();
        result.add_warning("w");
        result.merge(ValidationResult::error("e"));
        assert!(!result.passed);
        assert_eq!(result.messages().cloned().collect::<Vec<_>>(), vec!["e", "w"]);
    }

    // ==================== Order lines ====================

    #[test]
    fn test_valid_order_is_clean() {
        let result = validate_order(&xo());
        assert!(result.passed);
        assert!(result.is_clean());
    }

    #[test]
    fn test_non_positive_dimensions() {
        let mut order = xo();
        order.width = 0.0;
        let result = validate_order(&order);
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Invalid dimensions (0x48)"]);
    }

    #[test]
    fn test_zero_quantity() {
        let result = validate_order(&xo().with_quantity(0));
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Quantity is zero"]);
    }

    #[test]
    fn test_missing_secondary_height_warns() {
        let order = OrderLine::new(Style::XoPp, FrameProfile::Nailon, 36.0, 60.0);
        let result = validate_order(&order);
        assert!(result.passed);
        assert_eq!(result.warnings[0], "XO-PP needs a secondary height, using 0");
        // the stacked section collapses without a height
        assert!(result.warnings[1].starts_with("Glass line 3 has non-positive size"));
    }

    #[test]
    fn test_secondary_height_bounds() {
        let base = OrderLine::new(Style::PpXo, FrameProfile::Block, 36.0, 60.0);
        assert!(!validate_order(&base.clone().with_secondary_height(0.0)).passed);
        assert!(!validate_order(&base.clone().with_secondary_height(60.0)).passed);
        assert!(validate_order(&base.with_secondary_height(20.0)).passed);
    }

    #[test]
    fn test_secondary_height_ignored_for_plain_styles() {
        let result = validate_order(&xo().with_secondary_height(-5.0));
        assert!(result.is_clean());
    }

    #[test]
    fn test_standard_grid_without_size_warns() {
        let order = xo().with_grid(GridPattern::Standard, None);
        let result = validate_order(&order);
        assert!(result.passed);
        assert_eq!(result.warnings, vec!["Standard grid without size, using 3W x 3H"]);
    }

    #[test]
    fn test_partial_grid_size_warns() {
        let order = xo().with_grid(GridPattern::Standard, Some("4W"));
        let result = validate_order(&order);
        assert_eq!(
            result.warnings,
            vec!["Grid size '4W' does not name both axes, missing axes use 3"]
        );
        assert!(validate_order(&xo().with_grid(GridPattern::Standard, Some("4W x 2H"))).is_clean());
    }

    #[test]
    fn test_tiny_opening_warns_on_glass() {
        let order = OrderLine::new(Style::Xo, FrameProfile::Nailon, 4.0, 4.0);
        let result = validate_order(&order);
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.starts_with("Glass line 1 has non-positive size")));
    }

    #[test]
    fn test_unrecognized_frame_warns() {
        let order = OrderLine::new(Style::Picture, FrameProfile::Unrecognized, 30.0, 40.0);
        let result = validate_order(&order);
        assert_eq!(
            result.warnings,
            vec!["Unrecognized frame profile, frame bars omitted"]
        );
    }

    // ==================== Batches ====================

    #[test]
    fn test_empty_batch_rejected() {
        assert!(matches!(validate_orders(&[]), Err(BomError::NoOrderLines)));
    }

    #[test]
    fn test_batch_prefixes_line_numbers() {
        let result = validate_orders(&[xo(), xo().with_quantity(0)]).unwrap();
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Order line 2: Quantity is zero"]);
    }
}
