//! Order line validation.

mod validate;

pub(crate) use validate::validate_with_layout;
pub use validate::{validate_order, validate_orders, ValidationResult};
