//! Order input parsing.

mod codes;
mod order;

pub use codes::{is_tempered, parse_frame, parse_glass, parse_grid, parse_style};
pub use order::{load_orders, parse_order_line, parse_orders, ParsedOrder, RawOrderLine};
