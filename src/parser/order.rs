//! Raw order records and their lenient conversion to [`OrderLine`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::codes::{is_tempered, parse_frame, parse_glass, parse_grid, parse_style};
use crate::error::{BomError, Result};
use crate::model::{FrameProfile, GlassType, GridPattern, OrderLine, Style};

/// Order line as it arrives from the order form, every code still a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrderLine {
    pub id: Option<String>,
    pub customer: Option<String>,
    pub style: String,
    pub frame: String,
    /// Width in inches.
    #[serde(deserialize_with = "dimension")]
    pub width: Option<f64>,
    /// Height in inches.
    #[serde(deserialize_with = "dimension")]
    pub height: Option<f64>,
    /// Height of the stacked fixed section in inches.
    #[serde(alias = "fixedHeight", deserialize_with = "dimension")]
    pub secondary_height: Option<f64>,
    #[serde(alias = "glassType")]
    pub glass: String,
    pub grid: String,
    #[serde(alias = "grid_size")]
    pub grid_size: Option<String>,
    pub quantity: Option<u32>,
    pub color: Option<String>,
    pub argon: Option<String>,
    /// `Tempered` when the secondary sections must be tempered.
    pub top_bottom: Option<String>,
    pub batch: Option<String>,
    pub po: Option<String>,
    pub note: Option<String>,
}

/// Accept dimensions written either as numbers or as numeric strings.
fn dimension<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Result of lenient parsing: the typed order plus every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOrder {
    pub order: OrderLine,
    pub defects: Vec<String>,
}

/// Convert a raw record, substituting documented defaults for anything
/// that cannot be decoded.
pub fn parse_order_line(raw: &RawOrderLine) -> ParsedOrder {
    let mut defects = Vec::new();
    let mut defect = |message: String| {
        warn!("{}", message);
        defects.push(message);
    };

    let style = parse_style(&raw.style).unwrap_or_else(|| {
        defect(format!("Unknown style '{}', using XO", raw.style));
        Style::Xo
    });

    let frame = parse_frame(&raw.frame).unwrap_or_else(|| {
        defect(format!(
            "Unknown frame profile '{}', no frame bars emitted",
            raw.frame
        ));
        FrameProfile::Unrecognized
    });

    let glass = parse_glass(&raw.glass).unwrap_or_else(|| {
        defect(format!("Unknown glass type '{}', using Clear/Clear", raw.glass));
        let glass = GlassType::default();
        if is_tempered(&raw.glass) {
            glass.tempered()
        } else {
            glass
        }
    });

    let grid = parse_grid(&raw.grid).unwrap_or_else(|| {
        defect(format!("Unknown grid pattern '{}', using no grid", raw.grid));
        GridPattern::None
    });

    let width = raw.width.unwrap_or_else(|| {
        defect("Missing width".to_string());
        0.0
    });
    let height = raw.height.unwrap_or_else(|| {
        defect("Missing height".to_string());
        0.0
    });

    let temper_secondary = raw
        .top_bottom
        .as_deref()
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("tempered"));

    let order = OrderLine {
        id: raw.id.clone(),
        customer: raw.customer.clone(),
        style,
        frame,
        width,
        height,
        secondary_height: raw.secondary_height,
        glass,
        grid,
        grid_size: raw.grid_size.clone().filter(|s| !s.trim().is_empty()),
        quantity: raw.quantity.unwrap_or(1),
        color: raw.color.clone(),
        argon: raw.argon.clone(),
        temper_secondary,
        batch: raw.batch.clone(),
        po: raw.po.clone(),
        note: raw.note.clone(),
    };

    debug!("Parsed order line {} {}x{}", order.style, width, height);

    ParsedOrder { order, defects }
}

/// Load raw order lines from a JSON file.
///
/// The file holds a single record, an array of records, or an object with
/// an `orders` array.
pub fn load_orders(path: &Path) -> Result<Vec<RawOrderLine>> {
    if !path.exists() {
        return Err(BomError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(BomError::NoOrderLines);
    }

    parse_orders(&content)
}

/// Parse raw order lines from JSON text.
pub fn parse_orders(content: &str) -> Result<Vec<RawOrderLine>> {
    let value: Value = serde_json::from_str(content)?;

    let records = match value {
        Value::Array(items) => items,
        Value::Object(mut map) if map.contains_key("orders") => match map.remove("orders") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(BomError::ParseError {
                    message: "'orders' must be an array".to_string(),
                })
            }
        },
        record @ Value::Object(_) => vec![record],
        _ => {
            return Err(BomError::ParseError {
                message: "expected an order object or an array of orders".to_string(),
            })
        }
    };

    if records.is_empty() {
        return Err(BomError::NoOrderLines);
    }

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            serde_json::from_value(record).map_err(|e| BomError::ParseError {
                message: format!("order line {}: {}", idx + 1, e),
            })
        })
        .collect()
}
