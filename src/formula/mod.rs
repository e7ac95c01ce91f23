//! Runtime formula steps.
//!
//! A formula set is an ordered list of statements for one style and one
//! formula kind. Evaluating the set against the order dimensions yields the
//! same named values a compiled calculator produces.

mod builtin;
mod expr;
mod repository;

pub use builtin::SLIDING_STYLE_NAME;
pub use expr::{parse_statement, Expr, Statement};
pub use repository::{FormulaRecord, FormulaRepository, InMemoryFormulaRepository};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::error::{BomError, Result};
use crate::model::{FrameProfile, Metric};

/// Formula family: Nailon frames carry their own constants, every other
/// profile shares one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaKind {
    Nailon,
    Other,
}

impl FormulaKind {
    pub fn for_profile(profile: FrameProfile) -> Self {
        if profile.is_nailon() {
            FormulaKind::Nailon
        } else {
            FormulaKind::Other
        }
    }
}

impl fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaKind::Nailon => f.write_str("nailon"),
            FormulaKind::Other => f.write_str("other"),
        }
    }
}

/// One ordered step of a formula set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaStep {
    pub step_name: String,
    pub expression: String,
    pub sequence: i32,
}

/// Failure to reach or read the formula source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("formula source unavailable: {0}")]
    Unavailable(String),

    #[error("formula source timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

/// Failure to parse or evaluate a single step.
#[derive(Debug, Error, PartialEq)]
pub enum FormulaError {
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("expected {expected}, found {found} at {pos}")]
    UnexpectedToken {
        expected: String,
        found: String,
        pos: usize,
    },

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("{name} takes {expected} argument(s), got {found}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("'{0}' is not a variable of this style")]
    NotInSchema(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Names every formula set may read.
pub const SEED_VARIABLES: [&str; 4] = ["widthMm", "heightMm", "fixedHeightMm", "quantity"];

/// Evaluation context seeded with the order dimensions.
pub fn seed_context(m: &Metric, quantity: u32) -> HashMap<String, f64> {
    let values = [m.width, m.height, m.secondary, f64::from(quantity)];
    SEED_VARIABLES
        .iter()
        .map(|name| name.to_string())
        .zip(values)
        .collect()
}

/// Evaluate formula steps in sequence order.
///
/// Each step assigns its declared name (or its step name for a bare
/// expression). Only names in `schema` may be assigned; later steps see
/// every earlier value.
pub fn evaluate_steps(
    steps: &[FormulaStep],
    mut ctx: HashMap<String, f64>,
    schema: &[&str],
) -> Result<HashMap<String, f64>> {
    let mut ordered: Vec<&FormulaStep> = steps.iter().collect();
    ordered.sort_by_key(|s| s.sequence);

    for step in ordered {
        let fail = |source: FormulaError| BomError::Formula {
            step: step.step_name.clone(),
            source,
        };

        let statement = parse_statement(&step.expression).map_err(fail)?;
        let target = statement.target.unwrap_or_else(|| step.step_name.clone());
        if !schema.contains(&target.as_str()) {
            return Err(fail(FormulaError::NotInSchema(target)));
        }

        let value = statement.expr.eval(&ctx).map_err(fail)?;
        debug!("{} = {}", target, value);
        ctx.insert(target, value);
    }

    Ok(ctx)
}
