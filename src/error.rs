//! Error types for BOM calculation.

use std::path::PathBuf;
use thiserror::Error;

use crate::formula::{FetchError, FormulaError, FormulaKind};

/// Error codes for BOM processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Malformed order input (-3)
    ParseError = -3,
    /// No order lines in batch (-11)
    NoOrderLines = -11,
    /// Order line rejected by validation (E100)
    InvalidOrder = 100,
    /// Formula source could not be reached (E300)
    FormulaFetch = 300,
    /// Formula source returned nothing usable (E301)
    NoFormulaSteps = 301,
    /// Formula text failed to parse or evaluate (E302)
    FormulaEval = 302,
    /// Style has no formula-driven calculator (E303)
    FormulaUnsupported = 303,
}

/// Main error type for the BOM engine.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid order input: {message}")]
    ParseError { message: String },

    #[error("No order lines found in input")]
    NoOrderLines,

    #[error("Order line rejected: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("Failed to fetch {kind} formulas for '{style}': {source}")]
    FormulaFetch {
        style: String,
        kind: FormulaKind,
        #[source]
        source: FetchError,
    },

    #[error("No {kind} formula steps defined for '{style}'")]
    NoFormulaSteps { style: String, kind: FormulaKind },

    #[error("Formula step '{step}' failed: {source}")]
    Formula {
        step: String,
        #[source]
        source: FormulaError,
    },

    #[error("Formula set never assigned required value '{name}'")]
    MissingFormulaValue { name: String },

    #[error("Style {style} has no formula-driven calculator")]
    FormulaUnsupported { style: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BomError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BomError::FileNotFound { .. } => ErrorCode::FileNotFound,
            BomError::ParseError { .. } => ErrorCode::ParseError,
            BomError::NoOrderLines => ErrorCode::NoOrderLines,
            BomError::Validation { .. } => ErrorCode::InvalidOrder,
            BomError::FormulaFetch { .. } => ErrorCode::FormulaFetch,
            BomError::NoFormulaSteps { .. } => ErrorCode::NoFormulaSteps,
            BomError::Formula { .. } => ErrorCode::FormulaEval,
            BomError::MissingFormulaValue { .. } => ErrorCode::FormulaEval,
            BomError::FormulaUnsupported { .. } => ErrorCode::FormulaUnsupported,
            BomError::Io(_) => ErrorCode::FileNotFound,
            BomError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for BOM operations.
pub type Result<T> = std::result::Result<T, BomError>;
