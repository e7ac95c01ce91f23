//! Formula sources.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use super::{builtin, FetchError, FormulaKind, FormulaStep};
use crate::error::{BomError, Result};

/// Source of ordered formula steps.
pub trait FormulaRepository {
    /// Steps for a style and kind, in evaluation order. An empty list means
    /// the source holds nothing for that pair.
    fn get_formula_steps(
        &self,
        style_name: &str,
        kind: FormulaKind,
    ) -> std::result::Result<Vec<FormulaStep>, FetchError>;
}

fn default_sequence() -> i32 {
    10
}

/// Stored formula record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRecord {
    pub style_name: String,
    pub formula_type: FormulaKind,
    pub step_name: String,
    pub formula_string: String,
    #[serde(default = "default_sequence")]
    pub sequence: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormulaRecord {
    pub fn new(
        style_name: &str,
        formula_type: FormulaKind,
        step_name: &str,
        formula_string: &str,
        sequence: i32,
    ) -> Self {
        Self {
            style_name: style_name.to_string(),
            formula_type,
            step_name: step_name.to_string(),
            formula_string: formula_string.to_string(),
            sequence,
            description: None,
        }
    }
}

/// Formula records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFormulaRepository {
    records: Vec<FormulaRecord>,
}

impl InMemoryFormulaRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding the shipped XO/OX formula table.
    pub fn builtin() -> Self {
        Self::from_records(builtin::sliding_records())
    }

    pub fn from_records(records: Vec<FormulaRecord>) -> Self {
        Self { records }
    }

    /// Parse records from a JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<FormulaRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load records from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BomError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let repo = Self::from_json(&fs::read_to_string(path)?)?;
        info!("Loaded {} formula record(s)", repo.len());
        Ok(repo)
    }

    pub fn insert(&mut self, record: FormulaRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FormulaRepository for InMemoryFormulaRepository {
    fn get_formula_steps(
        &self,
        style_name: &str,
        kind: FormulaKind,
    ) -> std::result::Result<Vec<FormulaStep>, FetchError> {
        let mut matching: Vec<&FormulaRecord> = self
            .records
            .iter()
            .filter(|r| r.style_name == style_name && r.formula_type == kind)
            .collect();
        matching.sort_by_key(|r| r.sequence);

        Ok(matching
            .into_iter()
            .map(|r| FormulaStep {
                step_name: r.step_name.clone(),
                expression: r.formula_string.clone(),
                sequence: r.sequence,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::builtin::SLIDING_STYLE_NAME;

    #[test]
    fn test_builtin_has_both_kinds() {
        let repo = InMemoryFormulaRepository::builtin();
        let nailon = repo
            .get_formula_steps(SLIDING_STYLE_NAME, FormulaKind::Nailon)
            .unwrap();
        let other = repo
            .get_formula_steps(SLIDING_STYLE_NAME, FormulaKind::Other)
            .unwrap();
        assert_eq!(nailon.len(), 18);
        assert_eq!(other.len(), 18);
        assert!(nailon.windows(2).all(|w| w[0].sequence <= w[1].sequence));
        assert_eq!(nailon[0].step_name, "frameWidth");
    }

    #[test]
    fn test_unknown_style_is_empty() {
        let repo = InMemoryFormulaRepository::builtin();
        let steps = repo
            .get_formula_steps("casement_window", FormulaKind::Nailon)
            .unwrap();
        assert!(steps.is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"style_name": "xo_ox_window", "formula_type": "other",
             "step_name": "b", "formula_string": "const b = 2;", "sequence": 20},
            {"style_name": "xo_ox_window", "formula_type": "other",
             "step_name": "a", "formula_string": "const a = 1;"}
        ]"#;
        let repo = InMemoryFormulaRepository::from_json(json).unwrap();
        assert_eq!(repo.len(), 2);
        let steps = repo
            .get_formula_steps("xo_ox_window", FormulaKind::Other)
            .unwrap();
        assert_eq!(steps[0].step_name, "a");
        assert_eq!(steps[0].sequence, 10);
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let json = r#"[{"style_name": "x", "formula_type": "vinyl",
                        "step_name": "a", "formula_string": "1"}]"#;
        assert!(matches!(
            InMemoryFormulaRepository::from_json(json),
            Err(BomError::Json(_))
        ));
    }
}
