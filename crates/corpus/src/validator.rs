//! Schema Validator for Corpus Tables

use crate::corpus::Corpus;
use crate::error::SchemaError;
use crate::table::Table;
use crate::{Label, Language, Record};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Column names a corpus table must provide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Sentence text column
    pub sentence_column: String,
    /// Label column (0 = complex, 1 = simple)
    pub label_column: String,
    /// Pre-computed word count column
    pub length_column: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            sentence_column: "Sentence".to_string(),
            label_column: "Label".to_string(),
            length_column: "LengthWords".to_string(),
        }
    }
}

/// Resolved positions of the required columns
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    sentence: usize,
    label: usize,
    length: usize,
}

/// Validator turning raw tables into corpora
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    config: SchemaConfig,
}

impl SchemaValidator {
    /// Create a new validator with given column names
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// Check that every required column is present
    pub fn validate_columns(&self, table: &Table) -> Result<(), SchemaError> {
        self.layout(table).map(|_| ())
    }

    fn layout(&self, table: &Table) -> Result<ColumnLayout, SchemaError> {
        let find = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
        };
        Ok(ColumnLayout {
            sentence: find(&self.config.sentence_column)?,
            label: find(&self.config.label_column)?,
            length: find(&self.config.length_column)?,
        })
    }

    /// Validate a raw label cell
    pub fn validate_label(&self, row: usize, raw: &str) -> Result<Label, SchemaError> {
        parse_integral(raw)
            .and_then(Label::from_value)
            .ok_or_else(|| SchemaError::InvalidLabel {
                row,
                value: raw.to_string(),
            })
    }

    /// Validate a raw word count cell
    pub fn validate_length(&self, row: usize, raw: &str) -> Result<u32, SchemaError> {
        parse_integral(raw)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| SchemaError::InvalidLength {
                row,
                value: raw.to_string(),
            })
    }

    /// Validate a whole table and build the corpus for one language.
    ///
    /// Row numbers in errors are 1-based and exclude the header. Cells
    /// missing from short rows are treated as empty.
    pub fn build_corpus(&self, table: &Table, language: Language) -> Result<Corpus, SchemaError> {
        let layout = self.layout(table)?;

        let mut records = Vec::with_capacity(table.len());
        for (idx, cells) in table.rows().iter().enumerate() {
            let row = idx + 1;
            let cell = |col: usize| cells.get(col).map(String::as_str).unwrap_or("");

            records.push(Record {
                sentence: cell(layout.sentence).to_string(),
                label: self.validate_label(row, cell(layout.label))?,
                length_words: self.validate_length(row, cell(layout.length))?,
            });
        }

        debug!("Validated {} rows for language {}", records.len(), language);
        Ok(Corpus::new(language, records))
    }
}

/// Parse an integer cell, also accepting integral floats such as `1.0`
fn parse_integral(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    (v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64).then(|| v as i64)
}
