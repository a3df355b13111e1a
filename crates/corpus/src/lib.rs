//! Sentence Corpus
//!
//! Provides the labeled record model, schema validation of tabular input,
//! CSV loading and reproducible example sampling.

mod corpus;
mod error;
mod loader;
mod sampling;
mod table;
mod validator;

pub use corpus::Corpus;
pub use error::{LoadError, SchemaError};
pub use loader::CsvLoader;
pub use sampling::{sample_examples, DEFAULT_SAMPLE_SEED, DEFAULT_SAMPLES_PER_LABEL};
pub use table::Table;
pub use validator::{SchemaConfig, SchemaValidator};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary complexity label as annotated in the source datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Label {
    /// Label 0
    Complex = 0,
    /// Label 1
    Simple = 1,
}

impl Label {
    /// Every label, in ascending numeric order
    pub const ALL: [Label; 2] = [Label::Complex, Label::Simple];

    /// Numeric value used in the datasets
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Label::Complex => "complex",
            Label::Simple => "simple",
        }
    }

    /// Map a numeric dataset value to a label
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Label::Complex),
            1 => Some(Label::Simple),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Language partition of a corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "fr" | "french" => Ok(Language::French),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// One labeled sentence.
///
/// `length_words` comes from the dataset's `LengthWords` column and is kept
/// as supplied; it is not required to match the whitespace token count of
/// `sentence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub sentence: String,
    pub label: Label,
    pub length_words: u32,
}

impl Record {
    pub fn new(sentence: impl Into<String>, label: Label, length_words: u32) -> Self {
        Self {
            sentence: sentence.into(),
            label,
            length_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_order_follows_value() {
        assert!(Label::Complex < Label::Simple);
        assert_eq!(Label::ALL.map(Label::value), [0, 1]);
    }

    #[test]
    fn test_label_from_value() {
        assert_eq!(Label::from_value(0), Some(Label::Complex));
        assert_eq!(Label::from_value(1), Some(Label::Simple));
        assert_eq!(Label::from_value(2), None);
        assert_eq!(Label::from_value(-1), None);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert_eq!("french".parse::<Language>(), Ok(Language::French));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::French.to_string(), "fr");
    }
}
