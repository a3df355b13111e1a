//! Ordered Collection of Records for One Language

use crate::error::SchemaError;
use crate::table::Table;
use crate::validator::SchemaValidator;
use crate::{Label, Language, Record};
use std::collections::BTreeMap;

/// Records of one language, in dataset order
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    language: Language,
    records: Vec<Record>,
}

impl Corpus {
    /// Create a corpus from already validated records
    pub fn new(language: Language, records: Vec<Record>) -> Self {
        Self { language, records }
    }

    /// Validate a table with the default column names and build a corpus
    pub fn from_table(table: &Table, language: Language) -> Result<Self, SchemaError> {
        SchemaValidator::default().build_corpus(table, language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Group records by label, keeping dataset order inside each group.
    ///
    /// Every label has an entry, empty when the corpus has no such record.
    pub fn partition_by_label(&self) -> BTreeMap<Label, Vec<&Record>> {
        let mut groups: BTreeMap<Label, Vec<&Record>> =
            Label::ALL.iter().map(|&label| (label, Vec::new())).collect();
        for record in &self.records {
            groups.entry(record.label).or_default().push(record);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_keeps_order_and_all_labels() {
        let corpus = Corpus::new(
            Language::English,
            vec![
                Record::new("first simple", Label::Simple, 2),
                Record::new("second simple", Label::Simple, 2),
            ],
        );
        let groups = corpus.partition_by_label();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), Label::ALL.to_vec());
        assert!(groups[&Label::Complex].is_empty());
        assert_eq!(groups[&Label::Simple][0].sentence, "first simple");
        assert_eq!(groups[&Label::Simple][1].sentence, "second simple");
    }

    #[test]
    fn test_from_table() {
        let table = Table::from_rows(
            &["Sentence", "Label", "LengthWords"],
            &[&["Il lit un livre.", "0", "4"]],
        );
        let corpus = Corpus::from_table(&table, Language::French).unwrap();
        assert_eq!(corpus.language(), Language::French);
        assert_eq!(corpus.iter().count(), 1);
    }
}
