//! CSV Corpus Loader

use crate::corpus::Corpus;
use crate::error::LoadError;
use crate::table::Table;
use crate::validator::SchemaValidator;
use crate::Language;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Reads comma separated datasets into tables and corpora
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    validator: SchemaValidator,
}

impl CsvLoader {
    /// Create a loader validating with the given schema
    pub fn new(validator: SchemaValidator) -> Self {
        Self { validator }
    }

    /// Read a CSV stream whose first record is the header
    pub fn read_table<R: Read>(&self, reader: R) -> Result<Table, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Ok(Table::new(headers, rows))
    }

    /// Read a CSV file into a table
    pub fn load_table(&self, path: &Path) -> Result<Table, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_table(file)
    }

    /// Read and validate a CSV file as the corpus of one language
    pub fn load_corpus(&self, path: &Path, language: Language) -> Result<Corpus, LoadError> {
        let table = self.load_table(path)?;
        let corpus = self.validator.build_corpus(&table, language)?;
        info!(
            "Loaded {} {} records from {}",
            corpus.len(),
            language,
            path.display()
        );
        Ok(corpus)
    }
}
