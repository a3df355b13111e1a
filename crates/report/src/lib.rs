//! Sentence Complexity Report
//!
//! Loads labeled English and French corpora, runs the lexical feature
//! pipeline on them and renders the simple vs complex comparison.

pub mod config;
mod render;

pub use config::{DatasetConfig, OutputFormat, Overrides, ReportConfig};
pub use render::{render, TextReport};

use aggregator::{Aggregator, CorpusSummary};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use corpus::{sample_examples, Corpus, CsvLoader, Label, Language, SchemaError, SchemaValidator, Table};
use lexical_features::{ExtractorConfig, FeatureExtractor};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Results for one language
#[derive(Debug, Clone, Serialize)]
pub struct LanguageReport {
    pub summary: CorpusSummary,
    /// Example sentences per label, reproducible for a given seed
    pub examples: BTreeMap<Label, Vec<String>>,
    /// Long word threshold used for the indicators
    pub long_word_threshold: usize,
}

/// Results of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub languages: Vec<LanguageReport>,
}

/// Runs the analysis with one configuration
pub struct Analyzer {
    aggregator: Aggregator,
    loader: CsvLoader,
    validator: SchemaValidator,
    samples_per_label: usize,
    sample_seed: u64,
    long_word_threshold: usize,
}

impl Analyzer {
    /// Create an analyzer from report settings
    pub fn new(config: &ReportConfig) -> Self {
        let extractor = FeatureExtractor::new(ExtractorConfig {
            long_word_threshold: config.long_word_threshold,
        });
        let validator = SchemaValidator::new(config.schema.clone());
        Self {
            aggregator: Aggregator::new(extractor),
            loader: CsvLoader::new(validator.clone()),
            validator,
            samples_per_label: config.samples_per_label,
            sample_seed: config.sample_seed,
            long_word_threshold: config.long_word_threshold,
        }
    }

    /// Summarize and sample an already validated corpus
    pub fn analyze_corpus(&self, corpus: &Corpus) -> LanguageReport {
        LanguageReport {
            summary: self.aggregator.summarize(corpus),
            examples: sample_examples(corpus, self.samples_per_label, self.sample_seed),
            long_word_threshold: self.long_word_threshold,
        }
    }

    /// Validate a table and analyze it; schema violations abort before any
    /// statistic is computed
    pub fn analyze_table(&self, table: &Table, language: Language) -> Result<LanguageReport, SchemaError> {
        let corpus = self.validator.build_corpus(table, language)?;
        Ok(self.analyze_corpus(&corpus))
    }

    /// Load a CSV dataset and analyze it
    pub fn analyze_file(&self, path: &Path, language: Language) -> Result<LanguageReport> {
        let corpus = self
            .loader
            .load_corpus(path, language)
            .with_context(|| format!("Failed to load {} dataset {}", language, path.display()))?;
        Ok(self.analyze_corpus(&corpus))
    }

    /// Analyze every configured dataset in order, stopping at the first failure
    pub fn run(&self, datasets: &[DatasetConfig]) -> Result<AnalysisReport> {
        let mut languages = Vec::with_capacity(datasets.len());
        for dataset in datasets {
            info!("Analyzing {} dataset {}", dataset.language, dataset.path.display());
            languages.push(self.analyze_file(&dataset.path, dataset.language)?);
        }
        Ok(AnalysisReport {
            generated_at: Utc::now(),
            languages,
        })
    }
}

/// Initialize logging
pub fn init_logging(level: Level, json: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.context("Failed to set tracing subscriber")
}
