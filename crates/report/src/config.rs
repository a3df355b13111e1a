//! Report configuration

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use corpus::{Language, SchemaConfig, DEFAULT_SAMPLES_PER_LABEL, DEFAULT_SAMPLE_SEED};
use lexical_features::LONG_WORD_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Prefix of environment variables overriding file settings
pub const ENV_PREFIX: &str = "COMPLEXITY";

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable report
    #[default]
    Text,
    /// Pretty printed JSON
    Json,
}

/// One dataset to analyze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub language: Language,
    pub path: PathBuf,
}

impl FromStr for DatasetConfig {
    type Err = String;

    /// Parse `LANG=PATH`, e.g. `fr=data/Fr-Dataset.csv`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (language, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected LANG=PATH, got {s:?}"))?;
        if path.trim().is_empty() {
            return Err(format!("empty dataset path in {s:?}"));
        }
        Ok(Self {
            language: language.parse()?,
            path: PathBuf::from(path.trim()),
        })
    }
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Datasets, analyzed in order
    pub datasets: Vec<DatasetConfig>,
    /// Example sentences shown per label
    pub samples_per_label: usize,
    /// Seed for example selection
    pub sample_seed: u64,
    /// Character count from which a token counts as long
    pub long_word_threshold: usize,
    /// Output rendering
    pub format: OutputFormat,
    /// Max tracing level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Expected column names
    pub schema: SchemaConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            datasets: vec![
                DatasetConfig {
                    language: Language::English,
                    path: PathBuf::from("data/En-Dataset.csv"),
                },
                DatasetConfig {
                    language: Language::French,
                    path: PathBuf::from("data/Fr-Dataset.csv"),
                },
            ],
            samples_per_label: DEFAULT_SAMPLES_PER_LABEL,
            sample_seed: DEFAULT_SAMPLE_SEED,
            long_word_threshold: LONG_WORD_THRESHOLD,
            format: OutputFormat::Text,
            log_level: "info".to_string(),
            log_json: false,
            schema: SchemaConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration: defaults, then the optional TOML file, then
    /// `COMPLEXITY_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration with an explicit environment source
    pub fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read report configuration")?;

        settings
            .try_deserialize()
            .context("Invalid report configuration")
    }

    /// Parse the configured log level
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(self.log_level.trim())
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", self.log_level))
    }
}

/// Command line settings that take precedence over file and environment
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Dataset to analyze as LANG=PATH (repeatable, replaces configured datasets)
    #[arg(short, long = "dataset", value_name = "LANG=PATH")]
    pub datasets: Vec<DatasetConfig>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Example sentences per label
    #[arg(long)]
    pub samples: Option<usize>,

    /// Seed for example selection
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Overrides {
    /// Replace the settings given on the command line
    pub fn apply(self, config: &mut ReportConfig) {
        if !self.datasets.is_empty() {
            config.datasets = self.datasets;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(samples) = self.samples {
            config.samples_per_label = samples;
        }
        if let Some(seed) = self.seed {
            config.sample_seed = seed;
        }
    }
}
