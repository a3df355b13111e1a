//! Lexical Feature Engine
//!
//! Provides per-sentence lexical complexity indicators and the descriptive
//! statistics used to compare them across label groups.

mod features;
mod statistics;

pub use features::{extract, ExtractorConfig, FeatureExtractor, FeatureVector, LONG_WORD_THRESHOLD};
pub use statistics::{mean, quantile, quantile_sorted, DescriptiveStats, Quartiles};
