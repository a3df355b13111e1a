//! Summary Types

use corpus::{Label, Language};
use lexical_features::{mean, DescriptiveStats, FeatureVector, Quartiles};
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics over the whole corpus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalStats {
    /// Number of records
    pub total_count: usize,
    /// Records per label, ascending label order
    pub label_counts: BTreeMap<Label, usize>,
    /// Share of records per label; all zero for an empty corpus
    pub label_proportions: BTreeMap<Label, f64>,
    /// Quartiles of `length_words` over every record
    pub length_distribution: Quartiles,
}

/// Statistics for all records sharing one label.
///
/// When `count` is zero every numeric field is NaN; check
/// [`GroupSummary::is_empty`] before reading them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Label shared by the group
    pub label: Label,
    /// Number of records in the group
    pub count: usize,
    /// Mean of `length_words`
    pub mean_length: f64,
    /// Median of `length_words`
    pub median_length: f64,
    /// First quartile of `length_words`
    pub q1_length: f64,
    /// Third quartile of `length_words`
    pub q3_length: f64,
    /// Mean of per-sentence average token length
    pub mean_avg_word_length: f64,
    /// Mean of per-sentence long token proportion
    pub mean_long_word_ratio: f64,
}

impl GroupSummary {
    /// Summary of a label without records: zero count, NaN statistics
    pub fn empty(label: Label) -> Self {
        Self::from_parts(label, &[], &[])
    }

    /// Summarize word counts and feature vectors of one label group
    pub(crate) fn from_parts(label: Label, lengths: &[f64], features: &[FeatureVector]) -> Self {
        let lengths = DescriptiveStats::compute(lengths);
        let avg_word_lengths: Vec<f64> = features.iter().map(|f| f.avg_word_length).collect();
        let long_word_ratios: Vec<f64> = features.iter().map(|f| f.long_word_ratio).collect();

        Self {
            label,
            count: lengths.count,
            mean_length: lengths.mean,
            median_length: lengths.quartiles.median,
            q1_length: lengths.quartiles.q1,
            q3_length: lengths.quartiles.q3,
            mean_avg_word_length: mean(&avg_word_lengths),
            mean_long_word_ratio: mean(&long_word_ratios),
        }
    }

    /// Whether no record carries this label
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Everything computed for one corpus in one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    pub language: Language,
    pub global: GlobalStats,
    /// One entry per label, ascending label order
    pub by_label: BTreeMap<Label, GroupSummary>,
}

impl CorpusSummary {
    /// Summary of one label
    pub fn group(&self, label: Label) -> Option<&GroupSummary> {
        self.by_label.get(&label)
    }
}
