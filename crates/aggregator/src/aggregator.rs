//! Corpus Aggregator

use crate::summary::{CorpusSummary, GlobalStats, GroupSummary};
use corpus::{Corpus, Label};
use lexical_features::{FeatureExtractor, FeatureVector, Quartiles};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Word counts and feature vectors of one label group, in corpus order
#[derive(Default)]
struct GroupAccumulator {
    lengths: Vec<f64>,
    features: Vec<FeatureVector>,
}

/// Computes global and per-label statistics for a corpus
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    extractor: FeatureExtractor,
}

impl Aggregator {
    /// Create an aggregator around a configured extractor
    pub fn new(extractor: FeatureExtractor) -> Self {
        Self { extractor }
    }

    /// Feature vectors of every record, aligned with `corpus.records()`
    pub fn features(&self, corpus: &Corpus) -> Vec<FeatureVector> {
        self.extractor
            .extract_all(corpus.iter().map(|r| r.sentence.as_str()))
    }

    /// Summarize a corpus.
    ///
    /// Both labels are always present in the result. A label without records
    /// gets a zero-count summary with NaN statistics.
    pub fn summarize(&self, corpus: &Corpus) -> CorpusSummary {
        let features = self.features(corpus);

        let mut groups: BTreeMap<Label, GroupAccumulator> = Label::ALL
            .iter()
            .map(|&label| (label, GroupAccumulator::default()))
            .collect();
        let mut all_lengths = Vec::with_capacity(corpus.len());

        for (record, feature) in corpus.iter().zip(features) {
            let length = f64::from(record.length_words);
            all_lengths.push(length);

            let group = groups.entry(record.label).or_default();
            group.lengths.push(length);
            group.features.push(feature);
        }

        let by_label: BTreeMap<Label, GroupSummary> = groups
            .into_iter()
            .map(|(label, group)| {
                let summary = if group.lengths.is_empty() {
                    warn!(
                        "No records with label {} in {} corpus, statistics are undefined",
                        label,
                        corpus.language()
                    );
                    GroupSummary::empty(label)
                } else {
                    GroupSummary::from_parts(label, &group.lengths, &group.features)
                };
                debug!(
                    "Label {}: n={}, mean length={:.2}, avg word length={:.2}, long word ratio={:.3}",
                    label,
                    summary.count,
                    summary.mean_length,
                    summary.mean_avg_word_length,
                    summary.mean_long_word_ratio
                );
                (label, summary)
            })
            .collect();

        let global = global_stats(&all_lengths, &by_label);

        info!(
            "Summarized {} corpus: {} records",
            corpus.language(),
            global.total_count
        );

        CorpusSummary {
            language: corpus.language(),
            global,
            by_label,
        }
    }
}

/// Summarize a corpus with the default long word threshold
pub fn summarize(corpus: &Corpus) -> CorpusSummary {
    Aggregator::default().summarize(corpus)
}

fn global_stats(lengths: &[f64], by_label: &BTreeMap<Label, GroupSummary>) -> GlobalStats {
    let total_count = lengths.len();

    let label_counts: BTreeMap<Label, usize> = by_label
        .iter()
        .map(|(&label, group)| (label, group.count))
        .collect();

    let label_proportions = label_counts
        .iter()
        .map(|(&label, &count)| {
            let share = if total_count == 0 {
                0.0
            } else {
                count as f64 / total_count as f64
            };
            (label, share)
        })
        .collect();

    let length_distribution = if lengths.is_empty() {
        Quartiles::UNDEFINED
    } else {
        let mut sorted = lengths.to_vec();
        sorted.sort_by(f64::total_cmp);
        Quartiles::from_sorted(&sorted)
    };

    GlobalStats {
        total_count,
        label_counts,
        label_proportions,
        length_distribution,
    }
}
