//! Reproducible Example Sampling

use crate::corpus::Corpus;
use crate::Label;
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use tracing::warn;

/// Examples shown per label when nothing else is configured
pub const DEFAULT_SAMPLES_PER_LABEL: usize = 3;

/// Seed used for example selection when nothing else is configured
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Pick up to `per_label` sentences from each label group.
///
/// Each group is drawn with its own generator seeded from `seed`, so the
/// selection for one label does not depend on the size of the other. Groups
/// smaller than `per_label` are returned whole (in shuffled order) and every
/// label has an entry.
pub fn sample_examples(corpus: &Corpus, per_label: usize, seed: u64) -> BTreeMap<Label, Vec<String>> {
    corpus
        .partition_by_label()
        .into_iter()
        .map(|(label, group)| {
            let amount = per_label.min(group.len());
            if amount < per_label {
                warn!(
                    "Label {} of {} corpus has {} records, sampling {} instead of {}",
                    label,
                    corpus.language(),
                    group.len(),
                    amount,
                    per_label
                );
            }

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let picked = index::sample(&mut rng, group.len(), amount)
                .into_iter()
                .map(|i| group[i].sentence.clone())
                .collect();
            (label, picked)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language, Record};

    fn corpus(simple: usize, complex: usize) -> Corpus {
        let mut records = Vec::new();
        for i in 0..simple {
            records.push(Record::new(format!("simple {i}"), Label::Simple, 2));
        }
        for i in 0..complex {
            records.push(Record::new(format!("complex {i}"), Label::Complex, 2));
        }
        Corpus::new(Language::English, records)
    }

    #[test]
    fn test_same_seed_same_examples() {
        let corpus = corpus(20, 20);
        let first = sample_examples(&corpus, 3, 42);
        let second = sample_examples(&corpus, 3, 42);
        assert_eq!(first, second);
        assert_eq!(first[&Label::Complex].len(), 3);
        assert_eq!(first[&Label::Simple].len(), 3);
    }

    #[test]
    fn test_examples_come_from_their_group() {
        let samples = sample_examples(&corpus(10, 10), 5, DEFAULT_SAMPLE_SEED);
        assert!(samples[&Label::Simple].iter().all(|s| s.starts_with("simple")));
        assert!(samples[&Label::Complex].iter().all(|s| s.starts_with("complex")));
    }

    #[test]
    fn test_small_group_returned_whole() {
        let samples = sample_examples(&corpus(2, 10), 3, 42);
        let mut simple = samples[&Label::Simple].clone();
        simple.sort();
        assert_eq!(simple, vec!["simple 0", "simple 1"]);
    }

    #[test]
    fn test_empty_group_present() {
        let samples = sample_examples(&corpus(0, 4), 3, 42);
        assert!(samples[&Label::Simple].is_empty());
        assert_eq!(samples[&Label::Complex].len(), 3);
    }

    #[test]
    fn test_group_selection_independent_of_other_label() {
        let a = sample_examples(&corpus(10, 5), 3, 7);
        let b = sample_examples(&corpus(10, 50), 3, 7);
        assert_eq!(a[&Label::Simple], b[&Label::Simple]);
    }
}
