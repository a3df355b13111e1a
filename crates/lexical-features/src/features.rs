//! Lexical Feature Vector Extraction

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum character count for a token to be considered a long word (inclusive)
pub const LONG_WORD_THRESHOLD: usize = 8;

/// Lexical indicators for a single sentence
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Mean token length in characters
    pub avg_word_length: f64,
    /// Fraction of tokens at or above the long word threshold, in [0, 1]
    pub long_word_ratio: f64,
}

impl FeatureVector {
    /// Indicators reported for sentences without any token
    pub const ZERO: FeatureVector = FeatureVector {
        avg_word_length: 0.0,
        long_word_ratio: 0.0,
    };
}

/// Extractor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Character count from which a token counts as long
    pub long_word_threshold: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            long_word_threshold: LONG_WORD_THRESHOLD,
        }
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Feature extractor that turns sentences into lexical indicators.
///
/// Tokens are the runs of non-separator characters, where separators are
/// Unicode whitespace and the ASCII information separators U+001C..=U+001F.
/// Punctuation stays attached to the token it touches. Lengths are counted in `char`s, so
/// accented French words are not penalised for their UTF-8 width.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: ExtractorConfig,
}

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Long word threshold in use
    pub fn long_word_threshold(&self) -> usize {
        self.config.long_word_threshold
    }

    /// Extract indicators from one sentence
    pub fn extract(&self, sentence: &str) -> FeatureVector {
        let mut tokens = 0usize;
        let mut total_chars = 0usize;
        let mut long_words = 0usize;

        for token in sentence.split(is_separator).filter(|t| !t.is_empty()) {
            let len = token.chars().count();
            tokens += 1;
            total_chars += len;
            if len >= self.config.long_word_threshold {
                long_words += 1;
            }
        }

        if tokens == 0 {
            return FeatureVector::ZERO;
        }

        let n = tokens as f64;
        FeatureVector {
            avg_word_length: total_chars as f64 / n,
            long_word_ratio: long_words as f64 / n,
        }
    }

    /// Extract indicators from a sentence that may be missing
    pub fn extract_opt(&self, sentence: Option<&str>) -> FeatureVector {
        sentence.map_or(FeatureVector::ZERO, |s| self.extract(s))
    }

    /// Extract indicators for a batch of sentences, preserving order
    pub fn extract_all<'a, I>(&self, sentences: I) -> Vec<FeatureVector>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let features: Vec<FeatureVector> =
            sentences.into_iter().map(|s| self.extract(s)).collect();
        debug!(
            "Extracted lexical features for {} sentences (threshold={})",
            features.len(),
            self.config.long_word_threshold
        );
        features
    }
}

/// Extract indicators with the default long word threshold
pub fn extract(sentence: &str) -> FeatureVector {
    FeatureExtractor::default().extract(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_tokens() {
        let features = extract("ab cd ef");
        assert_eq!(features.avg_word_length, 2.0);
        assert_eq!(features.long_word_ratio, 0.0);
    }

    #[test]
    fn test_long_tokens() {
        let features = extract("internationalization localization");
        assert_eq!(features.avg_word_length, 16.0);
        assert_eq!(features.long_word_ratio, 1.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // "abcdefgh" has exactly 8 characters, "abcdefg" has 7
        let features = extract("abcdefgh abcdefg");
        assert_eq!(features.long_word_ratio, 0.5);
        assert_eq!(features.avg_word_length, 7.5);
    }

    #[test]
    fn test_punctuation_kept() {
        // "sleeping." keeps its period and reaches 9 characters
        let features = extract("The baby is sleeping.");
        assert_eq!(features.avg_word_length, (3 + 4 + 2 + 9) as f64 / 4.0);
        assert_eq!(features.long_word_ratio, 0.25);
    }

    #[test]
    fn test_characters_not_bytes() {
        // "stratégie" is 9 chars but 10 bytes, "été" is 3 chars
        let features = extract("été stratégie");
        assert_eq!(features.avg_word_length, 6.0);
        assert_eq!(features.long_word_ratio, 0.5);
    }

    #[test]
    fn test_whitespace_runs() {
        let features = extract("  ab\t\tcd \n ef  ");
        assert_eq!(features, extract("ab cd ef"));
    }

    #[test]
    fn test_information_separators_split_tokens() {
        let features = extract("a\u{1f}bbbbbbbb");
        assert_eq!(features.avg_word_length, 4.5);
        assert_eq!(features.long_word_ratio, 0.5);
        assert_eq!(extract("\u{1c}\u{1d}\u{1e}"), FeatureVector::ZERO);
    }

    #[test]
    fn test_empty_and_missing_input() {
        let extractor = FeatureExtractor::default();
        assert_eq!(extractor.extract(""), FeatureVector::ZERO);
        assert_eq!(extractor.extract(" \t\n "), FeatureVector::ZERO);
        assert_eq!(extractor.extract_opt(None), FeatureVector::ZERO);
        assert_eq!(extractor.extract_opt(Some("ab")).avg_word_length, 2.0);
    }

    #[test]
    fn test_custom_threshold() {
        let extractor = FeatureExtractor::new(ExtractorConfig {
            long_word_threshold: 3,
        });
        assert_eq!(extractor.long_word_threshold(), 3);
        assert_eq!(extractor.extract("ab abc abcd").long_word_ratio, 2.0 / 3.0);
    }

    #[test]
    fn test_extract_all_preserves_order() {
        let extractor = FeatureExtractor::default();
        let features = extractor.extract_all(["ab cd", "", "internationalization"]);
        assert_eq!(features.len(), 3);
        assert_eq!(features[0].avg_word_length, 2.0);
        assert_eq!(features[1], FeatureVector::ZERO);
        assert_eq!(features[2].long_word_ratio, 1.0);
    }

    proptest! {
        #[test]
        fn prop_long_word_ratio_in_unit_interval(sentence in "\\PC*") {
            let features = extract(&sentence);
            prop_assert!((0.0..=1.0).contains(&features.long_word_ratio));
            prop_assert!(features.avg_word_length >= 0.0);
        }

        #[test]
        fn prop_whitespace_only_is_zero(sentence in "[ \t\n\r]*") {
            prop_assert_eq!(extract(&sentence), FeatureVector::ZERO);
        }

        #[test]
        fn prop_extraction_is_deterministic(sentence in "\\PC*") {
            prop_assert_eq!(extract(&sentence), extract(&sentence));
        }
    }
}
