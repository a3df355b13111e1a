//! Corpus Aggregation
//!
//! Applies the lexical feature extractor to every record of a corpus and
//! summarizes sentence length and lexical indicators globally and per label.

mod aggregator;
mod summary;

pub use aggregator::{summarize, Aggregator};
pub use summary::{CorpusSummary, GlobalStats, GroupSummary};
