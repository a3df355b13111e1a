//! Text and JSON rendering

use crate::{AnalysisReport, LanguageReport, OutputFormat};
use anyhow::{Context, Result};
use corpus::Label;
use std::fmt;

/// Human readable view of an analysis report
pub struct TextReport<'a>(pub &'a AnalysisReport);

/// Render a report in the requested format
pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextReport(report).to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

/// Fixed precision, or "n/a" for statistics of empty groups
struct Stat(f64, usize);

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("n/a")
        } else {
            write!(f, "{:.*}", self.1, self.0)
        }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for language in &self.0.languages {
            write_basic_stats(f, language)?;
            write_comparison(f, language)?;
            write_examples(f, language)?;
        }
        Ok(())
    }
}

fn write_basic_stats(f: &mut fmt::Formatter<'_>, report: &LanguageReport) -> fmt::Result {
    let lang = report.summary.language.code().to_uppercase();
    let global = &report.summary.global;

    writeln!(f, "\nBASIC STATISTICS OF {lang} DATASET")?;
    writeln!(f, "\nNumber of sentences: {}", global.total_count)?;

    writeln!(f, "\nDistribution of Label (counts):")?;
    for (label, count) in &global.label_counts {
        writeln!(f, "  Label {label}: {count}")?;
    }
    writeln!(f, "\nDistribution of Label (proportions):")?;
    for (label, share) in &global.label_proportions {
        writeln!(f, "  Label {label}: {}", Stat(*share, 3))?;
    }

    let q = &global.length_distribution;
    writeln!(f, "\nIQR range of sentence lengths below:")?;
    writeln!(f, "  Q1     = {}", Stat(q.q1, 2))?;
    writeln!(f, "  Median = {}", Stat(q.median, 2))?;
    writeln!(f, "  Q3     = {}", Stat(q.q3, 2))
}

fn write_comparison(f: &mut fmt::Formatter<'_>, report: &LanguageReport) -> fmt::Result {
    let lang = report.summary.language.code().to_uppercase();
    let groups = &report.summary.by_label;

    writeln!(f, "\nSIMPLE vs COMPLEX SENTENCE ANALYSIS ({lang})")?;
    writeln!(f, "\n1. Sentence Length")?;
    for group in groups.values() {
        let kind = match group.label {
            Label::Complex => "Complex sentences (Label 0)",
            Label::Simple => "Simple sentences (Label 1) ",
        };
        if group.is_empty() {
            writeln!(f, "   - {kind} average length: n/a (no records)")?;
        } else {
            writeln!(
                f,
                "   - {kind} average length: {} words (median {})",
                Stat(group.mean_length, 2),
                Stat(group.median_length, 2)
            )?;
        }
    }

    writeln!(f, "\n2. Word Complexity")?;
    writeln!(f, "   - Avg. word length:")?;
    for group in groups.values() {
        writeln!(f, "       Label {}: {}", group.label, Stat(group.mean_avg_word_length, 2))?;
    }
    writeln!(
        f,
        "   - Proportion of long words (>= {} letters):",
        report.long_word_threshold
    )?;
    for group in groups.values() {
        writeln!(f, "       Label {}: {}", group.label, Stat(group.mean_long_word_ratio, 3))?;
    }
    Ok(())
}

fn write_examples(f: &mut fmt::Formatter<'_>, report: &LanguageReport) -> fmt::Result {
    let lang = report.summary.language.code().to_uppercase();
    writeln!(f, "\nExample sentences for {lang}")?;

    for (label, examples) in &report.examples {
        let count = report.summary.by_label.get(label).map_or(0, |g| g.count);
        writeln!(f, "\n  Label = {label}  (n={count})")?;
        if examples.is_empty() {
            writeln!(f, "    (no examples)")?;
        }
        for sentence in examples {
            writeln!(f, "    - {sentence}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Analyzer, ReportConfig};
    use chrono::Utc;
    use corpus::{Corpus, Language, Record};

    fn report(records: Vec<Record>) -> AnalysisReport {
        let analyzer = Analyzer::new(&ReportConfig::default());
        AnalysisReport {
            generated_at: Utc::now(),
            languages: vec![analyzer.analyze_corpus(&Corpus::new(Language::English, records))],
        }
    }

    #[test]
    fn test_text_report_sections() {
        let text = TextReport(&report(vec![
            Record::new("ab cd ef", Label::Simple, 3),
            Record::new("internationalization localization", Label::Complex, 2),
        ]))
        .to_string();

        assert!(text.contains("BASIC STATISTICS OF EN DATASET"));
        assert!(text.contains("Number of sentences: 2"));
        assert!(text.contains("  Label 0: 1\n  Label 1: 1"));
        assert!(text.contains("  Median = 2.50"));
        assert!(text.contains("SIMPLE vs COMPLEX SENTENCE ANALYSIS (EN)"));
        assert!(text.contains("       Label 0: 16.00"));
        assert!(text.contains("       Label 0: 1.000"));
        assert!(text.contains("       Label 1: 0.000"));
        assert!(text.contains("    - ab cd ef"));
    }

    #[test]
    fn test_empty_group_rendered_as_such() {
        let text = TextReport(&report(vec![Record::new("Il lit.", Label::Complex, 2)])).to_string();
        assert!(text.contains("Simple sentences (Label 1)  average length: n/a (no records)"));
        assert!(text.contains("       Label 1: n/a"));
        assert!(text.contains("  Label = 1  (n=0)\n    (no examples)"));
    }

    #[test]
    fn test_json_report() {
        let json = render(
            &report(vec![Record::new("Cats nap.", Label::Simple, 2)]),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let summary = &value["languages"][0]["summary"];
        assert_eq!(summary["language"], "en");
        assert_eq!(summary["global"]["total_count"], 1);
        assert_eq!(summary["by_label"]["complex"]["count"], 0);
        assert!(summary["by_label"]["complex"]["mean_length"].is_null());
        assert_eq!(value["languages"][0]["examples"]["simple"][0], "Cats nap.");
    }
}
