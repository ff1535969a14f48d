//! Report formatting for quiz results and bank checks.
//!
//! Pure functions — (data, OutputFormat) → String.
//! No I/O, no side effects.

use crate::bank::BankStats;
use crate::quiz::QuizSummary;
use crate::types::OutputFormat;

/// Headline shown when the attempt passed.
pub const PASS_HEADLINE: &str = "You made it!";
/// Headline shown otherwise.
pub const FAIL_HEADLINE: &str = "Oh well, maybe next time...";

/// Headline for a finished attempt.
pub fn headline(summary: &QuizSummary) -> &'static str {
    if summary.passed {
        PASS_HEADLINE
    } else {
        FAIL_HEADLINE
    }
}

/// Format a completed quiz summary.
pub fn format_summary(summary: &QuizSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => {
            let mut out = String::new();
            out.push_str(&format!("=== {} ===\n", headline(summary)));
            out.push_str(&format!(
                "Score: {} / {} ({}%)\n",
                summary.score,
                summary.total,
                summary.percentage()
            ));
            out
        }
        OutputFormat::Json => to_json(summary),
    }
}

/// Format the result of checking a bank.
pub fn format_bank_stats(stats: &BankStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => {
            let mut out = String::new();
            out.push_str("=== Question bank OK ===\n");
            out.push_str(&format!("Questions: {}\n", stats.questions));
            if stats.min_options == stats.max_options {
                out.push_str(&format!("Options:   {} each\n", stats.min_options));
            } else {
                out.push_str(&format!(
                    "Options:   {} to {}\n",
                    stats.min_options, stats.max_options
                ));
            }
            out
        }
        OutputFormat::Json => to_json(stats),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Plain structs of integers and bools always serialize
        panic!("Failed to serialize report to JSON: {}", e)
    });
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: usize, total: usize) -> QuizSummary {
        QuizSummary {
            score,
            total,
            passed: 2 * score > total,
        }
    }

    #[test]
    fn human_summary_for_pass() {
        let output = format_summary(&summary(3, 5), OutputFormat::Human);
        assert!(output.contains(PASS_HEADLINE));
        assert!(output.contains("Score: 3 / 5 (60%)"));
    }

    #[test]
    fn human_summary_for_fail() {
        let output = format_summary(&summary(2, 4), OutputFormat::Human);
        assert!(output.contains(FAIL_HEADLINE));
        assert!(output.contains("Score: 2 / 4 (50%)"));
    }

    #[test]
    fn json_summary_has_expected_fields() {
        let output = format_summary(&summary(2, 3), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["score"], 2);
        assert_eq!(parsed["total"], 3);
        assert_eq!(parsed["passed"], true);
    }

    #[test]
    fn bank_stats_human_uniform_options() {
        let stats = BankStats { questions: 5, min_options: 4, max_options: 4 };
        let output = format_bank_stats(&stats, OutputFormat::Human);
        assert!(output.contains("Questions: 5"));
        assert!(output.contains("4 each"));
    }

    #[test]
    fn bank_stats_human_mixed_options() {
        let stats = BankStats { questions: 2, min_options: 2, max_options: 3 };
        let output = format_bank_stats(&stats, OutputFormat::Human);
        assert!(output.contains("2 to 3"));
    }

    #[test]
    fn bank_stats_json_is_valid() {
        let stats = BankStats { questions: 2, min_options: 2, max_options: 3 };
        let parsed: serde_json::Value =
            serde_json::from_str(&format_bank_stats(&stats, OutputFormat::Json)).unwrap();
        assert_eq!(parsed["questions"], 2);
        assert_eq!(parsed["max_options"], 3);
    }
}
