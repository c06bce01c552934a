//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `promptmirror` CLI

use crate::report::CorpusReport;
use crate::scorer::ScoreProfile;
use crate::taxonomy::Taxonomy;

/// Safely truncate a string at character boundary (not byte boundary)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Render a horizontal score bar out of block characters.
fn score_bar(score: u32) -> String {
    let filled = (score as usize) / 5; // 0..=20 blocks
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(20 - filled));
    bar
}

/// Print corpus-level statistics.
pub fn print_stats(report: &CorpusReport) {
    println!("📊 Corpus");
    println!("  Items:        {}", report.stats.item_count);
    println!("  Total chars:  {}", report.stats.total_chars);
    println!("  Avg chars:    {:.1}", report.stats.avg_chars);
    println!(
        "  Punctuation:  {} question / {} exclamation",
        report.stats.question_marks, report.stats.exclamation_marks
    );
    println!("  Avg complexity: {:.1}/100", report.avg_complexity);
}

/// Print the word-frequency ranking.
pub fn print_top_words(report: &CorpusReport) {
    println!("\n🔤 Top words");
    for freq in &report.top_words {
        println!(
            "  {:<16} {:>5}  ({:.1}%)",
            truncate_str(&freq.word, 14),
            freq.count,
            freq.percentage
        );
    }
}

/// Print the bigram ranking.
pub fn print_top_bigrams(bigrams: &[(String, usize)]) {
    println!("\n🔗 Top phrases");
    for (pair, count) in bigrams {
        println!("  {:<24} {count:>5}", truncate_str(pair, 22));
    }
}

/// Print trait scores grouped by framework, with score bars.
pub fn print_traits(traits: &ScoreProfile) {
    println!("\n🧬 Personality profile");
    for group in Taxonomy::global().trait_groups() {
        println!("  [{}]", group.name);
        for category in group.categories {
            let score = traits.get(category.id).copied().unwrap_or(0);
            println!(
                "    {:<22} {} {score:>3}",
                category.display_name,
                score_bar(score)
            );
        }
    }
}

/// Print emotion scores with score bars.
pub fn print_emotions(emotions: &ScoreProfile) {
    println!("\n🎭 Emotion profile");
    for category in Taxonomy::global().emotions() {
        let score = emotions.get(category.id).copied().unwrap_or(0);
        println!(
            "    {:<22} {} {score:>3}",
            category.display_name,
            score_bar(score)
        );
    }
}

/// Print a full report in human-readable form.
pub fn print_report(report: &CorpusReport) {
    print_stats(report);
    print_top_words(report);
    print_top_bigrams(&report.top_bigrams);
    print_traits(&report.traits);
    print_emotions(&report.emotions);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_multibyte_safe() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("你好世界啊", 3), "你好世...");
    }

    #[test]
    fn test_score_bar_bounds() {
        assert_eq!(score_bar(0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(score_bar(100).chars().filter(|c| *c == '█').count(), 20);
        assert_eq!(score_bar(50).chars().count(), 20);
    }
}
