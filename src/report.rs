//! Corpus-level analysis report
//!
//! Ties the pipeline together for one batch of prompts: token frequencies,
//! phrase pairs, trait/emotion profiles, and per-item complexity, plus the
//! simple punctuation stats the original dashboard charted. Everything is
//! recomputed per batch; nothing here persists state.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use tracing::info;

use crate::bigrams;
use crate::cache::TokenCache;
use crate::complexity;
use crate::config::AnalysisConfig;
use crate::models::TextItem;
use crate::models::WordFrequency;
use crate::scorer;
use crate::scorer::ScoreProfile;
use crate::tokenizer;

/// Aggregate statistics over the raw prompt texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStats {
    pub item_count: usize,
    pub total_chars: usize,
    pub avg_chars: f64,
    pub question_marks: usize,
    pub exclamation_marks: usize,
}

/// Full analysis output for one corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusReport {
    pub stats: CorpusStats,
    pub top_words: Vec<WordFrequency>,
    pub top_bigrams: Vec<(String, usize)>,
    pub traits: ScoreProfile,
    pub emotions: ScoreProfile,
    /// Per-item complexity scores, parallel to the input batch.
    pub complexity_scores: Vec<u32>,
    pub avg_complexity: f64,
}

/// Run the full pipeline over a batch of prompts.
pub fn analyze(items: &[TextItem], config: &AnalysisConfig) -> CorpusReport {
    analyze_with_cache(items, config, None)
}

/// Run the full pipeline, optionally memoizing tokenization through a
/// [`TokenCache`].
pub fn analyze_with_cache(
    items: &[TextItem],
    config: &AnalysisConfig,
    cache: Option<&TokenCache>,
) -> CorpusReport {
    let texts: Vec<String> = items.iter().map(|i| i.text.clone()).collect();

    let tokens = match cache {
        Some(cache) => cache.tokenize(&texts),
        None => std::sync::Arc::new(tokenizer::tokenize(&texts)),
    };

    let stats = corpus_stats(&texts);
    let top_words = word_frequencies(&tokens, config.top_words);
    let top_bigrams = bigrams::top_bigrams(&texts, config.top_bigrams);
    let traits = scorer::score_traits(&tokens);
    let emotions = scorer::score_emotions(&tokens);

    let complexity_scores: Vec<u32> = texts
        .iter()
        .map(|t| complexity::complexity_with(t, &config.complexity))
        .collect();
    let avg_complexity = if complexity_scores.is_empty() {
        0.0
    } else {
        complexity_scores.iter().sum::<u32>() as f64 / complexity_scores.len() as f64
    };

    info!(
        items = items.len(),
        tokens = tokens.len(),
        "corpus analysis complete"
    );

    CorpusReport {
        stats,
        top_words,
        top_bigrams,
        traits,
        emotions,
        complexity_scores,
        avg_complexity,
    }
}

fn corpus_stats(texts: &[String]) -> CorpusStats {
    let total_chars: usize = texts.iter().map(|t| t.chars().count()).sum();
    let question_marks = texts
        .iter()
        .map(|t| t.chars().filter(|c| *c == '?' || *c == '？').count())
        .sum();
    let exclamation_marks = texts
        .iter()
        .map(|t| t.chars().filter(|c| *c == '!' || *c == '！').count())
        .sum();
    let avg_chars = if texts.is_empty() {
        0.0
    } else {
        total_chars as f64 / texts.len() as f64
    };
    CorpusStats {
        item_count: texts.len(),
        total_chars,
        avg_chars,
        question_marks,
        exclamation_marks,
    }
}

/// Rank tokens by frequency; ties resolve by first occurrence in the stream.
fn word_frequencies(tokens: &[String], limit: usize) -> Vec<WordFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for token in tokens {
        match counts.get_mut(token.as_str()) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token, 1);
                order.push(token);
            }
        }
    }

    let total = tokens.len();
    let mut ranked: Vec<(&str, usize)> =
        order.into_iter().map(|word| (word, counts[word])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordFrequency {
            word: word.to_string(),
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(texts: &[&str]) -> Vec<TextItem> {
        texts.iter().map(|t| TextItem::new(*t)).collect()
    }

    #[test]
    fn test_empty_corpus_report() {
        let report = analyze(&[], &AnalysisConfig::default());
        assert_eq!(report.stats.item_count, 0);
        assert!(report.top_words.is_empty());
        assert!(report.top_bigrams.is_empty());
        assert!(report.traits.values().all(|&s| s == 0));
        assert!(report.complexity_scores.is_empty());
        assert!((report.avg_complexity - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_count_bilingual_punctuation() {
        let report = analyze(
            &items(&["why? 为什么？", "do it now! 快！"]),
            &AnalysisConfig::default(),
        );
        assert_eq!(report.stats.question_marks, 2);
        assert_eq!(report.stats.exclamation_marks, 2);
    }

    #[test]
    fn test_word_frequencies_ranked_and_percented() {
        let tokens: Vec<String> = ["rust", "rust", "python", "rust"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let freqs = word_frequencies(&tokens, 10);
        assert_eq!(freqs[0].word, "rust");
        assert_eq!(freqs[0].count, 3);
        assert!((freqs[0].percentage - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_complexity_scores_parallel_to_items() {
        let batch = items(&["short", &"x".repeat(300)]);
        let report = analyze(&batch, &AnalysisConfig::default());
        assert_eq!(report.complexity_scores.len(), 2);
        assert!(report.complexity_scores[1] > report.complexity_scores[0]);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = analyze(&items(&["hello world prompt"]), &AnalysisConfig::default());
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("top_words"));
        assert!(json.contains("traits"));
    }
}
