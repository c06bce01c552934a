//! End-to-end pipeline tests over realistic bilingual corpora

#[cfg(test)]
mod pipeline_tests {
    use crate::cache::TokenCache;
    use crate::config::AnalysisConfig;
    use crate::report;
    use crate::tests::sample_items;

    fn sample_corpus() -> Vec<crate::models::TextItem> {
        sample_items(&[
            "act as a senior engineer and review my code step by step",
            "帮我写一个 python 排序 算法，因为我需要处理大量数据",
            "why does the borrow checker reject this? I feel frustrated",
            "排序 算法 的时间复杂度是多少？",
            "```rust\nfn main() {}\n```\n- first point\n- second point",
        ])
    }

    #[test]
    fn test_full_report_over_bilingual_corpus() {
        let report = report::analyze(&sample_corpus(), &AnalysisConfig::default());

        assert_eq!(report.stats.item_count, 5);
        assert!(report.stats.question_marks >= 2);
        assert!(!report.top_words.is_empty());
        assert_eq!(report.complexity_scores.len(), 5);

        // The role-prompt + chain-of-thought item scores markedly higher
        // than the short Chinese question
        assert!(report.complexity_scores[0] > report.complexity_scores[3]);
        // The fenced-code item picks up structural points
        assert!(report.complexity_scores[4] >= 15);
    }

    #[test]
    fn test_repeated_phrase_dominates_bigrams() {
        let items = sample_items(&[
            "sort algorithm in rust",
            "sort algorithm explained",
            "hash table basics",
        ]);
        let report = report::analyze(&items, &AnalysisConfig::default());
        assert_eq!(report.top_bigrams[0].0, "sort algorithm");
        assert_eq!(report.top_bigrams[0].1, 2);
    }

    #[test]
    fn test_cached_analysis_matches_uncached() {
        let items = sample_corpus();
        let config = AnalysisConfig::default();
        let cache = TokenCache::default();

        let uncached = report::analyze(&items, &config);
        let cached_first = report::analyze_with_cache(&items, &config, Some(&cache));
        let cached_second = report::analyze_with_cache(&items, &config, Some(&cache));

        assert_eq!(uncached.traits, cached_first.traits);
        assert_eq!(cached_first.traits, cached_second.traits);
        assert_eq!(cached_first.emotions, cached_second.emotions);
        assert!(cache.stats().hits.load(std::sync::atomic::Ordering::Relaxed) >= 1);
    }

    #[test]
    fn test_profile_is_corpus_relative() {
        // Doubling every item leaves the normalized profile unchanged
        let base = sample_items(&["I worry about stress", "I plan my goals"]);
        let mut doubled = base.clone();
        doubled.extend(base.clone());

        let config = AnalysisConfig::default();
        let single = report::analyze(&base, &config);
        let double = report::analyze(&doubled, &config);
        assert_eq!(single.traits, double.traits);
    }
}
