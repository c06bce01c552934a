//! Adjacent-token pair extraction for phrase-frequency reporting
//!
//! Pairs are built per line with order-preserving tokenization and never
//! cross a line boundary. Top-N selection uses stable most-common semantics:
//! ties are broken by first-encountered order, not alphabetically.

use std::collections::HashMap;

use crate::tokenizer::tokenize_line;

/// Count adjacent token pairs across all lines, returning the top `n` by
/// frequency descending. A line must keep at least two tokens after
/// stopword filtering to contribute any pair.
pub fn top_bigrams(lines: &[String], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    // First-seen order, for stable tie-breaking
    let mut order: Vec<String> = Vec::new();

    for line in lines {
        let tokens = tokenize_line(line);
        for pair in tokens.windows(2) {
            let key = format!("{} {}", pair[0], pair[1]);
            match counts.get_mut(&key) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(key.clone(), 1);
                    order.push(key);
                }
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            (key, count)
        })
        .collect();
    // Stable sort preserves discovery order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_corpus_yields_no_bigrams() {
        assert!(top_bigrams(&[], 10).is_empty());
        assert!(top_bigrams(&lines(&["", "   "]), 10).is_empty());
    }

    #[test]
    fn test_single_surviving_token_yields_no_bigrams() {
        // Everything except one token filters out
        let result = top_bigrams(&lines(&["the function"]), 10);
        assert!(result.is_empty());
    }

    #[test]
    fn test_adjacent_pairs_within_line() {
        let result = top_bigrams(&lines(&["sort algorithm rust"]), 10);
        let keys: Vec<&str> = result.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["sort algorithm", "algorithm rust"]);
    }

    #[test]
    fn test_pairs_never_cross_lines() {
        let result = top_bigrams(&lines(&["sort algorithm", "rust compiler"]), 10);
        let keys: Vec<&str> = result.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"sort algorithm"));
        assert!(keys.contains(&"rust compiler"));
        assert!(!keys.contains(&"algorithm rust"));
    }

    #[test]
    fn test_counts_aggregate_across_lines() {
        let result = top_bigrams(
            &lines(&["sort algorithm", "sort algorithm", "rust compiler"]),
            10,
        );
        assert_eq!(result[0], ("sort algorithm".to_string(), 2));
        assert_eq!(result[1], ("rust compiler".to_string(), 1));
    }

    #[test]
    fn test_ties_broken_by_discovery_order() {
        let result = top_bigrams(&lines(&["alpha beta", "gamma delta"]), 10);
        assert_eq!(result[0].0, "alpha beta");
        assert_eq!(result[1].0, "gamma delta");
    }

    #[test]
    fn test_top_n_truncation() {
        let result = top_bigrams(
            &lines(&["alpha beta gamma delta epsilon"]),
            2,
        );
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_chinese_pairs() {
        let result = top_bigrams(&lines(&["排序 算法 实现"]), 10);
        let keys: Vec<&str> = result.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"排序 算法"));
    }
}
