//! Trait and emotion scoring - raw keyword counts to normalized 0-100 profiles
//!
//! Scores are corpus-relative, not absolute: every unipolar group is scaled
//! against its own maximum raw count, so the dominant category always lands
//! near 95 regardless of absolute frequency, and profiles from different
//! corpora are not comparable.
//!
//! Known heuristic weakness, kept on purpose: the HEXACO scalar and the
//! emotion set are scaled against a global maximum, so an unrelated dominant
//! category with a very high count can push their scores toward zero even
//! when their own raw counts are respectable.

use std::collections::BTreeMap;

use crate::taxonomy::GroupKind;
use crate::taxonomy::Taxonomy;

/// Normalized 0-100 scores keyed by category id.
pub type ScoreProfile = BTreeMap<String, u32>;

/// Scale used for unipolar group normalization: the dominant category in a
/// group scores 95, not 100, leaving visual headroom in downstream rendering.
pub const UNIPOLAR_CEILING: f64 = 95.0;

fn round(value: f64) -> u32 {
    value.round() as u32
}

/// Score all personality-trait categories from a token stream.
///
/// - Unipolar groups (Big Five, Enneagram, Jungian, DISC):
///   `round(raw / group_max * 95)`; an all-zero group stays all zero.
/// - Bipolar pairs (the four MBTI axes): complementary ratios summing to 100;
///   a pair with no hits reports 0/0, absence of signal rather than 50/50.
/// - Global scalar (HEXACO): scaled against the largest raw count anywhere in
///   the trait taxonomy.
pub fn score_traits(tokens: &[String]) -> ScoreProfile {
    let taxonomy = Taxonomy::global();
    let counts = taxonomy.count_trait_hits(tokens);
    let global_max = counts.iter().copied().max().unwrap_or(0);

    let mut profile = ScoreProfile::new();
    let mut offset = 0;
    for group in taxonomy.trait_groups() {
        let group_counts = &counts[offset..offset + group.categories.len()];
        match group.kind {
            GroupKind::Unipolar => {
                let group_max = group_counts.iter().copied().max().unwrap_or(0);
                for (category, &raw) in group.categories.iter().zip(group_counts) {
                    let score = if group_max == 0 {
                        0
                    } else {
                        round(raw as f64 / group_max as f64 * UNIPOLAR_CEILING)
                    };
                    profile.insert(category.id.to_string(), score);
                }
            }
            GroupKind::Bipolar => {
                let (raw_a, raw_b) = (group_counts[0], group_counts[1]);
                let total = raw_a + raw_b;
                let (score_a, score_b) = if total == 0 {
                    (0, 0)
                } else {
                    // Round one side and derive the other; rounding both
                    // independently lets a .5 ratio sum to 101.
                    let score_a = round(raw_a as f64 / total as f64 * 100.0);
                    (score_a, 100 - score_a)
                };
                profile.insert(group.categories[0].id.to_string(), score_a);
                profile.insert(group.categories[1].id.to_string(), score_b);
            }
            GroupKind::GlobalScalar => {
                for (category, &raw) in group.categories.iter().zip(group_counts) {
                    let score = if global_max == 0 {
                        0
                    } else {
                        round(raw as f64 / global_max as f64 * UNIPOLAR_CEILING)
                    };
                    profile.insert(category.id.to_string(), score);
                }
            }
        }
        offset += group.categories.len();
    }
    profile
}

/// Score the 16 emotion categories, scaled against the largest raw count
/// across the emotion set.
pub fn score_emotions(tokens: &[String]) -> ScoreProfile {
    let taxonomy = Taxonomy::global();
    let counts = taxonomy.count_emotion_hits(tokens);
    let max = counts.iter().copied().max().unwrap_or(0);

    let mut profile = ScoreProfile::new();
    for (category, &raw) in taxonomy.emotions().iter().zip(&counts) {
        let score = if max == 0 {
            0
        } else {
            round(raw as f64 / max as f64 * UNIPOLAR_CEILING)
        };
        profile.insert(category.id.to_string(), score);
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_stream_scores_all_zero() {
        let traits = score_traits(&[]);
        assert!(!traits.is_empty());
        assert!(traits.values().all(|&s| s == 0));

        let emotions = score_emotions(&[]);
        assert_eq!(emotions.len(), 16);
        assert!(emotions.values().all(|&s| s == 0));
    }

    #[test]
    fn test_unipolar_dominant_category_scores_95() {
        // Big Five: "curious" and "imagine" hit only openness
        let tokens: Vec<String> = ["curious", "imagine", "curious"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let profile = score_traits(&tokens);
        assert_eq!(profile["openness"], 95);
        assert_eq!(profile["conscientiousness"], 0);
        assert_eq!(profile["neuroticism"], 0);
    }

    #[test]
    fn test_unipolar_ties_all_get_ceiling() {
        // One hit each for openness and neuroticism
        let tokens: Vec<String> = ["curious", "worry"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let profile = score_traits(&tokens);
        assert_eq!(profile["openness"], 95);
        assert_eq!(profile["neuroticism"], 95);
    }

    #[test]
    fn test_bipolar_ratio_three_to_one() {
        // E keywords x3, I keyword x1 -> 75 / 25
        let tokens: Vec<String> = ["party", "outgoing", "people", "alone"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let profile = score_traits(&tokens);
        assert_eq!(profile["E"], 75);
        assert_eq!(profile["I"], 25);
    }

    #[test]
    fn test_bipolar_half_ratio_sums_to_100() {
        // E x3, I x5: the raw ratio lands exactly on 37.5%, so one side is
        // rounded and the other derived
        let tokens: Vec<String> = [
            "party", "outgoing", "people", "alone", "quiet", "reflect",
            "solitude", "inner",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        let profile = score_traits(&tokens);
        assert_eq!(profile["E"], 38);
        assert_eq!(profile["I"], 62);
    }

    #[test]
    fn test_bipolar_no_signal_is_zero_zero() {
        let tokens: Vec<String> = vec!["curious".to_string()];
        let profile = score_traits(&tokens);
        assert_eq!(profile["S"], 0);
        assert_eq!(profile["N"], 0);
    }

    #[test]
    fn test_bipolar_sums() {
        let tokens: Vec<String> = ["logic", "analyze", "feel", "emotion", "heart"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let profile = score_traits(&tokens);
        // Both sides nonzero: sum is exactly 100
        assert_eq!(profile["T"] + profile["F"], 100);
    }

    #[test]
    fn test_hexaco_diluted_by_global_max() {
        // One honesty hit against a dominant openness count
        let mut tokens: Vec<String> = vec!["honest".to_string()];
        for _ in 0..19 {
            tokens.push("curious".to_string());
        }
        let profile = score_traits(&tokens);
        // 1/19 of the global max, scaled by 95 -> 5
        assert_eq!(profile["honesty_humility"], 5);
    }

    #[test]
    fn test_emotion_scaled_within_set() {
        let tokens: Vec<String> = ["happy", "happy", "sad"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let profile = score_emotions(&tokens);
        assert_eq!(profile["joy"], 95);
        assert_eq!(profile["sadness"], 48); // round(1/2 * 95)
        assert_eq!(profile["anger"], 0);
    }

    #[test]
    fn test_single_category_corpus() {
        // Tokens hitting only one unipolar category -> 95, siblings 0
        let tokens: Vec<String> = ["研究", "研究", "观察"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let profile = score_traits(&tokens);
        assert_eq!(profile["type5"], 95);
        assert_eq!(profile["type1"], 0);
    }
}
