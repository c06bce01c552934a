//! Heuristic complexity estimation for a single prompt
//!
//! A pure function of one text; no corpus-wide state. The score is an
//! additive weighted model over four feature families, each capped before
//! summation. This is a proxy for structural/logical depth with no ground
//! truth behind it — the weights are tuning choices, so they live in
//! [`ComplexityWeights`] instead of being buried in the code, and the tests
//! only assert internal consistency (monotonicity per feature), never
//! correctness against an external label.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// Bilingual logical/argumentative connectives.
const CONNECTIVES: &[&str] = &[
    "because", "however", "therefore", "although", "moreover", "furthermore",
    "consequently", "whereas", "otherwise", "thus",
    "因为", "所以", "但是", "然而", "如果", "因此", "虽然", "此外", "而且",
    "否则",
];

/// Role-prompting phrases ("act as ...").
const ROLE_PHRASES: &[&str] = &[
    "act as", "you are a", "you are an", "pretend to be", "你是一个",
    "扮演", "假设你是", "作为一名",
];

/// Chain-of-thought phrases ("step by step").
const COT_PHRASES: &[&str] = &[
    "step by step", "think through", "reason about", "let's think",
    "一步步", "逐步", "step-by-step", "分步骤",
];

lazy_static! {
    /// Lines starting with "1." / "2)" style markers.
    static ref NUMBERED_LIST: Regex =
        Regex::new(r"(?m)^\s*\d+[.)、]").expect("valid regex");
    /// Lines starting with a bullet marker.
    static ref BULLET_LIST: Regex =
        Regex::new(r"(?m)^\s*[-*•]\s").expect("valid regex");
    /// Lines starting with a blockquote marker.
    static ref BLOCKQUOTE: Regex = Regex::new(r"(?m)^\s*>\s").expect("valid regex");
}

/// Weighting constants for the complexity model.
///
/// Defaults reproduce the 30/25/30/15 split with a 200-character length
/// normalizer and a 5-hit connective normalizer. None of these have an
/// empirical justification; treat them as product tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityWeights {
    /// Points awarded at full length saturation.
    pub length_weight: f64,
    /// Character count at which the length component saturates.
    pub length_norm_chars: usize,
    /// Points awarded at full connective saturation.
    pub connective_weight: f64,
    /// Connective-hit count at which that component saturates.
    pub connective_norm_hits: usize,
    /// Fenced code block bonus.
    pub code_block_points: f64,
    /// Bulleted list bonus.
    pub bullet_points: f64,
    /// Numbered list bonus.
    pub numbered_points: f64,
    /// Blockquote bonus.
    pub blockquote_points: f64,
    /// Cap on the structural component.
    pub structure_cap: f64,
    /// Role-prompting phrase bonus.
    pub role_points: f64,
    /// Chain-of-thought phrase bonus.
    pub cot_points: f64,
    /// Cap on the cognitive-pattern component.
    pub cognitive_cap: f64,
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            length_weight: 30.0,
            length_norm_chars: 200,
            connective_weight: 25.0,
            connective_norm_hits: 5,
            code_block_points: 15.0,
            bullet_points: 10.0,
            numbered_points: 10.0,
            blockquote_points: 5.0,
            structure_cap: 30.0,
            role_points: 10.0,
            cot_points: 15.0,
            cognitive_cap: 15.0,
        }
    }
}

/// Score a single text with the default weights.
pub fn complexity(text: &str) -> u32 {
    complexity_with(text, &ComplexityWeights::default())
}

/// Score a single text in `[0, 100]` with explicit weights.
pub fn complexity_with(text: &str, weights: &ComplexityWeights) -> u32 {
    if text.is_empty() {
        return 0;
    }
    let lower = text.to_lowercase();

    // Length component: linear up to the saturation point
    let char_count = text.chars().count() as f64;
    let length_score =
        (char_count / weights.length_norm_chars as f64).min(1.0) * weights.length_weight;

    // Logical-connective component
    let connective_hits: usize = CONNECTIVES
        .iter()
        .map(|c| lower.matches(c).count())
        .sum();
    let connective_score = (connective_hits as f64 / weights.connective_norm_hits as f64)
        .min(1.0)
        * weights.connective_weight;

    // Structural component, capped
    let mut structure_score = 0.0;
    if text.contains("```") {
        structure_score += weights.code_block_points;
    }
    if BULLET_LIST.is_match(text) {
        structure_score += weights.bullet_points;
    }
    if NUMBERED_LIST.is_match(text) {
        structure_score += weights.numbered_points;
    }
    if BLOCKQUOTE.is_match(text) {
        structure_score += weights.blockquote_points;
    }
    structure_score = structure_score.min(weights.structure_cap);

    // Cognitive-pattern component, capped
    let mut cognitive_score = 0.0;
    if ROLE_PHRASES.iter().any(|p| lower.contains(p)) {
        cognitive_score += weights.role_points;
    }
    if COT_PHRASES.iter().any(|p| lower.contains(p)) {
        cognitive_score += weights.cot_points;
    }
    cognitive_score = cognitive_score.min(weights.cognitive_cap);

    let total = length_score + connective_score + structure_score + cognitive_score;
    (total.min(100.0)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(complexity(""), 0);
    }

    #[test]
    fn test_length_component_saturates_at_norm() {
        let short = "a".repeat(100);
        let exact = "a".repeat(200);
        let long = "a".repeat(400);
        assert_eq!(complexity(&short), 15);
        assert_eq!(complexity(&exact), 30);
        assert_eq!(complexity(&long), 30);
    }

    #[test]
    fn test_length_monotonicity() {
        let mut prev = 0;
        for n in (0..=250).step_by(10) {
            let score = complexity(&"x".repeat(n));
            assert!(score >= prev, "score dropped at len {n}");
            prev = score;
        }
    }

    #[test]
    fn test_connective_component() {
        // 5 connective hits saturate at 25 points; text itself is short
        let text = "because however therefore although thus";
        let score = complexity(text);
        // length: 39/200*30 = 5.85, connectives: 25 -> 30
        assert_eq!(score, 30);
    }

    #[test]
    fn test_code_block_adds_fifteen() {
        let plain = "short prompt";
        let fenced = "short prompt ```rust```";
        let delta = complexity(fenced) as i64 - complexity(plain) as i64;
        // 15 structural points plus the small length increase
        assert!(delta >= 15);
    }

    #[test]
    fn test_structure_cap_at_thirty() {
        // Zero out the length component to isolate structure
        let weights = ComplexityWeights {
            length_weight: 0.0,
            ..ComplexityWeights::default()
        };
        let text = "```code```\n- bullet\n1. numbered\n> quote\n";
        // 15 + 10 + 10 + 5 = 40 raw, capped at 30
        assert_eq!(complexity_with(text, &weights), 30);
    }

    #[test]
    fn test_cognitive_cap_at_fifteen() {
        // Zero out the length component to isolate cognitive patterns
        let weights = ComplexityWeights {
            length_weight: 0.0,
            ..ComplexityWeights::default()
        };
        let both = "act as a teacher and explain step by step";
        // 10 + 15 raw, capped at 15
        assert_eq!(complexity_with(both, &weights), 15);
    }

    #[test]
    fn test_chinese_phrases_detected() {
        let role = "你是一个资深工程师";
        assert!(complexity(role) >= 10);
        let cot = "请一步步推导这个结论";
        assert!(complexity(cot) >= 15);
    }

    #[test]
    fn test_custom_weights_respected() {
        let weights = ComplexityWeights {
            length_weight: 0.0,
            connective_weight: 0.0,
            ..ComplexityWeights::default()
        };
        let text = "because therefore ".repeat(20);
        assert_eq!(complexity_with(&text, &weights), 0);
    }
}
