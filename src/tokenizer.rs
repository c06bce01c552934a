//! Bilingual tokenizer - jieba segmentation for Chinese, regex for Latin text
//!
//! Produces the lowercase token stream every downstream component (scorer,
//! word frequencies) consumes. Tokenization is deterministic and idempotent:
//! the same input always yields the same stream, which makes the output safe
//! to memoize by content hash (see `cache`).

use jieba_rs::Jieba;
use lazy_static::lazy_static;
use regex::Regex;

use crate::stopwords::BIGRAM_STOPWORDS;
use crate::stopwords::CHINESE_STOPWORDS;
use crate::stopwords::ENGLISH_STOPWORDS;

lazy_static! {
    /// Shared segmenter instance; dictionary load is expensive, do it once.
    static ref JIEBA: Jieba = {
        tracing::debug!("initializing jieba segmenter");
        Jieba::new()
    };

    /// Runs of two or more ASCII letters.
    static ref LATIN_WORD: Regex = Regex::new(r"[a-z]{2,}").expect("valid regex");
}

/// True if every char of the token is a CJK unified ideograph.
fn is_cjk_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| matches!(c as u32, 0x4E00..=0x9FFF))
}

/// Tokenize a batch of raw texts into one flattened lowercase token stream.
///
/// Two passes over the concatenated batch:
/// - Chinese: jieba segmentation, keeping multi-character CJK segments that
///   are not stopwords.
/// - Latin: runs of >=2 ASCII letters from the lowercased text, minus the
///   English stopword set.
///
/// Order within the stream is only meaningful for frequency counting; the
/// bigram extractor uses [`tokenize_line`] instead.
pub fn tokenize(texts: &[String]) -> Vec<String> {
    if texts.is_empty() {
        return Vec::new();
    }
    let joined = texts.join("\n");

    let mut tokens = Vec::new();

    // Chinese path
    for segment in JIEBA.cut(&joined, false) {
        if segment.chars().count() > 1
            && is_cjk_token(segment)
            && !CHINESE_STOPWORDS.contains(segment)
        {
            tokens.push(segment.to_string());
        }
    }

    // Latin path
    let lowered = joined.to_lowercase();
    for m in LATIN_WORD.find_iter(&lowered) {
        let word = m.as_str();
        if !ENGLISH_STOPWORDS.contains(word) {
            tokens.push(word.to_string());
        }
    }

    tokens
}

/// Order-preserving tokenization of a single line for bigram extraction.
///
/// A single jieba pass keeps mixed Chinese/Latin tokens in their original
/// order. Filtering uses the reduced bigram stopword set so that connector
/// words are dropped less aggressively than in [`tokenize`].
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for segment in JIEBA.cut(line, false) {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_cjk_token(trimmed) {
            if trimmed.chars().count() > 1 && !BIGRAM_STOPWORDS.contains(trimmed) {
                tokens.push(trimmed.to_string());
            }
        } else if trimmed.chars().all(|c| c.is_ascii_alphabetic()) && trimmed.len() >= 2 {
            let lowered = trimmed.to_lowercase();
            if !BIGRAM_STOPWORDS.contains(lowered.as_str()) {
                tokens.push(lowered);
            }
        }
    }
    tokens
}
