//! Keyword taxonomy - trait and emotion categories with trigger keywords
//!
//! Six personality frameworks (Big Five, MBTI, Enneagram, Jungian archetypes,
//! DISC, HEXACO Honesty-Humility) plus a 16-way emotion set. Group membership
//! is an explicit structured field on each category, not something parsed out
//! of the category name. The taxonomy is built once at first use and never
//! mutated, so it is safe to share across any number of readers.

mod keywords;

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Deserialize;
use serde::Serialize;

/// Normalization policy applied to a trait group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    /// Categories scored relative to the group's own maximum raw count.
    Unipolar,
    /// Exactly two opposing categories scored as complementary ratios.
    Bipolar,
    /// A peerless single category scored against the global trait maximum.
    GlobalScalar,
}

/// One scorable category and its trigger keywords.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub display_name: &'static str,
    pub keywords: &'static [&'static str],
}

/// A named group of categories sharing one normalization policy.
#[derive(Debug, Clone, Copy)]
pub struct TraitGroup {
    pub name: &'static str,
    pub kind: GroupKind,
    pub categories: &'static [Category],
}

/// The full static taxonomy with a prebuilt keyword inverted index.
pub struct Taxonomy {
    trait_groups: &'static [TraitGroup],
    emotions: &'static [Category],
    /// keyword -> indices into the flattened trait category list
    trait_index: HashMap<&'static str, Vec<usize>>,
    /// keyword -> indices into the emotion category list
    emotion_index: HashMap<&'static str, Vec<usize>>,
    trait_categories: Vec<Category>,
}

impl Taxonomy {
    fn build() -> Self {
        let trait_groups = keywords::TRAIT_GROUPS;
        let emotions = keywords::EMOTIONS;

        let mut trait_categories = Vec::new();
        let mut trait_index: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for group in trait_groups {
            for category in group.categories {
                let idx = trait_categories.len();
                trait_categories.push(*category);
                for keyword in category.keywords.iter().copied() {
                    trait_index.entry(keyword).or_default().push(idx);
                }
            }
        }

        let mut emotion_index: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (idx, category) in emotions.iter().enumerate() {
            for keyword in category.keywords.iter().copied() {
                emotion_index.entry(keyword).or_default().push(idx);
            }
        }

        Self {
            trait_groups,
            emotions,
            trait_index,
            emotion_index,
            trait_categories,
        }
    }

    /// The process-wide taxonomy instance.
    pub fn global() -> &'static Self {
        &TAXONOMY
    }

    pub fn trait_groups(&self) -> &'static [TraitGroup] {
        self.trait_groups
    }

    pub fn emotions(&self) -> &'static [Category] {
        self.emotions
    }

    pub fn trait_categories(&self) -> &[Category] {
        &self.trait_categories
    }

    /// Raw keyword-hit counts per trait category, parallel to
    /// [`Self::trait_categories`]. A single token may hit several categories.
    pub fn count_trait_hits(&self, tokens: &[String]) -> Vec<usize> {
        let mut counts = vec![0usize; self.trait_categories.len()];
        for token in tokens {
            if let Some(indices) = self.trait_index.get(token.as_str()) {
                for &idx in indices {
                    counts[idx] += 1;
                }
            }
        }
        counts
    }

    /// Raw keyword-hit counts per emotion category, parallel to
    /// [`Self::emotions`].
    pub fn count_emotion_hits(&self, tokens: &[String]) -> Vec<usize> {
        let mut counts = vec![0usize; self.emotions.len()];
        for token in tokens {
            if let Some(indices) = self.emotion_index.get(token.as_str()) {
                for &idx in indices {
                    counts[idx] += 1;
                }
            }
        }
        counts
    }

    /// Offset of a group's first category in the flattened trait list.
    pub fn group_offset(&self, group: &TraitGroup) -> usize {
        let mut offset = 0;
        for g in self.trait_groups {
            if g.name == group.name {
                return offset;
            }
            offset += g.categories.len();
        }
        offset
    }
}

lazy_static! {
    static ref TAXONOMY: Taxonomy = Taxonomy::build();
}
