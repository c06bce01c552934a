//! Content-addressed memoization for tokenizer output
//!
//! Tokenizing a large corpus is the most expensive step in the pipeline and
//! callers tend to re-run it on every refresh. Entries are keyed by the
//! SHA-256 of the exact input batch, so a changed corpus can never be served
//! a stale token stream; invalidation is explicit (`invalidate` / `clear`),
//! never implicit.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use dashmap::DashMap;
use sha2::Digest;
use sha2::Sha256;
use tracing::debug;

use crate::tokenizer;

/// Cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached batches before inserts evict arbitrary entries.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_entries: 256 }
    }
}

/// Cache statistics.
#[derive(Debug, Default)]
pub struct CacheStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub evictions: AtomicU64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

/// Content-addressed cache in front of [`tokenizer::tokenize`].
pub struct TokenCache {
    config: CacheConfig,
    entries: DashMap<String, Arc<Vec<String>>>,
    stats: CacheStats,
}

impl TokenCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Hex SHA-256 over the batch with a length-prefixed framing so that
    /// `["ab","c"]` and `["a","bc"]` hash differently.
    pub fn batch_key(texts: &[String]) -> String {
        let mut hasher = Sha256::new();
        for text in texts {
            hasher.update((text.len() as u64).to_le_bytes());
            hasher.update(text.as_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Tokenize `texts`, serving a cached stream when the exact batch has
    /// been seen before.
    pub fn tokenize(&self, texts: &[String]) -> Arc<Vec<String>> {
        let key = Self::batch_key(texts);
        if let Some(entry) = self.entries.get(&key) {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "token cache hit");
            return Arc::clone(&entry);
        }
        self.stats.misses.fetch_add(1, Ordering::Relaxed);

        let tokens = Arc::new(tokenizer::tokenize(texts));
        if self.entries.len() >= self.config.max_entries {
            // Cap the map by dropping an arbitrary entry; access-ordered
            // eviction is not worth the bookkeeping at this size.
            // Bind the key in its own statement so the iterator's shard read
            // guard drops before `remove` takes the write lock.
            let victim = self.entries.iter().next().map(|e| e.key().clone());
            if let Some(victim) = victim {
                self.entries.remove(&victim);
                self.stats.evictions.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.entries.insert(key, Arc::clone(&tokens));
        tokens
    }

    /// Drop the cached stream for one batch.
    pub fn invalidate(&self, texts: &[String]) {
        self.entries.remove(&Self::batch_key(texts));
    }

    /// Drop every cached stream.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_hit_after_miss() {
        let cache = TokenCache::default();
        let texts = batch(&["hello world rust"]);

        let first = cache.tokenize(&texts);
        let second = cache.tokenize(&texts);
        assert_eq!(first, second);
        assert_eq!(cache.stats().misses.load(Ordering::Relaxed), 1);
        assert_eq!(cache.stats().hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_key_framing_distinguishes_batches() {
        let a = batch(&["ab", "c"]);
        let b = batch(&["a", "bc"]);
        assert_ne!(TokenCache::batch_key(&a), TokenCache::batch_key(&b));
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let cache = TokenCache::default();
        let texts = batch(&["hello world"]);

        cache.tokenize(&texts);
        cache.invalidate(&texts);
        cache.tokenize(&texts);
        assert_eq!(cache.stats().misses.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_entry_cap_evicts() {
        let cache = TokenCache::new(CacheConfig { max_entries: 2 });
        cache.tokenize(&batch(&["one sentence"]));
        cache.tokenize(&batch(&["another sentence"]));
        cache.tokenize(&batch(&["third sentence"]));
        assert!(cache.len() <= 2);
        assert_eq!(cache.stats().evictions.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = TokenCache::default();
        cache.tokenize(&batch(&["hello world"]));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
