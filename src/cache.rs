//! Caching of computed navigation items.
//!
//! The side navigation is rebuilt on every render, but the result only
//! depends on the pathname (for a given tree and recent-account list).
//! [`HighlightCache`] keeps the last pathnames' items in an LRU cache from the
//! [`lru`] crate. It is gated behind the `cache` feature.
//!
//! # Examples
//!
//! ```
//! use console_nav::cache::HighlightCache;
//!
//! let mut cache = HighlightCache::new();
//! cache.insert("/accounts".to_string(), Vec::new());
//!
//! assert!(cache.get("/accounts").is_some());
//! assert!(cache.get("/wallets").is_none());
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::sidebar::NavItem;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Hit, miss and invalidation counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    /// Number of [`HighlightCache::clear`] calls.
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; `0.0` before any lookup.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache from pathname to navigation items.
#[derive(Debug)]
pub struct HighlightCache {
    items: LruCache<String, Vec<NavItem>>,
    stats: CacheStats,
}

impl HighlightCache {
    const DEFAULT_CAPACITY: usize = 64;

    /// Cache holding up to 64 pathnames.
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(capacity)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            items: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Look up the items for `pathname`, updating the counters.
    pub fn get(&mut self, pathname: &str) -> Option<Vec<NavItem>> {
        if let Some(items) = self.items.get(pathname) {
            self.stats.hits += 1;
            trace_log!("highlight cache hit for '{}'", pathname);
            Some(items.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("highlight cache miss for '{}'", pathname);
            None
        }
    }

    pub fn insert(&mut self, pathname: String, items: Vec<NavItem>) {
        self.items.push(pathname, items);
    }

    /// Drop every entry and count an invalidation.
    pub fn clear(&mut self) {
        let removed = self.items.len();
        self.items.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "highlight cache cleared: {} entries removed ({} invalidations, hit rate {:.1}%)",
            removed,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for HighlightCache {
    fn default() -> Self {
        Self::new()
    }
}

// Clones start empty; cached items are cheap to rebuild.
impl Clone for HighlightCache {
    fn clone(&self) -> Self {
        Self {
            items: LruCache::new(self.items.cap()),
            stats: self.stats.clone(),
        }
    }
}
