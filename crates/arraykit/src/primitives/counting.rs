//! Frequency tables and hash containers.
//!
//! ## Purpose
//!
//! This module provides the hashed containers shared by the membership-based
//! algorithms: seen-sets, value-to-index maps, and occurrence counters.
//!
//! ## Design notes
//!
//! * **Hashing**: All containers use `ahash::RandomState` instead of SipHash.
//! * **Buckets**: A table can be regrouped by count for linear-time ranking.
//!
//! ## Invariants
//!
//! * Every stored count is at least 1; keys whose count reaches 0 are removed.
//! * `total()` always equals the sum of all stored counts.

// External dependencies
use ahash::RandomState;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

// ============================================================================
// Container Aliases
// ============================================================================

/// Hash map keyed with `ahash`.
pub type FastMap<K, V> = HashMap<K, V, RandomState>;

/// Hash set keyed with `ahash`.
pub type FastSet<K> = HashSet<K, RandomState>;

/// Create an empty [`FastSet`] sized for `capacity` elements.
#[inline]
pub fn set_with_capacity<K>(capacity: usize) -> FastSet<K> {
    HashSet::with_capacity_and_hasher(capacity, RandomState::new())
}

/// Create an empty [`FastMap`] sized for `capacity` entries.
#[inline]
pub fn map_with_capacity<K, V>(capacity: usize) -> FastMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

// ============================================================================
// Frequency Table
// ============================================================================

/// Occurrence counts of hashable keys.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: FastMap<K, usize>,
    total: usize,
}

impl<K: Hash + Eq> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FrequencyTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: map_with_capacity(0),
            total: 0,
        }
    }

    /// Count every item of an iterator.
    pub fn from_items<I: IntoIterator<Item = K>>(items: I) -> Self {
        let iter = items.into_iter();
        let mut table = Self {
            counts: map_with_capacity(iter.size_hint().0),
            total: 0,
        };
        for item in iter {
            table.add(item);
        }
        table
    }

    /// Record one occurrence of `key`.
    #[inline]
    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Remove one occurrence of `key`.
    ///
    /// Returns `false` if `key` had no occurrences left.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.counts.get_mut(key) {
            Some(count) if *count > 1 => {
                *count -= 1;
            }
            Some(_) => {
                self.counts.remove(key);
            }
            None => return false,
        }
        self.total -= 1;
        true
    }

    /// Number of occurrences of `key`.
    #[allow(dead_code)]
    #[inline]
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of recorded occurrences across all keys.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if the table holds no occurrences.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over `(key, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }

    /// Regroup keys by occurrence count.
    ///
    /// `buckets[c]` holds the keys seen exactly `c` times; index 0 is always
    /// empty. The outer vector has `max_count + 1` slots, which is bounded by
    /// `total() + 1`.
    pub fn into_buckets(self) -> Vec<Vec<K>> {
        let max_count = self.counts.values().copied().max().unwrap_or(0);
        let mut buckets: Vec<Vec<K>> = (0..=max_count).map(|_| Vec::new()).collect();
        for (key, count) in self.counts {
            buckets[count].push(key);
        }
        buckets
    }
}
