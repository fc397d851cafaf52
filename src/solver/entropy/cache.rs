//! Per-turn entropy memoization
//!
//! The cache is keyed by combination value and is only valid for one
//! reference population. The owner must clear it whenever the reference
//! changes.

use super::calculator::calculate_entropy;
use crate::core::Combination;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Memoized entropies for a fixed reference population
#[derive(Debug, Default)]
pub struct EntropyCache {
    entries: FxHashMap<Combination, f64>,
}

impl EntropyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every cached value
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a cached entropy
    #[inline]
    #[must_use]
    pub fn get(&self, candidate: &Combination) -> Option<f64> {
        self.entries.get(candidate).copied()
    }

    /// Compute entropies for every uncached candidate in parallel
    ///
    /// The cache is only read while workers run; results are inserted
    /// afterwards on the calling thread. Returns the number of new entries.
    pub fn fill<'a, I>(&mut self, candidates: I, reference: &[Combination]) -> usize
    where
        I: IntoIterator<Item = &'a Combination>,
    {
        let missing: FxHashSet<&Combination> = candidates
            .into_iter()
            .filter(|candidate| !self.entries.contains_key(*candidate))
            .collect();

        let computed: Vec<(Combination, f64)> = missing
            .into_par_iter()
            .map(|candidate| (candidate.clone(), calculate_entropy(candidate, reference)))
            .collect();

        let added = computed.len();
        self.entries.extend(computed);
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_keeps_cached_values() {
        let reference = Combination::enumerate(4, 3);
        let candidate = Combination::from([0, 1, 2]);
        let mut cache = EntropyCache::new();

        assert!(cache.get(&candidate).is_none());
        assert_eq!(cache.fill([&candidate], &reference), 1);
        let first = cache.get(&candidate).unwrap();

        // A different reference is ignored on a hit: the cache is per reference
        assert_eq!(cache.fill([&candidate], &[]), 0);
        let second = cache.get(&candidate).unwrap();
        assert!((first - second).abs() < f64::EPSILON);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_resets_entries() {
        let reference = Combination::enumerate(3, 3);
        let mut cache = EntropyCache::new();
        cache.fill([&reference[5]], &reference);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(&reference[5]).is_none());
    }

    #[test]
    fn fill_matches_sequential_computation() {
        let reference = Combination::enumerate(4, 3);
        let candidates: Vec<Combination> = reference.iter().take(20).cloned().collect();
        let mut cache = EntropyCache::new();

        let added = cache.fill(&candidates, &reference);
        assert_eq!(added, 20);

        for candidate in &candidates {
            let expected = calculate_entropy(candidate, &reference);
            let cached = cache.get(candidate).unwrap();
            assert!((expected - cached).abs() < 1e-12);
        }
    }

    #[test]
    fn fill_skips_duplicates_and_cached() {
        let reference = Combination::enumerate(3, 3);
        let a = Combination::from([0, 1, 2]);
        let b = Combination::from([2, 2, 2]);
        let mut cache = EntropyCache::new();

        assert_eq!(cache.fill([&a, &a, &b, &a], &reference), 2);
        assert_eq!(cache.fill([&a, &b], &reference), 0);
        assert_eq!(cache.len(), 2);
    }
}
