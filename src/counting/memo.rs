use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Memoization table that only ever grows
///
/// Entries are pure functions of their keys, so the table can be dropped and
/// rebuilt at any time without changing results.
#[derive(Debug, Clone)]
pub struct MemoTable<K, V> {
    entries: HashMap<K, V>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl<K, V> Default for MemoTable<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }
}

impl<K: Eq + Hash, V> MemoTable<K, V> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a resolved entry, recording a hit or a miss
    pub fn lookup(&mut self, key: &K) -> Option<&V> {
        let found = self.entries.get(key);
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Read a resolved entry without touching statistics
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Store a freshly computed entry
    ///
    /// A key is resolved once; storing it again keeps the first value.
    pub fn store(&mut self, key: K, value: V) -> &V {
        self.entries.entry(key).or_insert(value)
    }

    /// Retrieve cached result or compute and store new one
    ///
    /// Uses the provided closure only when the key is not already cached.
    pub fn get_or_compute<F>(&mut self, key: K, compute_fn: F) -> &V
    where
        F: FnOnce() -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(compute_fn())
            }
        }
    }

    /// Whether the key has been resolved, without touching statistics
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of resolved entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry and reset statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}
