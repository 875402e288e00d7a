//! Local store abstraction and the in-memory implementation.
//!
//! The local tier is synchronous and has no error channel: a lookup either
//! yields a value or it doesn't, and a persist always succeeds from the
//! caller's point of view.

use moka::sync::Cache;

use crate::config::Config;

/// Fast, synchronous key-value store consulted before the remote tier.
///
/// Implementations own their storage and may evict entries at will; the
/// tiered cache makes no assumption beyond "persist then fetch usually
/// returns the value". The store is mutated only by the cache's fetch path.
pub trait LocalStore: Send + Sync {
    /// The stored value type.
    type Value: Clone + Send + Sync;

    /// Returns the value stored under `identifier`, if any.
    fn fetch(&self, identifier: &str) -> Option<Self::Value>;

    /// Stores `value` under `identifier`, overwriting any existing entry.
    fn persist(&self, identifier: &str, value: Self::Value);
}

/// In-memory local store keyed by identifier.
///
/// Backed by a bounded `moka` cache; when the capacity is exceeded the
/// least-recently-used entries are evicted. The tiered cache contract does
/// not depend on any particular eviction behavior.
pub struct MemoryStore<V> {
    entries: Cache<String, V>,
}

impl<V> MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    const DEFAULT_CAPACITY: u64 = 10_000;

    /// Creates a store with the default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a store with a max entry capacity (LRU eviction).
    #[inline]
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Creates a store sized from [`Config::local_capacity`].
    #[inline]
    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.local_capacity)
    }

    /// Removes an entry, returning the stored value if present.
    #[inline]
    pub fn remove(&self, identifier: &str) -> Option<V> {
        self.entries.remove(identifier)
    }

    /// Returns `true` if the store contains the given identifier.
    #[inline]
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Returns `true` if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    /// Clears all entries.
    #[inline]
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Runs any pending maintenance tasks in the underlying cache.
    ///
    /// `len` and `is_empty` reflect recent inserts/removals only after
    /// maintenance has run.
    #[inline]
    pub fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks();
    }

    /// Returns an iterator over currently stored identifiers.
    pub fn identifiers(&self) -> impl Iterator<Item = String> {
        self.entries.iter().map(|(k, _)| k.as_ref().clone())
    }
}

impl<V> LocalStore for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Value = V;

    #[inline]
    fn fetch(&self, identifier: &str) -> Option<V> {
        self.entries.get(identifier)
    }

    #[inline]
    fn persist(&self, identifier: &str, value: V) {
        self.entries.insert(identifier.to_string(), value);
    }
}

impl<V> Default for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for MemoryStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
