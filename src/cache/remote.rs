//! Remote store abstraction and the mock used in tests.

use thiserror::Error;

/// Slower, asynchronous, externally-owned source of truth.
///
/// The returned future resolves exactly once with either the value or the
/// collaborator's own error. The cache treats the store as read-only and
/// never retries; any retry/backoff/timeout policy belongs to the caller.
pub trait RemoteStore: Send + Sync {
    /// The stored value type.
    type Value: Send;

    /// The collaborator's error type, forwarded verbatim to callers.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Looks up `identifier` at the remote source.
    fn fetch(
        &self,
        identifier: &str,
    ) -> impl std::future::Future<Output = Result<Self::Value, Self::Error>> + Send;
}

/// Errors produced by [`MockRemoteStore`].
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MockRemoteError {
    /// The identifier has no remote entry.
    #[error("no remote entry for identifier '{identifier}'")]
    NotFound { identifier: String },

    /// The remote source was configured to fail for this identifier.
    #[error("remote source unavailable: {reason}")]
    Unavailable { reason: String },
}

/// In-memory stand-in for a remote source.
///
/// Seed successes with [`insert`](Self::insert), inject failures with
/// [`set_unavailable`](Self::set_unavailable); unseeded identifiers report
/// [`MockRemoteError::NotFound`]. A fetch counter lets tests assert how
/// often the remote tier was consulted.
#[cfg(any(test, feature = "mock"))]
pub struct MockRemoteStore<V> {
    entries: std::sync::RwLock<std::collections::HashMap<String, V>>,
    outages: std::sync::RwLock<std::collections::HashMap<String, String>>,
    fetches: std::sync::atomic::AtomicU64,
}

#[cfg(any(test, feature = "mock"))]
impl<V> MockRemoteStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a successful response for `identifier`.
    pub fn insert(&self, identifier: &str, value: V) {
        self.entries
            .write()
            .expect("lock poisoned")
            .insert(identifier.to_string(), value);
    }

    /// Makes fetches for `identifier` fail with [`MockRemoteError::Unavailable`].
    pub fn set_unavailable(&self, identifier: &str, reason: &str) {
        self.outages
            .write()
            .expect("lock poisoned")
            .insert(identifier.to_string(), reason.to_string());
    }

    /// Number of `fetch` calls made against this store so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

#[cfg(any(test, feature = "mock"))]
impl<V> Default for MockRemoteStore<V> {
    fn default() -> Self {
        Self {
            entries: std::sync::RwLock::new(std::collections::HashMap::new()),
            outages: std::sync::RwLock::new(std::collections::HashMap::new()),
            fetches: std::sync::atomic::AtomicU64::new(0),
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl<V> RemoteStore for MockRemoteStore<V>
where
    V: Clone + Send + Sync,
{
    type Value = V;
    type Error = MockRemoteError;

    async fn fetch(&self, identifier: &str) -> Result<V, MockRemoteError> {
        self.fetches
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if let Some(reason) = self.outages.read().expect("lock poisoned").get(identifier) {
            return Err(MockRemoteError::Unavailable {
                reason: reason.clone(),
            });
        }

        self.entries
            .read()
            .expect("lock poisoned")
            .get(identifier)
            .cloned()
            .ok_or_else(|| MockRemoteError::NotFound {
                identifier: identifier.to_string(),
            })
    }
}

#[cfg(any(test, feature = "mock"))]
impl<V> std::fmt::Debug for MockRemoteStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockRemoteStore")
            .field("entries", &self.len())
            .field("fetches", &self.fetch_count())
            .finish()
    }
}
