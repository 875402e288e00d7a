//! Tiered cache: local store first, remote store as fallback.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::local::LocalStore;
use super::remote::RemoteStore;
use super::types::FetchStatus;

#[cfg(any(test, feature = "mock"))]
use super::local::MemoryStore;
#[cfg(any(test, feature = "mock"))]
use super::remote::MockRemoteStore;

/// A successfully fetched value, tagged with the tier that resolved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<V> {
    /// Resolved synchronously from the local store.
    Local(V),
    /// Resolved from the remote store after a local miss; the value has
    /// been written through to the local store.
    Remote(V),
}

impl<V> FetchOutcome<V> {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchOutcome::Local(_) => FetchStatus::HitLocal,
            FetchOutcome::Remote(_) => FetchStatus::HitRemote,
        }
    }

    pub fn is_local_hit(&self) -> bool {
        matches!(self, FetchOutcome::Local(_))
    }

    pub fn is_remote_hit(&self) -> bool {
        matches!(self, FetchOutcome::Remote(_))
    }

    pub fn value(&self) -> &V {
        match self {
            FetchOutcome::Local(value) | FetchOutcome::Remote(value) => value,
        }
    }

    pub fn into_value(self) -> V {
        match self {
            FetchOutcome::Local(value) | FetchOutcome::Remote(value) => value,
        }
    }
}

/// Two-tier lookup cache.
///
/// Resolution order: the synchronous local store, then the asynchronous
/// remote store. A value fetched remotely is written through to the local
/// store before being returned, so a repeat fetch for the same identifier
/// resolves locally.
///
/// The cache owns its local store exclusively; the remote store is a
/// read-only collaborator supplied by the embedding application.
pub struct TieredCache<L: LocalStore, R: RemoteStore<Value = L::Value>> {
    local: L,
    remote: R,
}

impl<L: LocalStore, R: RemoteStore<Value = L::Value>> std::fmt::Debug for TieredCache<L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TieredCache").finish_non_exhaustive()
    }
}

impl<L: LocalStore, R: RemoteStore<Value = L::Value>> TieredCache<L, R> {
    pub fn new(local: L, remote: R) -> Self {
        Self { local, remote }
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Fetches the value stored under `identifier`.
    ///
    /// A local hit returns immediately without touching the remote store.
    /// On a local miss the remote store is consulted: its error is
    /// propagated verbatim (and the local store left unchanged), its value
    /// is persisted locally and returned.
    ///
    /// The identifier is treated as an opaque, non-empty key. No retries,
    /// timeouts, or coalescing of concurrent fetches for the same
    /// identifier: overlapping calls for a missing identifier each reach
    /// the remote store and each write through on success.
    pub async fn fetch(&self, identifier: &str) -> Result<L::Value, R::Error> {
        Ok(self.fetch_outcome(identifier).await?.into_value())
    }

    /// Like [`fetch`](Self::fetch), additionally reporting which tier
    /// resolved the value.
    #[instrument(skip(self, identifier), fields(identifier_len = identifier.len()))]
    pub async fn fetch_outcome(
        &self,
        identifier: &str,
    ) -> Result<FetchOutcome<L::Value>, R::Error> {
        debug!("Checking local store");
        if let Some(value) = self.local.fetch(identifier) {
            info!(status = %FetchStatus::HitLocal, "Local store hit");
            return Ok(FetchOutcome::Local(value));
        }

        debug!("Local miss, fetching from remote store");

        match self.remote.fetch(identifier).await {
            Ok(value) => {
                self.local.persist(identifier, value.clone());
                info!(status = %FetchStatus::HitRemote, "Remote fetch resolved, written through");
                Ok(FetchOutcome::Remote(value))
            }
            Err(error) => {
                debug!("Remote fetch failed");
                Err(error)
            }
        }
    }

    /// Writes a value into the local store directly.
    pub fn persist_local(&self, identifier: &str, value: L::Value) {
        self.local.persist(identifier, value);
    }

    /// Returns `true` if the local store currently holds the identifier.
    pub fn contains_local(&self, identifier: &str) -> bool {
        self.local.fetch(identifier).is_some()
    }
}

#[cfg(any(test, feature = "mock"))]
pub type MockTieredCache<V> = TieredCache<MemoryStore<V>, MockRemoteStore<V>>;

#[cfg(any(test, feature = "mock"))]
impl<V> MockTieredCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new_mock() -> Self {
        Self::new(MemoryStore::new(), MockRemoteStore::new())
    }

    pub fn new_mock_with_capacity(capacity: u64) -> Self {
        Self::new(MemoryStore::with_capacity(capacity), MockRemoteStore::new())
    }

    pub fn mock_remote(&self) -> &MockRemoteStore<V> {
        self.remote()
    }
}

/// Shared, cheaply cloneable handle to a [`TieredCache`].
pub struct TieredCacheHandle<L: LocalStore, R: RemoteStore<Value = L::Value>> {
    inner: Arc<TieredCache<L, R>>,
}

impl<L: LocalStore, R: RemoteStore<Value = L::Value>> Clone for TieredCacheHandle<L, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: LocalStore, R: RemoteStore<Value = L::Value>> TieredCacheHandle<L, R> {
    pub fn new(cache: TieredCache<L, R>) -> Self {
        Self {
            inner: Arc::new(cache),
        }
    }

    pub async fn fetch(&self, identifier: &str) -> Result<L::Value, R::Error> {
        self.inner.fetch(identifier).await
    }

    pub async fn fetch_outcome(
        &self,
        identifier: &str,
    ) -> Result<FetchOutcome<L::Value>, R::Error> {
        self.inner.fetch_outcome(identifier).await
    }

    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<L: LocalStore, R: RemoteStore<Value = L::Value>> std::fmt::Debug for TieredCacheHandle<L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TieredCacheHandle")
            .field("strong_count", &self.strong_count())
            .finish()
    }
}
