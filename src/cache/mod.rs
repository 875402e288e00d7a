//! Local store, remote store, and the tiered cache composing them.

pub mod local;
pub mod remote;
pub mod tiered;
pub mod types;

#[cfg(test)]
mod tiered_tests;

pub use local::{LocalStore, MemoryStore};
#[cfg(any(test, feature = "mock"))]
pub use remote::{MockRemoteError, MockRemoteStore};
pub use remote::RemoteStore;

#[cfg(any(test, feature = "mock"))]
pub use tiered::MockTieredCache;
pub use tiered::{FetchOutcome, TieredCache, TieredCacheHandle};

pub use types::FetchStatus;
