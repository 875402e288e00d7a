//! Strata: a two-tier lookup cache.
//!
//! A [`TieredCache`] resolves an identifier against a fast, synchronous
//! local store first and falls back to a slower, asynchronous remote store
//! on a miss. A value fetched remotely is written through to the local
//! store before being returned, so repeat fetches resolve locally.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`TieredCache`], [`TieredCacheHandle`] - The cache and a shared handle
//! - [`FetchOutcome`], [`FetchStatus`] - Which tier resolved a fetch
//!
//! ## Store Abstractions
//! - [`LocalStore`] - Synchronous lookup/persist, no error channel
//! - [`RemoteStore`] - Asynchronous lookup, errors forwarded verbatim
//! - [`MemoryStore`] - Bounded in-memory `LocalStore`
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `STRATA_*` environment overrides
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.
//!
//! # Example
//!
//! ```no_run
//! use strata::{MemoryStore, RemoteStore, TieredCache};
//!
//! struct UserApi;
//!
//! impl RemoteStore for UserApi {
//!     type Value = String;
//!     type Error = std::io::Error;
//!
//!     async fn fetch(&self, identifier: &str) -> Result<String, std::io::Error> {
//!         // ... call out to the source of truth ...
//!         # let _ = identifier;
//!         # unimplemented!()
//!     }
//! }
//!
//! # async fn demo() {
//! let cache = TieredCache::new(MemoryStore::new(), UserApi);
//! match cache.fetch("user:ada").await {
//!     Ok(user) => println!("fetched: {user}"),
//!     Err(e) => println!("remote fetch failed: {e}"),
//! }
//! # }
//! ```

pub mod cache;
pub mod config;

pub use cache::{FetchOutcome, FetchStatus, TieredCache, TieredCacheHandle};
pub use cache::{LocalStore, MemoryStore, RemoteStore};

#[cfg(any(test, feature = "mock"))]
pub use cache::{MockRemoteError, MockRemoteStore, MockTieredCache};

pub use config::{Config, ConfigError};
