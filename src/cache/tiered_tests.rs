use super::local::LocalStore;
use super::remote::MockRemoteError;
use super::tiered::{FetchOutcome, MockTieredCache, TieredCache, TieredCacheHandle};
use super::types::FetchStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    name: String,
}

impl User {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[test]
fn test_fetch_outcome_accessors() {
    let local = FetchOutcome::Local(User::named("Ada"));
    assert!(local.is_local_hit());
    assert!(!local.is_remote_hit());
    assert_eq!(local.status(), FetchStatus::HitLocal);
    assert_eq!(local.value().name, "Ada");
    assert_eq!(local.into_value(), User::named("Ada"));

    let remote = FetchOutcome::Remote(User::named("Grace"));
    assert!(!remote.is_local_hit());
    assert!(remote.is_remote_hit());
    assert_eq!(remote.status(), FetchStatus::HitRemote);
    assert_eq!(remote.into_value(), User::named("Grace"));
}

#[tokio::test]
async fn test_local_hit_skips_remote() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();

    cache.persist_local("u2", User::named("Grace"));

    let outcome = cache
        .fetch_outcome("u2")
        .await
        .expect("fetch should succeed");

    assert!(outcome.is_local_hit());
    assert_eq!(outcome.value(), &User::named("Grace"));
    assert_eq!(cache.mock_remote().fetch_count(), 0);
}

#[tokio::test]
async fn test_local_miss_resolves_remotely_and_writes_through() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();
    cache.mock_remote().insert("u1", User::named("Ada"));

    assert!(!cache.contains_local("u1"));

    let outcome = cache
        .fetch_outcome("u1")
        .await
        .expect("fetch should succeed");

    assert!(outcome.is_remote_hit());
    assert_eq!(outcome.status(), FetchStatus::HitRemote);
    assert_eq!(outcome.value(), &User::named("Ada"));

    // Write-through: the local store now resolves the identifier itself.
    assert!(cache.contains_local("u1"));
    assert_eq!(cache.local().fetch("u1"), Some(User::named("Ada")));
}

#[tokio::test]
async fn test_remote_failure_propagates_and_leaves_local_untouched() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();

    let err = cache
        .fetch("u3")
        .await
        .expect_err("fetch should fail for unknown identifier");

    assert_eq!(
        err,
        MockRemoteError::NotFound {
            identifier: "u3".to_string(),
        }
    );
    assert!(!cache.contains_local("u3"));
    cache.local().run_pending_tasks();
    assert!(cache.local().is_empty());
}

#[tokio::test]
async fn test_remote_unavailable_propagates() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();
    cache.mock_remote().insert("u1", User::named("Ada"));
    cache.mock_remote().set_unavailable("u1", "connection reset");

    let err = cache.fetch("u1").await.expect_err("fetch should fail");

    assert!(matches!(err, MockRemoteError::Unavailable { .. }));
    assert!(err.to_string().contains("connection reset"));
    assert!(!cache.contains_local("u1"));
}

#[tokio::test]
async fn test_second_fetch_resolves_locally() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();
    cache.mock_remote().insert("u1", User::named("Ada"));

    let first = cache.fetch("u1").await.expect("first fetch");
    assert_eq!(first, User::named("Ada"));
    assert_eq!(cache.mock_remote().fetch_count(), 1);

    let second = cache.fetch_outcome("u1").await.expect("second fetch");
    assert!(second.is_local_hit());
    assert_eq!(second.into_value(), User::named("Ada"));

    // The remote store was not consulted again.
    assert_eq!(cache.mock_remote().fetch_count(), 1);
}

#[tokio::test]
async fn test_failed_fetch_retries_remote_on_next_call() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();

    cache.fetch("u1").await.expect_err("should miss remotely");
    assert_eq!(cache.mock_remote().fetch_count(), 1);

    // Nothing was cached, so the next fetch goes remote again.
    cache.mock_remote().insert("u1", User::named("Ada"));
    let value = cache.fetch("u1").await.expect("should now resolve");
    assert_eq!(value, User::named("Ada"));
    assert_eq!(cache.mock_remote().fetch_count(), 2);
}

#[tokio::test]
async fn test_fetch_returns_plain_value() {
    let cache: MockTieredCache<String> = TieredCache::new_mock();
    cache.mock_remote().insert("greeting", "hello".to_string());

    let value = cache.fetch("greeting").await.expect("fetch");
    assert_eq!(value, "hello");
}

#[tokio::test]
async fn test_mock_cache_with_capacity() {
    let cache: MockTieredCache<String> = TieredCache::new_mock_with_capacity(100);
    assert!(cache.local().is_empty());
}

#[tokio::test]
async fn test_tiered_cache_handle_fetch() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();
    cache.mock_remote().insert("u1", User::named("Ada"));

    let handle = TieredCacheHandle::new(cache);

    let value = handle.fetch("u1").await.expect("fetch through handle");
    assert_eq!(value, User::named("Ada"));

    let outcome = handle.fetch_outcome("u1").await.expect("second fetch");
    assert!(outcome.is_local_hit());
}

#[tokio::test]
async fn test_tiered_cache_handle_clone() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();
    let handle = TieredCacheHandle::new(cache);

    assert_eq!(handle.strong_count(), 1);

    let clone = handle.clone();
    assert_eq!(handle.strong_count(), 2);
    assert_eq!(clone.strong_count(), 2);
}

#[tokio::test]
async fn test_tiered_cache_handle_debug() {
    let cache: MockTieredCache<User> = TieredCache::new_mock();
    let handle = TieredCacheHandle::new(cache);

    let debug_str = format!("{:?}", handle);
    assert!(debug_str.contains("TieredCacheHandle"));
    assert!(debug_str.contains("strong_count"));
}
