//! Cache Facade Module
//!
//! The user-facing cache handle. `Cache` composes any [`Adapter`] behind the
//! full public contract; the default adapter is the in-memory one.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::marker::PhantomData;
use std::time::Duration;

use crate::adapter::{Adapter, ProducerResult};
use crate::cache::entry::Expiration;
use crate::cache::memory::MemoryAdapter;
use crate::cache::stats::StatsSnapshot;
use crate::config::Config;
use crate::error::Result;

// == Cache ==
/// A concurrent key/value cache with TTL expiry and optional LRU eviction.
///
/// Cheaply shareable behind an `Arc`; all operations take `&self`.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use hotcache::Cache;
///
/// # async fn demo() -> hotcache::Result<()> {
/// let cache: Cache<String, i64> = Cache::new();
/// cache.set("visits".to_string(), 1, Some(Duration::from_secs(60))).await?;
/// assert_eq!(cache.get(&"visits".to_string()).await?, Some(1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cache<K, V, A = MemoryAdapter<K, V>> {
    adapter: A,
    _types: PhantomData<fn(K) -> V>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates an unbounded in-memory cache.
    ///
    /// Must be called within a tokio runtime; construction spawns the
    /// background expiry sweeper.
    pub fn new() -> Self {
        Self::with_adapter(MemoryAdapter::new())
    }

    /// Creates an in-memory cache bounded to `capacity` entries by LRU
    /// eviction.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_adapter(MemoryAdapter::with_capacity(capacity))
    }

    /// Creates an in-memory cache from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self::with_adapter(MemoryAdapter::with_config(config))
    }

    // == Memory Adapter Extras ==
    /// Returns a point-in-time copy of the performance counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.adapter.stats()
    }

    /// Whether [`close`](Cache::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.adapter.is_closed()
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, A: Adapter<K, V>> Cache<K, V, A> {
    /// Wraps an alternate adapter implementation behind the cache contract.
    pub fn with_adapter(adapter: A) -> Self {
        Self {
            adapter,
            _types: PhantomData,
        }
    }

    /// Returns the underlying adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    // == Writes ==
    /// Stores `value` under `key`, expiring after `ttl`
    /// (`None` = never expires, zero = remove).
    pub async fn set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<()> {
        self.adapter.set(key, value, ttl).await
    }

    /// Bulk store; every entry shares the same TTL.
    pub async fn set_many(&self, entries: Vec<(K, V)>, ttl: Option<Duration>) -> Result<()> {
        self.adapter.set_many(entries, ttl).await
    }

    /// Stores `value` only if `key` is absent or expired.
    /// Returns whether the write happened.
    pub async fn set_if_absent(&self, key: K, value: V, ttl: Option<Duration>) -> Result<bool> {
        self.adapter.set_if_absent(key, value, ttl).await
    }

    /// Like [`set_if_absent`](Cache::set_if_absent) with a produced value;
    /// the producer runs outside the cache's write lock.
    pub async fn set_if_absent_with<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<bool>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send,
    {
        self.adapter.set_if_absent_with(key, producer, ttl).await
    }

    /// Like [`set_if_absent_with`](Cache::set_if_absent_with), but the
    /// producer runs inside the write lock, serializing concurrent producers.
    pub async fn set_if_absent_with_lock<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<bool>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send,
    {
        self.adapter.set_if_absent_with_lock(key, producer, ttl).await
    }

    // == Reads ==
    /// Returns the value for `key`, or `None` when absent or expired.
    pub async fn get(&self, key: &K) -> Result<Option<V>> {
        self.adapter.get(key).await
    }

    /// Returns the value for `key`, storing `value` first on a miss.
    pub async fn get_or_set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<Option<V>> {
        self.adapter.get_or_set(key, value, ttl).await
    }

    /// Read-through variant of [`get`](Cache::get); the producer runs outside
    /// the write lock.
    pub async fn get_or_set_with<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<Option<V>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send,
    {
        self.adapter.get_or_set_with(key, producer, ttl).await
    }

    /// Like [`get_or_set_with`](Cache::get_or_set_with), but the producer runs
    /// inside the write lock: N concurrent callers invoke it exactly once and
    /// all observe the same value.
    pub async fn get_or_set_with_lock<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<Option<V>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send,
    {
        self.adapter.get_or_set_with_lock(key, producer, ttl).await
    }

    /// Live-only existence check.
    pub async fn contains(&self, key: &K) -> Result<bool> {
        self.adapter.contains(key).await
    }

    /// Remaining lifetime of `key`: `None` when absent or expired.
    pub async fn ttl(&self, key: &K) -> Result<Option<Expiration>> {
        self.adapter.ttl(key).await
    }

    // == Updates ==
    /// Replaces the value of `key` without touching its expiry.
    /// Returns the old value, or `None` (doing nothing) when absent.
    pub async fn update(&self, key: &K, value: V) -> Result<Option<V>> {
        self.adapter.update(key, value).await
    }

    /// Replaces the expiry of `key` without touching its value.
    /// Returns the previous remaining lifetime, or `None` when absent.
    pub async fn update_ttl(&self, key: &K, ttl: Option<Duration>) -> Result<Option<Expiration>> {
        self.adapter.update_ttl(key, ttl).await
    }

    // == Removal ==
    /// Removes `key`, returning its value if it was present.
    pub async fn remove(&self, key: K) -> Result<Option<V>> {
        self.adapter.remove(key).await
    }

    /// Removes several keys, returning the value of the last one removed.
    pub async fn remove_many(&self, keys: Vec<K>) -> Result<Option<V>> {
        self.adapter.remove_many(keys).await
    }

    // == Snapshots ==
    /// Number of live entries.
    pub async fn size(&self) -> Result<usize> {
        self.adapter.size().await
    }

    /// Copy of all live key/value pairs.
    pub async fn data(&self) -> Result<HashMap<K, V>> {
        self.adapter.data().await
    }

    /// All live keys.
    pub async fn keys(&self) -> Result<Vec<K>> {
        self.adapter.keys().await
    }

    /// All live values.
    pub async fn values(&self) -> Result<Vec<V>> {
        self.adapter.values().await
    }

    // == Lifecycle ==
    /// Wipes all entries.
    pub async fn clear(&self) -> Result<()> {
        self.adapter.clear().await
    }

    /// Shuts the cache down; the sweeper exits on its next tick and
    /// subsequent operations still succeed.
    pub async fn close(&self) -> Result<()> {
        self.adapter.close().await
    }
}
