//! Memory Adapter Module
//!
//! The in-memory [`Adapter`] implementation: a lock-protected data map, an
//! optional LRU tracker, an expiry event queue and a background sweeper task,
//! composed behind the full cache contract.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;

use crate::adapter::{Adapter, ProducerResult};
use crate::cache::data::DataMap;
use crate::cache::entry::{expiration_from, expire_at_for, now_millis, Expiration};
use crate::cache::lru::LruTracker;
use crate::cache::stats::{CacheStats, StatsSnapshot};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::sweeper;

/// An expiry change notification consumed by the sweeper.
///
/// Every write that sets or changes an expiry emits exactly one event per
/// affected key; removals emit an already-past timestamp so the sweeper
/// retires its bookkeeping for the key on the next pass.
#[derive(Debug)]
pub(crate) struct ExpireEvent<K> {
    pub(crate) key: K,
    pub(crate) expire_at: u64,
}

// == Memory Adapter ==
/// In-memory cache backend with TTL expiry and optional LRU eviction.
///
/// Construction spawns the background sweeper, so a tokio runtime must be
/// running. Dropping the adapter aborts the sweeper; [`close`](Adapter::close)
/// lets it wind down on its own instead.
#[derive(Debug)]
pub struct MemoryAdapter<K, V> {
    data: Arc<DataMap<K, V>>,
    lru: Option<Arc<LruTracker<K>>>,
    stats: Arc<CacheStats>,
    events: UnboundedSender<ExpireEvent<K>>,
    closed: Arc<AtomicBool>,
    sweeper: JoinHandle<()>,
}

impl<K, V> MemoryAdapter<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates an unbounded adapter with the default sweep interval.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an adapter bounded to `capacity` entries by LRU eviction.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config {
            capacity: Some(capacity),
            ..Config::default()
        })
    }

    /// Creates an adapter from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        let data = Arc::new(DataMap::new());
        let lru = config.capacity.map(|cap| Arc::new(LruTracker::new(cap)));
        let stats = Arc::new(CacheStats::new());
        let closed = Arc::new(AtomicBool::new(false));
        let (events, receiver) = mpsc::unbounded_channel();
        let sweeper = sweeper::spawn_sweeper(
            data.clone(),
            lru.clone(),
            stats.clone(),
            receiver,
            closed.clone(),
            config.sweep_interval,
        );
        Self {
            data,
            lru,
            stats,
            events,
            closed,
            sweeper,
        }
    }

    // == Introspection ==
    /// Returns a point-in-time copy of the performance counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Whether [`close`](Adapter::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    // == Internals ==
    /// Queues an expiry change for the sweeper. A closed cache has no
    /// sweeper any more; the lost event is irrelevant then.
    fn queue_expiry(&self, key: K, expire_at: u64) {
        let _ = self.events.send(ExpireEvent { key, expire_at });
    }

    /// Promotes keys in the LRU order and removes whatever that evicts.
    async fn touch_lru(&self, keys: &[K]) {
        let Some(lru) = &self.lru else {
            return;
        };
        let evicted = lru.touch(keys);
        if !evicted.is_empty() {
            self.stats.record_evictions(evicted.len() as u64);
            self.remove_entries(&evicted).await;
        }
    }

    /// Removes keys from storage and queues their retirement events.
    async fn remove_entries(&self, keys: &[K]) -> Option<V> {
        let (removed, last_value) = self.data.remove_many(keys).await;
        let retired_at = now_millis().saturating_sub(1_000);
        for key in removed {
            self.queue_expiry(key, retired_at);
        }
        last_value
    }

    /// Stat-free live read; promotes the key in the LRU order on a hit.
    async fn lookup(&self, key: &K) -> Option<V> {
        let entry = self.data.get(key).await?;
        if !entry.is_live(now_millis()) {
            return None;
        }
        self.touch_lru(std::slice::from_ref(key)).await;
        Some(entry.value)
    }
}

impl<K, V> Default for MemoryAdapter<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for MemoryAdapter<K, V> {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}

impl<K, V> Adapter<K, V> for MemoryAdapter<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<()> {
        let expire_at = expire_at_for(ttl, now_millis());
        self.data.insert(key.clone(), value, expire_at).await;
        self.queue_expiry(key.clone(), expire_at);
        self.touch_lru(std::slice::from_ref(&key)).await;
        Ok(())
    }

    async fn set_many(&self, entries: Vec<(K, V)>, ttl: Option<Duration>) -> Result<()> {
        let expire_at = expire_at_for(ttl, now_millis());
        let keys: Vec<K> = entries.iter().map(|(key, _)| key.clone()).collect();
        self.data.insert_many(entries, expire_at).await;
        for key in &keys {
            self.queue_expiry(key.clone(), expire_at);
        }
        self.touch_lru(&keys).await;
        Ok(())
    }

    async fn set_if_absent(&self, key: K, value: V, ttl: Option<Duration>) -> Result<bool> {
        if self.lookup(&key).await.is_some() {
            return Ok(false);
        }
        let expire_at = expire_at_for(ttl, now_millis());
        self.data
            .set_if_absent_value(key.clone(), value, expire_at)
            .await;
        self.queue_expiry(key.clone(), expire_at);
        self.touch_lru(std::slice::from_ref(&key)).await;
        Ok(true)
    }

    async fn set_if_absent_with<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<bool>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send,
    {
        if self.lookup(&key).await.is_some() {
            return Ok(false);
        }
        // The producer runs outside any lock; racing writers are resolved by
        // the double-checked store below.
        let Some(value) = producer().await.map_err(CacheError::Producer)? else {
            return Ok(false);
        };
        let expire_at = expire_at_for(ttl, now_millis());
        self.data
            .set_if_absent_value(key.clone(), value, expire_at)
            .await;
        self.queue_expiry(key.clone(), expire_at);
        self.touch_lru(std::slice::from_ref(&key)).await;
        Ok(true)
    }

    async fn set_if_absent_with_lock<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<bool>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send,
    {
        if self.lookup(&key).await.is_some() {
            return Ok(false);
        }
        let expire_at = expire_at_for(ttl, now_millis());
        let stored = self
            .data
            .set_if_absent_with(key.clone(), producer, expire_at)
            .await?;
        if stored.is_none() {
            return Ok(false);
        }
        self.queue_expiry(key.clone(), expire_at);
        self.touch_lru(std::slice::from_ref(&key)).await;
        Ok(true)
    }

    async fn get(&self, key: &K) -> Result<Option<V>> {
        match self.lookup(key).await {
            Some(value) => {
                self.stats.record_hit();
                Ok(Some(value))
            }
            None => {
                self.stats.record_miss();
                Ok(None)
            }
        }
    }

    async fn get_or_set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<Option<V>> {
        if let Some(existing) = self.lookup(&key).await {
            return Ok(Some(existing));
        }
        let expire_at = expire_at_for(ttl, now_millis());
        let stored = self
            .data
            .set_if_absent_value(key.clone(), value, expire_at)
            .await;
        self.queue_expiry(key.clone(), expire_at);
        self.touch_lru(std::slice::from_ref(&key)).await;
        Ok(Some(stored))
    }

    fn get_or_set_with<'a, F, Fut>(
        &'a self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> std::pin::Pin<Box<dyn Future<Output = Result<Option<V>>> + Send + 'a>>
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = ProducerResult<V>> + Send + 'a,
    {
        Box::pin(async move {
            if let Some(existing) = self.lookup(&key).await {
                return Ok(Some(existing));
            }
            let Some(value) = producer().await.map_err(CacheError::Producer)? else {
                return Ok(None);
            };
            let expire_at = expire_at_for(ttl, now_millis());
            let stored = self
                .data
                .set_if_absent_value(key.clone(), value, expire_at)
                .await;
            self.queue_expiry(key.clone(), expire_at);
            self.touch_lru(std::slice::from_ref(&key)).await;
            Ok(Some(stored))
        })
    }

    fn get_or_set_with_lock<'a, F, Fut>(
        &'a self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> std::pin::Pin<Box<dyn Future<Output = Result<Option<V>>> + Send + 'a>>
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = ProducerResult<V>> + Send + 'a,
    {
        Box::pin(async move {
            if let Some(existing) = self.lookup(&key).await {
                return Ok(Some(existing));
            }
            let expire_at = expire_at_for(ttl, now_millis());
            let stored = self
                .data
                .set_if_absent_with(key.clone(), producer, expire_at)
                .await?;
            let Some(value) = stored else {
                return Ok(None);
            };
            self.queue_expiry(key.clone(), expire_at);
            self.touch_lru(std::slice::from_ref(&key)).await;
            Ok(Some(value))
        })
    }

    async fn contains(&self, key: &K) -> Result<bool> {
        Ok(self.lookup(key).await.is_some())
    }

    async fn ttl(&self, key: &K) -> Result<Option<Expiration>> {
        let now = now_millis();
        let Some(entry) = self.data.get(key).await else {
            return Ok(None);
        };
        if !entry.is_live(now) {
            return Ok(None);
        }
        self.touch_lru(std::slice::from_ref(key)).await;
        Ok(Some(expiration_from(entry.expire_at, now)))
    }

    async fn update(&self, key: &K, value: V) -> Result<Option<V>> {
        let old = self.data.update(key, value).await;
        if old.is_some() {
            self.touch_lru(std::slice::from_ref(key)).await;
        }
        Ok(old)
    }

    async fn update_ttl(&self, key: &K, ttl: Option<Duration>) -> Result<Option<Expiration>> {
        let now = now_millis();
        let expire_at = expire_at_for(ttl, now);
        let Some(old_expire_at) = self.data.update_expire(key, expire_at).await else {
            return Ok(None);
        };
        self.queue_expiry(key.clone(), expire_at);
        self.touch_lru(std::slice::from_ref(key)).await;
        Ok(Some(expiration_from(old_expire_at, now)))
    }

    async fn remove(&self, key: K) -> Result<Option<V>> {
        self.remove_many(vec![key]).await
    }

    async fn remove_many(&self, keys: Vec<K>) -> Result<Option<V>> {
        if let Some(lru) = &self.lru {
            lru.remove_many(&keys);
        }
        Ok(self.remove_entries(&keys).await)
    }

    async fn size(&self) -> Result<usize> {
        Ok(self.data.len().await)
    }

    async fn data(&self) -> Result<HashMap<K, V>> {
        Ok(self.data.data().await)
    }

    async fn keys(&self) -> Result<Vec<K>> {
        Ok(self.data.keys().await)
    }

    async fn values(&self) -> Result<Vec<V>> {
        Ok(self.data.values().await)
    }

    async fn clear(&self) -> Result<()> {
        self.data.clear().await;
        if let Some(lru) = &self.lru {
            lru.clear();
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::Release);
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> MemoryAdapter<String, i64> {
        MemoryAdapter::new()
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = adapter();

        cache.set("a".to_string(), 1, None).await.unwrap();
        assert_eq!(cache.get(&"a".to_string()).await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = adapter();
        assert_eq!(cache.get(&"missing".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite_resets_value_and_ttl() {
        let cache = adapter();

        cache
            .set("a".to_string(), 1, Some(Duration::from_millis(50)))
            .await
            .unwrap();
        cache.set("a".to_string(), 2, None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(cache.get(&"a".to_string()).await.unwrap(), Some(2));
        assert_eq!(cache.ttl(&"a".to_string()).await.unwrap(), Some(Expiration::Never));
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_miss() {
        let cache = adapter();

        cache
            .set("a".to_string(), 1, Some(Duration::from_millis(30)))
            .await
            .unwrap();
        assert!(cache.contains(&"a".to_string()).await.unwrap());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(cache.get(&"a".to_string()).await.unwrap(), None);
        assert!(!cache.contains(&"a".to_string()).await.unwrap());
        assert_eq!(cache.size().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_ttl_acts_as_removal() {
        let cache = adapter();

        cache.set("a".to_string(), 1, None).await.unwrap();
        cache
            .set("a".to_string(), 1, Some(Duration::ZERO))
            .await
            .unwrap();

        assert_eq!(cache.get(&"a".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_many() {
        let cache = adapter();

        cache
            .set_many(vec![("a".to_string(), 1), ("b".to_string(), 2)], None)
            .await
            .unwrap();

        assert_eq!(cache.size().await.unwrap(), 2);
        assert_eq!(cache.get(&"b".to_string()).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_set_if_absent_first_writer_wins() {
        let cache = adapter();

        let first = cache
            .set_if_absent("k".to_string(), 1, Some(Duration::from_secs(5)))
            .await
            .unwrap();
        let second = cache
            .set_if_absent("k".to_string(), 2, Some(Duration::from_secs(5)))
            .await
            .unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(cache.get(&"k".to_string()).await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_set_if_absent_overwrites_expired_entry() {
        let cache = adapter();

        cache
            .set("k".to_string(), 1, Some(Duration::from_millis(20)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let added = cache.set_if_absent("k".to_string(), 2, None).await.unwrap();
        assert!(added);
        assert_eq!(cache.get(&"k".to_string()).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_set_if_absent_with_none_producer_is_noop() {
        let cache = adapter();

        let added = cache
            .set_if_absent_with("k".to_string(), || async { Ok(None) }, None)
            .await
            .unwrap();

        assert!(!added);
        assert_eq!(cache.get(&"k".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_if_absent_with_lock_skips_producer_when_present() {
        let cache = adapter();
        cache.set("k".to_string(), 1, None).await.unwrap();

        let added = cache
            .set_if_absent_with_lock(
                "k".to_string(),
                || async { panic!("producer invoked for a present key") },
                None,
            )
            .await
            .unwrap();

        assert!(!added);
    }

    #[tokio::test]
    async fn test_get_or_set_variants() {
        let cache = adapter();

        let v = cache.get_or_set("k".to_string(), 1, None).await.unwrap();
        assert_eq!(v, Some(1));
        let v = cache.get_or_set("k".to_string(), 2, None).await.unwrap();
        assert_eq!(v, Some(1));

        let v = cache
            .get_or_set_with("j".to_string(), || async { Ok(Some(10)) }, None)
            .await
            .unwrap();
        assert_eq!(v, Some(10));

        let v = cache
            .get_or_set_with_lock("j".to_string(), || async { Ok(Some(99)) }, None)
            .await
            .unwrap();
        assert_eq!(v, Some(10));
    }

    #[tokio::test]
    async fn test_get_or_set_with_none_producer() {
        let cache = adapter();

        let v = cache
            .get_or_set_with("k".to_string(), || async { Ok(None) }, None)
            .await
            .unwrap();

        assert_eq!(v, None);
        assert!(!cache.contains(&"k".to_string()).await.unwrap());
    }

    #[tokio::test]
    async fn test_producer_error_leaves_cache_unchanged() {
        let cache = adapter();

        let result = cache
            .get_or_set_with_lock(
                "k".to_string(),
                || async { Err("upstream failed".into()) },
                None,
            )
            .await;

        assert!(result.is_err());
        assert!(!cache.contains(&"k".to_string()).await.unwrap());
    }

    #[tokio::test]
    async fn test_ttl_reporting() {
        let cache = adapter();

        cache.set("forever".to_string(), 1, None).await.unwrap();
        cache
            .set("soon".to_string(), 2, Some(Duration::from_secs(30)))
            .await
            .unwrap();

        assert_eq!(
            cache.ttl(&"forever".to_string()).await.unwrap(),
            Some(Expiration::Never)
        );
        match cache.ttl(&"soon".to_string()).await.unwrap() {
            Some(Expiration::After(remaining)) => {
                assert!(remaining <= Duration::from_secs(30));
                assert!(remaining > Duration::from_secs(29));
            }
            other => panic!("unexpected ttl: {other:?}"),
        }
        assert_eq!(cache.ttl(&"missing".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_preserves_ttl() {
        let cache = adapter();

        cache
            .set("k".to_string(), 1, Some(Duration::from_secs(30)))
            .await
            .unwrap();
        let old = cache.update(&"k".to_string(), 2).await.unwrap();

        assert_eq!(old, Some(1));
        assert_eq!(cache.get(&"k".to_string()).await.unwrap(), Some(2));
        match cache.ttl(&"k".to_string()).await.unwrap() {
            Some(Expiration::After(remaining)) => {
                assert!(remaining > Duration::from_secs(29));
            }
            other => panic!("ttl not preserved: {other:?}"),
        }

        assert_eq!(cache.update(&"missing".to_string(), 3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_ttl() {
        let cache = adapter();

        cache
            .set("k".to_string(), 1, Some(Duration::from_millis(100)))
            .await
            .unwrap();
        let old = cache
            .update_ttl(&"k".to_string(), Some(Duration::from_secs(60)))
            .await
            .unwrap();

        match old {
            Some(Expiration::After(remaining)) => {
                assert!(remaining <= Duration::from_millis(100));
            }
            other => panic!("unexpected previous ttl: {other:?}"),
        }

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.contains(&"k".to_string()).await.unwrap());

        assert_eq!(
            cache.update_ttl(&"missing".to_string(), None).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_remove_returns_value() {
        let cache = adapter();

        cache.set("a".to_string(), 1, None).await.unwrap();
        assert_eq!(cache.remove("a".to_string()).await.unwrap(), Some(1));
        assert_eq!(cache.remove("a".to_string()).await.unwrap(), None);
        assert!(!cache.contains(&"a".to_string()).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_many_returns_last_removed() {
        let cache = adapter();

        cache.set("a".to_string(), 1, None).await.unwrap();
        cache.set("b".to_string(), 2, None).await.unwrap();

        let last = cache
            .remove_many(vec!["a".to_string(), "missing".to_string(), "b".to_string()])
            .await
            .unwrap();

        assert_eq!(last, Some(2));
        assert_eq!(cache.size().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_lru_capacity_evicts_oldest() {
        let cache: MemoryAdapter<String, i64> = MemoryAdapter::with_capacity(2);

        cache.set("a".to_string(), 1, None).await.unwrap();
        cache.set("b".to_string(), 2, None).await.unwrap();
        cache.set("c".to_string(), 3, None).await.unwrap();

        assert_eq!(cache.size().await.unwrap(), 2);
        assert_eq!(cache.get(&"a".to_string()).await.unwrap(), None);
        assert_eq!(cache.get(&"b".to_string()).await.unwrap(), Some(2));
        assert_eq!(cache.get(&"c".to_string()).await.unwrap(), Some(3));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[tokio::test]
    async fn test_lru_read_refreshes_recency() {
        let cache: MemoryAdapter<String, i64> = MemoryAdapter::with_capacity(2);

        cache.set("a".to_string(), 1, None).await.unwrap();
        cache.set("b".to_string(), 2, None).await.unwrap();

        // Reading "a" makes "b" the eviction candidate.
        cache.get(&"a".to_string()).await.unwrap();
        cache.set("c".to_string(), 3, None).await.unwrap();

        assert_eq!(cache.get(&"a".to_string()).await.unwrap(), Some(1));
        assert_eq!(cache.get(&"b".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_stats_track_hits_and_misses() {
        let cache = adapter();

        cache.set("a".to_string(), 1, None).await.unwrap();
        cache.get(&"a".to_string()).await.unwrap();
        cache.get(&"missing".to_string()).await.unwrap();

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache: MemoryAdapter<String, i64> = MemoryAdapter::with_capacity(4);

        cache.set("a".to_string(), 1, None).await.unwrap();
        cache.set("b".to_string(), 2, None).await.unwrap();
        cache.clear().await.unwrap();

        assert_eq!(cache.size().await.unwrap(), 0);
        assert_eq!(cache.keys().await.unwrap(), Vec::<String>::new());

        // A fresh write after clear behaves normally.
        cache.set("c".to_string(), 3, None).await.unwrap();
        assert_eq!(cache.get(&"c".to_string()).await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_close_keeps_operations_working() {
        let cache = adapter();

        cache.set("a".to_string(), 1, None).await.unwrap();
        cache.close().await.unwrap();

        assert!(cache.is_closed());
        assert_eq!(cache.get(&"a".to_string()).await.unwrap(), Some(1));
        cache.set("b".to_string(), 2, None).await.unwrap();
        assert_eq!(cache.get(&"b".to_string()).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_snapshots() {
        let cache = adapter();

        cache.set("a".to_string(), 1, None).await.unwrap();
        cache.set("b".to_string(), 2, None).await.unwrap();

        let data = cache.data().await.unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("a"), Some(&1));

        let mut keys = cache.keys().await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);

        let mut values = cache.values().await.unwrap();
        values.sort();
        assert_eq!(values, vec![1, 2]);
    }
}
