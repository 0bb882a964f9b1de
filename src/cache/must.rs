//! Panicking Convenience Variants
//!
//! `must_*` counterparts of the fallible cache operations for call sites
//! that have already established the operation cannot fail (for example,
//! reads with no producer involved). Each one panics on error instead of
//! returning it.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use crate::adapter::{Adapter, ProducerResult};
use crate::cache::entry::Expiration;
use crate::cache::handle::Cache;

impl<K, V, A: Adapter<K, V>> Cache<K, V, A> {
    /// Like [`get`](Cache::get), but panics on error.
    pub async fn must_get(&self, key: &K) -> Option<V> {
        self.get(key).await.expect("cache get failed")
    }

    /// Like [`get_or_set`](Cache::get_or_set), but panics on error.
    pub async fn must_get_or_set(&self, key: K, value: V, ttl: Option<Duration>) -> Option<V> {
        self.get_or_set(key, value, ttl)
            .await
            .expect("cache get_or_set failed")
    }

    /// Like [`get_or_set_with`](Cache::get_or_set_with), but panics on error.
    pub async fn must_get_or_set_with<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Option<V>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send,
    {
        self.get_or_set_with(key, producer, ttl)
            .await
            .expect("cache get_or_set_with failed")
    }

    /// Like [`get_or_set_with_lock`](Cache::get_or_set_with_lock), but panics
    /// on error.
    pub async fn must_get_or_set_with_lock<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Option<V>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send,
    {
        self.get_or_set_with_lock(key, producer, ttl)
            .await
            .expect("cache get_or_set_with_lock failed")
    }

    /// Like [`contains`](Cache::contains), but panics on error.
    pub async fn must_contains(&self, key: &K) -> bool {
        self.contains(key).await.expect("cache contains failed")
    }

    /// Like [`ttl`](Cache::ttl), but panics on error.
    pub async fn must_ttl(&self, key: &K) -> Option<Expiration> {
        self.ttl(key).await.expect("cache ttl failed")
    }

    /// Like [`size`](Cache::size), but panics on error.
    pub async fn must_size(&self) -> usize {
        self.size().await.expect("cache size failed")
    }

    /// Like [`data`](Cache::data), but panics on error.
    pub async fn must_data(&self) -> HashMap<K, V> {
        self.data().await.expect("cache data failed")
    }

    /// Like [`keys`](Cache::keys), but panics on error.
    pub async fn must_keys(&self) -> Vec<K> {
        self.keys().await.expect("cache keys failed")
    }

    /// Like [`values`](Cache::values), but panics on error.
    pub async fn must_values(&self) -> Vec<V> {
        self.values().await.expect("cache values failed")
    }
}
