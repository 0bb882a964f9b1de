//! Data Map Module
//!
//! The authoritative store of live entries. Every higher-level guarantee
//! rests on the compound operations here being atomic under the map's
//! read/write lock.
//!
//! The map itself never checks liveness on plain reads; callers decide what
//! an expired entry means for them. Snapshot accessors are the exception:
//! they only ever report live entries.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use tokio::sync::RwLock;

use crate::cache::entry::{now_millis, CacheEntry};
use crate::error::{BoxError, CacheError, Result};

// == Data Map ==
/// Primary key/value storage with internal locking.
#[derive(Debug)]
pub(crate) struct DataMap<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> DataMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // == Insert ==
    /// Unconditionally stores `value` under `key` with the given expiry.
    pub(crate) async fn insert(&self, key: K, value: V, expire_at: u64) {
        self.entries
            .write()
            .await
            .insert(key, CacheEntry { value, expire_at });
    }

    // == Insert Many ==
    /// Bulk insert; all entries share one expiry timestamp.
    pub(crate) async fn insert_many(&self, entries: Vec<(K, V)>, expire_at: u64) {
        let mut guard = self.entries.write().await;
        for (key, value) in entries {
            guard.insert(key, CacheEntry { value, expire_at });
        }
    }

    // == Get ==
    /// Returns a copy of the stored entry. Liveness is the caller's concern.
    pub(crate) async fn get(&self, key: &K) -> Option<CacheEntry<V>> {
        self.entries.read().await.get(key).cloned()
    }

    // == Set If Absent (value) ==
    /// Stores `value` unless a live entry already exists, under one write
    /// lock. Returns the value that ends up associated with the key, which
    /// is the existing one when the double-check finds it live.
    pub(crate) async fn set_if_absent_value(&self, key: K, value: V, expire_at: u64) -> V {
        let mut guard = self.entries.write().await;
        if let Some(existing) = guard.get(&key) {
            if existing.is_live(now_millis()) {
                return existing.value.clone();
            }
        }
        guard.insert(
            key,
            CacheEntry {
                value: value.clone(),
                expire_at,
            },
        );
        value
    }

    // == Set If Absent (producer) ==
    /// Like [`set_if_absent_value`](Self::set_if_absent_value), but the value
    /// comes from a producer that runs **while the write lock is held**,
    /// serializing concurrent producers for the same map.
    ///
    /// A producer returning `Ok(None)` is a no-op: nothing is stored and
    /// `Ok(None)` is returned. Producer errors propagate without touching the
    /// map. The producer must not call back into this cache.
    pub(crate) async fn set_if_absent_with<F, Fut>(
        &self,
        key: K,
        producer: F,
        expire_at: u64,
    ) -> Result<Option<V>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = std::result::Result<Option<V>, BoxError>> + Send,
    {
        let mut guard = self.entries.write().await;
        if let Some(existing) = guard.get(&key) {
            if existing.is_live(now_millis()) {
                return Ok(Some(existing.value.clone()));
            }
        }
        match producer().await.map_err(CacheError::Producer)? {
            Some(value) => {
                guard.insert(
                    key,
                    CacheEntry {
                        value: value.clone(),
                        expire_at,
                    },
                );
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    // == Update ==
    /// Replaces the value of an existing entry, preserving its expiry.
    /// Returns the old value, or `None` (and does nothing) if absent.
    pub(crate) async fn update(&self, key: &K, value: V) -> Option<V> {
        let mut guard = self.entries.write().await;
        guard
            .get_mut(key)
            .map(|entry| std::mem::replace(&mut entry.value, value))
    }

    // == Update Expire ==
    /// Replaces the expiry of an existing entry, preserving its value.
    /// Returns the previous absolute expiry, or `None` if absent.
    pub(crate) async fn update_expire(&self, key: &K, expire_at: u64) -> Option<u64> {
        let mut guard = self.entries.write().await;
        guard
            .get_mut(key)
            .map(|entry| std::mem::replace(&mut entry.expire_at, expire_at))
    }

    // == Remove Many ==
    /// Atomically removes the given keys. Returns the keys that were actually
    /// present and the value of the last one removed.
    pub(crate) async fn remove_many(&self, keys: &[K]) -> (Vec<K>, Option<V>) {
        let mut guard = self.entries.write().await;
        let mut removed = Vec::new();
        let mut last_value = None;
        for key in keys {
            if let Some(entry) = guard.remove(key) {
                last_value = Some(entry.value);
                removed.push(key.clone());
            }
        }
        (removed, last_value)
    }

    // == Delete Expired ==
    /// Sweeper-side removal: deletes the entry only if it is no longer live
    /// at `now`. A key rewritten with a fresher expiry after its old bucket
    /// was built survives the sweep of that bucket.
    pub(crate) async fn delete_expired(&self, key: &K, now: u64) -> bool {
        let mut guard = self.entries.write().await;
        match guard.get(key) {
            Some(entry) if !entry.is_live(now) => {
                guard.remove(key);
                true
            }
            _ => false,
        }
    }

    // == Snapshots ==
    /// Returns a copy of all live key/value pairs.
    pub(crate) async fn data(&self) -> HashMap<K, V> {
        let guard = self.entries.read().await;
        let now = now_millis();
        guard
            .iter()
            .filter(|(_, entry)| entry.is_live(now))
            .map(|(k, entry)| (k.clone(), entry.value.clone()))
            .collect()
    }

    /// Returns all live keys.
    pub(crate) async fn keys(&self) -> Vec<K> {
        let guard = self.entries.read().await;
        let now = now_millis();
        guard
            .iter()
            .filter(|(_, entry)| entry.is_live(now))
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Returns all live values.
    pub(crate) async fn values(&self) -> Vec<V> {
        let guard = self.entries.read().await;
        let now = now_millis();
        guard
            .values()
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
            .collect()
    }

    /// Returns the number of live entries.
    pub(crate) async fn len(&self) -> usize {
        let guard = self.entries.read().await;
        let now = now_millis();
        guard.values().filter(|entry| entry.is_live(now)).count()
    }

    // == Clear ==
    /// Wipes all entries, live or not.
    pub(crate) async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
