//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.
//!
//! The tracker only orders keys; it never owns values. Evicted keys are
//! returned to the caller, which performs the actual removal from storage.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use parking_lot::Mutex;

// == LRU Tracker ==
/// Tracks access order for LRU eviction with a capacity bound.
///
/// Keys carry a monotonically increasing sequence number:
/// - Largest sequence = most recently used
/// - Smallest sequence = least recently used (next eviction candidate)
#[derive(Debug)]
pub(crate) struct LruTracker<K> {
    capacity: usize,
    inner: Mutex<LruInner<K>>,
}

#[derive(Debug)]
struct LruInner<K> {
    /// Last assigned sequence number
    seq: u64,
    /// Sequence number -> key, ordered oldest first
    order: BTreeMap<u64, K>,
    /// Key -> its current sequence number
    index: HashMap<K, u64>,
}

impl<K: Eq + Hash + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new tracker bounded to `capacity` keys.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(LruInner {
                seq: 0,
                order: BTreeMap::new(),
                index: HashMap::new(),
            }),
        }
    }

    // == Touch ==
    /// Marks keys as recently used, then evicts while over capacity.
    ///
    /// A key that is already the most recent is left alone. Touching is the
    /// only way the tracker grows; evicted keys are returned oldest-first and
    /// it is the caller's job to drop them from storage.
    pub(crate) fn touch(&self, keys: &[K]) -> Vec<K> {
        let mut inner = self.inner.lock();
        for key in keys {
            if let Some(&seq) = inner.index.get(key) {
                if seq == inner.seq {
                    continue;
                }
                inner.order.remove(&seq);
            }
            inner.seq += 1;
            let seq = inner.seq;
            inner.order.insert(seq, key.clone());
            inner.index.insert(key.clone(), seq);
        }
        let mut evicted = Vec::new();
        while inner.index.len() > self.capacity {
            match inner.order.pop_first() {
                Some((_, key)) => {
                    inner.index.remove(&key);
                    evicted.push(key);
                }
                None => break,
            }
        }
        evicted
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub(crate) fn remove(&self, key: &K) {
        let mut inner = self.inner.lock();
        if let Some(seq) = inner.index.remove(key) {
            inner.order.remove(&seq);
        }
    }

    // == Remove Many ==
    /// Removes several keys from the tracker.
    pub(crate) fn remove_many(&self, keys: &[K]) {
        let mut inner = self.inner.lock();
        for key in keys {
            if let Some(seq) = inner.index.remove(key) {
                inner.order.remove(&seq);
            }
        }
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub(crate) fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.order.clear();
        inner.index.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub(crate) fn len(&self) -> usize {
        self.inner.lock().index.len()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[cfg(test)]
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.inner.lock().index.contains_key(key)
    }
}
