//! Expiry Sweeper Task
//!
//! Background task that reclaims expired cache entries.
//!
//! Writes never touch the expiry indexes directly; they enqueue
//! `(key, expire_at)` events instead. The sweeper is the sole owner of the
//! key-to-bucket index and the per-second expiry buckets, so no locking is
//! needed for either. Each tick drains all pending events into the indexes,
//! then sweeps a small window of recent buckets and deletes the entries that
//! are confirmed expired.
//!
//! Running the whole loop on one task also guarantees that ticks never
//! overlap, no matter how slow a sweep turns out to be.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::data::DataMap;
use crate::cache::entry::{bucket_of, now_millis, BUCKET_MS};
use crate::cache::lru::LruTracker;
use crate::cache::memory::ExpireEvent;
use crate::cache::stats::CacheStats;

/// How many one-second buckets behind the current one each sweep visits.
/// Keys older than the window are still unreadable (the read path checks
/// liveness) but only get reclaimed once their bucket re-enters the window
/// of a later tick via a fresh event, so the window is kept generous.
const SWEEP_WINDOW_BUCKETS: u64 = 5;

// == Sweeper ==
/// Owns the expiry bookkeeping and performs the periodic reclamation.
pub(crate) struct Sweeper<K, V> {
    data: Arc<DataMap<K, V>>,
    lru: Option<Arc<LruTracker<K>>>,
    stats: Arc<CacheStats>,
    events: UnboundedReceiver<ExpireEvent<K>>,
    /// Key -> the bucket currently holding it
    index: HashMap<K, u64>,
    /// Bucket timestamp -> keys expiring within that second
    buckets: HashMap<u64, HashSet<K>>,
}

impl<K, V> Sweeper<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(
        data: Arc<DataMap<K, V>>,
        lru: Option<Arc<LruTracker<K>>>,
        stats: Arc<CacheStats>,
        events: UnboundedReceiver<ExpireEvent<K>>,
    ) -> Self {
        Self {
            data,
            lru,
            stats,
            events,
            index: HashMap::new(),
            buckets: HashMap::new(),
        }
    }

    // == Tick ==
    /// One maintenance pass: drain pending expiry events, then sweep the
    /// bucket window behind `now`.
    pub(crate) async fn tick(&mut self, now: u64) -> usize {
        self.drain_events();
        self.sweep(now).await
    }

    // == Drain Phase ==
    /// Applies every queued expiry change to the index and buckets.
    fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn apply_event(&mut self, event: ExpireEvent<K>) {
        let new_bucket = bucket_of(event.expire_at);
        let old_bucket = self.index.get(&event.key).copied().unwrap_or(0);
        if new_bucket == old_bucket {
            return;
        }
        self.buckets
            .entry(new_bucket)
            .or_default()
            .insert(event.key.clone());
        if old_bucket != 0 {
            if let Some(members) = self.buckets.get_mut(&old_bucket) {
                members.remove(&event.key);
            }
        }
        self.index.insert(event.key, new_bucket);
    }

    // == Sweep Phase ==
    /// Deletes expired keys from the recent bucket window; each visited
    /// bucket is dropped afterwards. Entries rewritten since their event was
    /// indexed are left in place by the conditional delete.
    async fn sweep(&mut self, now: u64) -> usize {
        let current = bucket_of(now);
        let mut removed = 0;
        for i in 1..=SWEEP_WINDOW_BUCKETS {
            let Some(bucket) = current.checked_sub(i * BUCKET_MS) else {
                continue;
            };
            let Some(members) = self.buckets.remove(&bucket) else {
                continue;
            };
            for key in members {
                if self.data.delete_expired(&key, now).await {
                    self.stats.record_expiration();
                    removed += 1;
                }
                self.index.remove(&key);
                if let Some(lru) = &self.lru {
                    lru.remove(&key);
                }
            }
        }
        removed
    }
}

// == Spawn ==
/// Spawns the sweeper as a background task running every `interval`.
///
/// The task exits on its own once `closed` is observed set; the returned
/// handle can also abort it outright.
pub(crate) fn spawn_sweeper<K, V>(
    data: Arc<DataMap<K, V>>,
    lru: Option<Arc<LruTracker<K>>>,
    stats: Arc<CacheStats>,
    events: UnboundedReceiver<ExpireEvent<K>>,
    closed: Arc<AtomicBool>,
    interval: Duration,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let mut sweeper = Sweeper::new(data, lru, stats, events);

    tokio::spawn(async move {
        debug!("starting expiry sweeper with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            if closed.load(Ordering::Acquire) {
                debug!("cache closed, expiry sweeper exiting");
                break;
            }

            let removed = sweeper.tick(now_millis()).await;

            if removed > 0 {
                info!("expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("expiry sweep: no expired entries found");
            }
        }
    })
}
