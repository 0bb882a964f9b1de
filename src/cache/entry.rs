//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support,
//! the millisecond clock, and expiry bucketing.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Absolute expiry timestamp used for entries that never expire.
pub(crate) const NEVER_EXPIRES_MS: u64 = 9_223_372_036_854;

/// Width of one expiry bucket in milliseconds.
pub(crate) const BUCKET_MS: u64 = 1000;

// == Cache Entry ==
/// A single cache entry: the stored value plus its absolute expiry.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// Expiration timestamp (Unix milliseconds); `NEVER_EXPIRES_MS` = no expiration
    pub(crate) expire_at: u64,
}

impl<V> CacheEntry<V> {
    // == Is Live ==
    /// Checks whether the entry is still live at `now`.
    ///
    /// Boundary condition: an entry is live only while the current time is
    /// strictly below its expiry, so an entry stored with a zero TTL is
    /// already expired on the next read.
    pub(crate) fn is_live(&self, now: u64) -> bool {
        self.expire_at > now
    }
}

// == Expiration ==
/// Remaining lifetime of a cache entry as observed by readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// The entry never expires.
    Never,
    /// The entry expires after the contained duration.
    After(Duration),
}

impl Expiration {
    /// Returns the remaining duration, or `None` for `Never`.
    pub fn remaining(&self) -> Option<Duration> {
        match self {
            Expiration::Never => None,
            Expiration::After(d) => Some(*d),
        }
    }
}

// == Clock Helpers ==
/// Returns current Unix timestamp in milliseconds.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}

/// Converts an API-boundary TTL into an absolute expiry timestamp.
///
/// `None` never expires; `Some(Duration::ZERO)` yields an already-expired
/// timestamp, which removes the key as far as readers are concerned.
pub(crate) fn expire_at_for(ttl: Option<Duration>, now: u64) -> u64 {
    match ttl {
        None => NEVER_EXPIRES_MS,
        Some(d) => now.saturating_add(d.as_millis() as u64),
    }
}

/// Converts a stored absolute expiry back into an [`Expiration`].
pub(crate) fn expiration_from(expire_at: u64, now: u64) -> Expiration {
    if expire_at == NEVER_EXPIRES_MS {
        Expiration::Never
    } else {
        Expiration::After(Duration::from_millis(expire_at.saturating_sub(now)))
    }
}

/// Coarsens an expiry timestamp to its one-second bucket key.
///
/// The bucket is the second boundary strictly above the timestamp, so a key
/// expiring exactly on a boundary lands one bucket later and is never swept
/// prematurely.
pub(crate) fn bucket_of(expire_at: u64) -> u64 {
    (expire_at / BUCKET_MS + 1) * BUCKET_MS
}
