//! Adapter Module
//!
//! The pluggable backend contract behind the [`Cache`](crate::Cache) facade.
//!
//! Only the in-memory adapter ships with this crate; the trait exists so a
//! remote backend can slot in behind the same facade later. Implementors
//! guarantee the concurrency safety of every operation themselves.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use crate::cache::Expiration;
use crate::error::{BoxError, Result};

/// Output of a caller-supplied producer function: a value to store,
/// `None` for "produce nothing, store nothing", or an error which the cache
/// forwards verbatim.
pub type ProducerResult<V> = std::result::Result<Option<V>, BoxError>;

// == Adapter Trait ==
/// Backend contract for cache implementations.
///
/// TTL semantics shared by every write operation:
/// - `ttl == None` - the entry never expires.
/// - `ttl == Some(d)` - the entry expires `d` after the write; a zero `d`
///   expires it immediately, which removes the key as far as readers are
///   concerned.
///
/// Absence is reported through `Option`, never as an error.
#[allow(async_fn_in_trait)]
pub trait Adapter<K, V>: Send + Sync {
    /// Unconditionally stores `value` under `key`.
    async fn set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<()>;

    /// Bulk store; every entry shares the same TTL.
    async fn set_many(&self, entries: Vec<(K, V)>, ttl: Option<Duration>) -> Result<()>;

    /// Stores `value` only if `key` is absent or expired.
    /// Returns whether the write happened.
    async fn set_if_absent(&self, key: K, value: V, ttl: Option<Duration>) -> Result<bool>;

    /// Like [`set_if_absent`](Self::set_if_absent), but the value comes from
    /// `producer`, invoked **outside** the cache's write lock; concurrent
    /// racers are resolved by an internal double-check. A producer returning
    /// `Ok(None)` stores nothing.
    async fn set_if_absent_with<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<bool>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send;

    /// Like [`set_if_absent_with`](Self::set_if_absent_with), but `producer`
    /// runs **inside** the cache's write lock, serializing concurrent
    /// producers for the key. The producer must not call back into the cache.
    async fn set_if_absent_with_lock<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<bool>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ProducerResult<V>> + Send;

    /// Returns the value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &K) -> Result<Option<V>>;

    /// Returns the value for `key`, storing and returning `value` when the
    /// key is absent or expired.
    async fn get_or_set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<Option<V>>;

    /// Read-through variant of [`get`](Self::get): on a miss the producer is
    /// invoked **outside** the write lock and its value stored.
    fn get_or_set_with<'a, F, Fut>(
        &'a self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> std::pin::Pin<Box<dyn Future<Output = Result<Option<V>>> + Send + 'a>>
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = ProducerResult<V>> + Send + 'a;

    /// Like [`get_or_set_with`](Self::get_or_set_with), but the producer runs
    /// **inside** the write lock: with N concurrent callers the producer is
    /// invoked exactly once and all callers observe its value.
    fn get_or_set_with_lock<'a, F, Fut>(
        &'a self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> std::pin::Pin<Box<dyn Future<Output = Result<Option<V>>> + Send + 'a>>
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = ProducerResult<V>> + Send + 'a;

    /// Live-only existence check, equivalent to `get(key)?.is_some()`.
    async fn contains(&self, key: &K) -> Result<bool>;

    /// Remaining lifetime of `key`: `None` when absent or expired.
    async fn ttl(&self, key: &K) -> Result<Option<Expiration>>;

    /// Replaces the value of `key` without touching its expiry.
    /// Returns the old value, or `None` (doing nothing) when absent.
    async fn update(&self, key: &K, value: V) -> Result<Option<V>>;

    /// Replaces the expiry of `key` without touching its value.
    /// Returns the previous remaining lifetime, or `None` when absent.
    async fn update_ttl(&self, key: &K, ttl: Option<Duration>) -> Result<Option<Expiration>>;

    /// Removes `key`, returning its value if it was present.
    async fn remove(&self, key: K) -> Result<Option<V>>;

    /// Removes several keys, returning the value of the last one removed.
    async fn remove_many(&self, keys: Vec<K>) -> Result<Option<V>>;

    /// Number of live entries.
    async fn size(&self) -> Result<usize>;

    /// Copy of all live key/value pairs.
    async fn data(&self) -> Result<HashMap<K, V>>;

    /// All live keys.
    async fn keys(&self) -> Result<Vec<K>>;

    /// All live values.
    async fn values(&self) -> Result<Vec<V>>;

    /// Wipes all entries.
    async fn clear(&self) -> Result<()>;

    /// Shuts the cache down. Background maintenance stops; subsequent
    /// operations still succeed.
    async fn close(&self) -> Result<()>;
}
