//! hotcache - an in-process key/value cache for long-running services
//!
//! Provides task-safe caching with per-entry TTL expiration, optional LRU
//! eviction, read-through producer functions and background reclamation of
//! expired entries.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use hotcache::Cache;
//!
//! # async fn demo() -> hotcache::Result<()> {
//! let cache: Cache<String, String> = Cache::with_capacity(10_000);
//!
//! cache
//!     .set("session:42".into(), "token".into(), Some(Duration::from_secs(300)))
//!     .await?;
//!
//! let token = cache
//!     .get_or_set_with("session:7".into(), || async { Ok(Some("fresh".into())) }, None)
//!     .await?;
//! assert_eq!(token.as_deref(), Some("fresh"));
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cache;
pub mod config;
pub mod error;
pub mod value;

mod tasks;

pub use adapter::{Adapter, ProducerResult};
pub use cache::{Cache, Expiration, MemoryAdapter, StatsSnapshot};
pub use config::Config;
pub use error::{BoxError, CacheError, Result};
pub use value::Value;
