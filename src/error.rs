//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

/// Boxed error type returned by caller-supplied producer functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Absence of a key is never an error; read operations signal it with
/// `Option::None`. The memory adapter itself only ever forwards producer
/// failures.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Invalid configuration value, fatal at construction
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A caller-supplied producer function failed
    #[error("producer failed: {0}")]
    Producer(#[source] BoxError),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
