//! Error types crossing the store trait seams.
//!
//! Nothing in this crate is fatal to the hosting session: per-unit store
//! failures are absorbed at the resolver boundary (logged, treated as "zero
//! new items"), and `NotFound` drives normal termination rather than an error
//! path. The driver itself never observes a `StoreError`.

use thiserror::Error;

/// Errors returned by host store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No more conferences/areas/files. Expected; never logged as an error.
    #[error("no matching record")]
    NotFound,

    /// The backing store call failed (database, network to the host, etc.).
    #[error("store backend error: {0}")]
    Backend(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// A user property exists but its value is malformed.
    #[error("invalid value for property {name}: {value}")]
    InvalidProperty { name: String, value: String },
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}
