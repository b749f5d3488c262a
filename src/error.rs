//! Error types for the ttlbuffer library.
//!
//! ## Key Components
//!
//! - [`BufferError`]: Returned by [`Buffer::get`](crate::buffer::Buffer::get)
//!   when no live entry matches an id, and by
//!   [`Buffer::put`](crate::buffer::Buffer::put) when the buffer has zero
//!   capacity.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! `touch` and `update` report a missing id as `false` rather than an error:
//! absence is an expected outcome there, not a fault.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use ttlbuffer::buffer::Buffer;
//! use ttlbuffer::error::BufferError;
//!
//! let buffer: Buffer<String> = Buffer::new(0, Duration::from_secs(60));
//! assert_eq!(buffer.put("alpha".to_string()), Err(BufferError::Rejected));
//!
//! let err = buffer.get("alpha").unwrap_err();
//! assert!(err.is_not_found());
//! assert!(err.to_string().contains("alpha"));
//! ```

use thiserror::Error;

/// Convenience alias for results carrying a [`BufferError`].
pub type Result<T> = std::result::Result<T, BufferError>;

// ---------------------------------------------------------------------------
// BufferError
// ---------------------------------------------------------------------------

/// Failure outcomes of buffer operations.
///
/// Every variant is a deterministic function of the buffer's state and the
/// elapsed time; none is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// No live entry matches the id. Covers ids that were never inserted as
    /// well as ids removed by capacity eviction or by the staleness sweep.
    #[error("no live entry with id `{id}`")]
    NotFound { id: String },

    /// The buffer has zero capacity and can never hold an entry.
    #[error("buffer has zero capacity and rejects every insert")]
    Rejected,
}

impl BufferError {
    pub(crate) fn not_found(id: impl Into<String>) -> Self {
        BufferError::NotFound { id: id.into() }
    }

    /// Returns `true` for [`BufferError::NotFound`].
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, BufferError::NotFound { .. })
    }

    /// Returns `true` for [`BufferError::Rejected`].
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, BufferError::Rejected)
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal buffer invariants are violated.
///
/// Produced by `check_invariants` methods
/// (e.g. [`BufferCore::check_invariants`](crate::buffer::BufferCore::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
