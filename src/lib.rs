//! ttlbuffer: a bounded in-memory buffer with LRU replacement and lazy
//! time-to-live expiry.
//!
//! Values are keyed by their own [`Identifiable::id`]. A full buffer evicts
//! its least-recently-used entry; an entry not refreshed within the timeout
//! is dropped by the sweep that runs at the start of every operation.
//!
//! ```
//! use std::time::Duration;
//!
//! use ttlbuffer::prelude::*;
//!
//! let buffer: Buffer<String> = Buffer::new(2, Duration::from_secs(60));
//! buffer.put("a".to_string()).unwrap();
//! assert!(buffer.touch("a"));
//! assert!(buffer.get("b").unwrap_err().is_not_found());
//! ```

pub mod buffer;
pub mod builder;
pub mod clock;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;

pub use buffer::{Buffer, BufferCore};
pub use builder::{BufferBuilder, BufferConfig, DEFAULT_CAPACITY, DEFAULT_TIMEOUT};
pub use error::{BufferError, Result};
pub use traits::Identifiable;
