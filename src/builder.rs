//! Buffer configuration and builder.
//!
//! Collects capacity, timeout and clock in one place and hands back either
//! a shared [`Buffer`] or a single-threaded [`BufferCore`].
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use ttlbuffer::builder::BufferBuilder;
//!
//! let buffer = BufferBuilder::new()
//!     .capacity(100)
//!     .timeout(Duration::from_secs(30))
//!     .build::<String>();
//!
//! buffer.put("hello".to_string()).unwrap();
//! assert_eq!(*buffer.get("hello").unwrap(), "hello");
//! ```

use std::time::Duration;

use crate::buffer::{Buffer, BufferCore};
use crate::clock::{Clock, SystemClock};

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 32;

/// Timeout used when none is given: one hour.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3600);

/// Size and staleness limits for a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    /// Maximum number of live entries. 0 rejects every insert.
    pub capacity: usize,
    /// How long an entry may go without a refresh before it expires.
    pub timeout: Duration,
}

impl BufferConfig {
    pub fn new(capacity: usize, timeout: Duration) -> Self {
        Self { capacity, timeout }
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TIMEOUT)
    }
}

/// Builder for creating buffer instances.
#[derive(Debug, Clone)]
pub struct BufferBuilder<C = SystemClock> {
    config: BufferConfig,
    clock: C,
}

impl BufferBuilder<SystemClock> {
    /// Starts from [`BufferConfig::default`] and the system clock.
    pub fn new() -> Self {
        Self::from_config(BufferConfig::default())
    }

    pub fn from_config(config: BufferConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for BufferBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BufferBuilder<C> {
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Swaps the time source, e.g. for a [`ManualClock`](crate::clock::ManualClock)
    /// in tests.
    pub fn clock<C2: Clock>(self, clock: C2) -> BufferBuilder<C2> {
        BufferBuilder {
            config: self.config,
            clock,
        }
    }

    pub fn config(&self) -> BufferConfig {
        self.config
    }

    /// Builds a thread-safe buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    ///
    /// use ttlbuffer::builder::BufferBuilder;
    /// use ttlbuffer::clock::ManualClock;
    ///
    /// let clock = ManualClock::new();
    /// let buffer = BufferBuilder::new()
    ///     .timeout(Duration::from_secs(1))
    ///     .clock(clock.clone())
    ///     .build::<String>();
    ///
    /// buffer.put("a".to_string()).unwrap();
    /// clock.advance(Duration::from_secs(2));
    /// assert!(buffer.get("a").is_err());
    /// ```
    pub fn build<T>(self) -> Buffer<T, C> {
        Buffer::from_core(self.build_core())
    }

    /// Builds a single-threaded core.
    pub fn build_core<T>(self) -> BufferCore<T, C> {
        BufferCore::with_clock(self.config.capacity, self.config.timeout, self.clock)
    }
}
