//! # Bounded Buffer with LRU Replacement and Lazy TTL Expiry
//!
//! A buffer holds at most `capacity` values, keyed by their
//! [`Identifiable::id`]. Two independent triggers remove entries:
//!
//! - **Capacity**: inserting a new id into a full buffer evicts the
//!   least-recently-used entry.
//! - **Staleness**: an entry whose last refresh is more than `timeout` in the
//!   past is removed by the sweep that opens every mutating operation.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                            Buffer<T, C>                                  │
//!   │                  Arc<RwLock<BufferCore<T, C>>>                           │
//!   └──────────────────────────────────┬───────────────────────────────────────┘
//!                                      ▼
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                          BufferCore<T, C>                                │
//!   │                                                                          │
//!   │   FxHashMap<String, SlotId>          SlotArena<Entry<T>>                 │
//!   │   ┌──────────┬────────┐              ┌────────┬──────────────────────┐   │
//!   │   │ "user:1" │ id_1 ──┼─────────────►│ id_1   │ value, last_touched, │   │
//!   │   │ "user:2" │ id_2 ──┼─────────────►│ id_2   │ links[recency],      │   │
//!   │   └──────────┴────────┘              │ ...    │ links[freshness]     │   │
//!   │                                      └────────┴──────────────────────┘   │
//!   │                                                                          │
//!   │   recency   (lane 0):  head = MRU ──► ... ──► tail = LRU  (evict here)   │
//!   │   freshness (lane 1):  head = stalest ──► ... ──► tail = freshest        │
//!   │                        (sweep pops from head while expired)              │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both lists are threaded through the same arena entries, so an id, its value
//! and both of its timestamps always move together.
//!
//! ## Timestamps
//!
//! | Operation | Recency (LRU)  | `last_touched` (TTL) |
//! |-----------|----------------|----------------------|
//! | `put`     | moved to MRU   | reset                |
//! | `get`     | moved to MRU   | unchanged            |
//! | `touch`   | moved to MRU   | reset                |
//! | `update`  | moved to MRU   | reset                |
//! | `peek`    | unchanged      | unchanged            |
//!
//! A read alone never delays expiry.
//!
//! ## Sweep
//!
//! Every refresh stamps the current instant from a monotonic [`Clock`] and
//! moves the entry to the freshness tail, so the freshness list stays sorted
//! by `last_touched`. The sweep therefore pops from the head until it meets a
//! live entry: O(expired + 1) rather than O(len).
//!
//! An entry is expired when `now - last_touched > timeout` (strictly greater).
//!
//! ## Thread Safety
//!
//! - `BufferCore`: **NOT thread-safe**, single-threaded only.
//! - `Buffer`: **thread-safe**; every operation that can observe entries runs
//!   sweep, recency update and eviction under one `parking_lot::RwLock`
//!   write guard, so no caller sees a half-swept or half-evicted state.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use ttlbuffer::buffer::Buffer;
//!
//! let buffer: Buffer<String> = Buffer::new(2, Duration::from_secs(3600));
//! buffer.put("a".to_string()).unwrap();
//! buffer.put("b".to_string()).unwrap();
//! buffer.put("c".to_string()).unwrap(); // evicts "a"
//!
//! assert!(buffer.get("a").is_err());
//! assert_eq!(*buffer.get("b").unwrap(), "b");
//! assert_eq!(*buffer.get("c").unwrap(), "c");
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::builder::{DEFAULT_CAPACITY, DEFAULT_TIMEOUT};
use crate::clock::{Clock, SystemClock};
use crate::ds::{IntrusiveList, Linked, Links, SlotArena, SlotId};
use crate::error::{BufferError, InvariantError, Result};
#[cfg(feature = "metrics")]
use crate::metrics::{
    BufferMetrics, BufferMetricsRecorder, BufferMetricsSnapshot, CoreMetricsRecorder,
    MetricsSnapshotProvider,
};
use crate::traits::Identifiable;

const RECENCY: usize = 0;
const FRESHNESS: usize = 1;

// Upper bound on up-front map/arena allocation; larger buffers grow on demand.
const MAX_PREALLOC: usize = 4096;

/// Arena node: one cached value plus its TTL stamp and list links.
struct Entry<T> {
    id: String,
    value: Arc<T>,
    last_touched: Instant,
    links: [Links; 2],
}

impl<T> Linked for Entry<T> {
    #[inline]
    fn links(&self, lane: usize) -> &Links {
        &self.links[lane]
    }

    #[inline]
    fn links_mut(&mut self, lane: usize) -> &mut Links {
        &mut self.links[lane]
    }
}

/// Single-threaded buffer core.
///
/// Wrap it in [`Buffer`] for shared use across threads.
pub struct BufferCore<T, C = SystemClock> {
    map: FxHashMap<String, SlotId>,
    entries: SlotArena<Entry<T>>,
    recency: IntrusiveList<RECENCY>,
    freshness: IntrusiveList<FRESHNESS>,
    capacity: usize,
    timeout: Duration,
    clock: C,
    #[cfg(feature = "metrics")]
    metrics: BufferMetrics,
}

impl<T> BufferCore<T, SystemClock> {
    /// Creates a buffer that holds at most `capacity` entries, each expiring
    /// once it has gone `timeout` without a refresh.
    ///
    /// A capacity of 0 creates a buffer that rejects every insert.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use ttlbuffer::buffer::BufferCore;
    ///
    /// let core: BufferCore<String> = BufferCore::new(100, Duration::from_secs(60));
    /// assert_eq!(core.capacity(), 100);
    /// assert!(core.is_empty());
    /// ```
    pub fn new(capacity: usize, timeout: Duration) -> Self {
        Self::with_clock(capacity, timeout, SystemClock)
    }

    /// Creates a buffer with capacity 32 and a one-hour timeout.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TIMEOUT)
    }
}

impl<T, C: Clock> BufferCore<T, C> {
    /// Creates a buffer that reads time from `clock`.
    pub fn with_clock(capacity: usize, timeout: Duration, clock: C) -> Self {
        debug!(
            capacity,
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            "creating buffer"
        );
        let prealloc = capacity.min(MAX_PREALLOC);
        BufferCore {
            map: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            entries: SlotArena::with_capacity(prealloc),
            recency: IntrusiveList::new(),
            freshness: IntrusiveList::new(),
            capacity,
            timeout,
            clock,
            #[cfg(feature = "metrics")]
            metrics: BufferMetrics::default(),
        }
    }

    #[inline]
    fn is_expired(&self, entry: &Entry<T>, now: Instant) -> bool {
        now.saturating_duration_since(entry.last_touched) > self.timeout
    }

    /// Removes every entry whose TTL has lapsed at `now`.
    fn sweep(&mut self, now: Instant) -> usize {
        #[cfg(feature = "metrics")]
        self.metrics.record_sweep_call();

        let mut expired = 0usize;
        while let Some(slot) = self.freshness.front() {
            let stale = self
                .entries
                .get(slot)
                .is_some_and(|entry| self.is_expired(entry, now));
            if !stale {
                break;
            }
            self.detach(slot);
            expired += 1;
        }

        if expired > 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_expired_entries(expired as u64);
            debug!(expired, remaining = self.map.len(), "swept expired entries");
        }
        expired
    }

    /// Unlinks `slot` from both lists, frees it and drops its map key.
    fn detach(&mut self, slot: SlotId) -> Option<Entry<T>> {
        self.recency.unlink(&mut self.entries, slot);
        self.freshness.unlink(&mut self.entries, slot);
        let entry = self.entries.remove(slot)?;
        self.map.remove(&entry.id);
        Some(entry)
    }

    fn evict_lru(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let Some(victim) = self.recency.back() else {
            return;
        };
        if let Some(entry) = self.detach(victim) {
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
            debug!(id = %entry.id, "evicted least-recently-used entry");
        }
    }

    /// Resets the TTL stamp and marks the entry most-recently-used.
    fn refresh(&mut self, slot: SlotId, now: Instant) {
        if let Some(entry) = self.entries.get_mut(slot) {
            entry.last_touched = now;
        }
        self.freshness.move_to_back(&mut self.entries, slot);
        self.recency.move_to_front(&mut self.entries, slot);
    }

    /// Returns the value stored under `id` and marks it most-recently-used.
    ///
    /// Does **not** reset the entry's TTL.
    ///
    /// # Errors
    ///
    /// [`BufferError::NotFound`] if no live entry has this id.
    pub fn get(&mut self, id: &str) -> Result<Arc<T>> {
        let now = self.clock.now();
        self.sweep(now);

        let Some(&slot) = self.map.get(id) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return Err(BufferError::not_found(id));
        };

        self.recency.move_to_front(&mut self.entries, slot);
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        self.entries
            .get(slot)
            .map(|entry| Arc::clone(&entry.value))
            .ok_or_else(|| BufferError::not_found(id))
    }

    /// Resets the TTL of `id` and marks it most-recently-used.
    ///
    /// Returns `false` without side effects if no live entry has this id.
    pub fn touch(&mut self, id: &str) -> bool {
        let now = self.clock.now();
        self.sweep(now);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&slot) = self.map.get(id) else {
            return false;
        };
        self.refresh(slot, now);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        true
    }

    /// Runs the staleness sweep on demand and returns how many entries it
    /// removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let expired = self.sweep(now);

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        expired
    }

    /// Removes `id` and returns its value, if it was live.
    pub fn remove(&mut self, id: &str) -> Option<Arc<T>> {
        let now = self.clock.now();
        self.sweep(now);

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let slot = *self.map.get(id)?;
        let entry = self.detach(slot)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        Some(entry.value)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.map.clear();
        self.entries.clear();
        self.recency.clear();
        self.freshness.clear();
    }

    /// Returns the value for `id` without changing recency or TTL.
    ///
    /// Expired entries are hidden but not removed; the next mutating
    /// operation sweeps them.
    pub fn peek(&self, id: &str) -> Option<Arc<T>> {
        let now = self.clock.now();
        let slot = *self.map.get(id)?;
        self.entries
            .get(slot)
            .filter(|entry| !self.is_expired(entry, now))
            .map(|entry| Arc::clone(&entry.value))
    }

    /// Returns `true` if a live entry has this id. Does not affect recency.
    pub fn contains(&self, id: &str) -> bool {
        let now = self.clock.now();
        self.map
            .get(id)
            .and_then(|&slot| self.entries.get(slot))
            .is_some_and(|entry| !self.is_expired(entry, now))
    }

    /// Returns the live entry that the next full-buffer insert would evict.
    pub fn peek_lru(&self) -> Option<Arc<T>> {
        let now = self.clock.now();
        self.recency
            .iter_rev(&self.entries)
            .find(|(_, entry)| !self.is_expired(entry, now))
            .map(|(_, entry)| Arc::clone(&entry.value))
    }

    /// Ids of live entries, most-recently-used first.
    pub fn ids(&self) -> Vec<String> {
        let now = self.clock.now();
        self.recency
            .iter(&self.entries)
            .filter(|(_, entry)| !self.is_expired(entry, now))
            .map(|(_, entry)| entry.id.clone())
            .collect()
    }

    /// Number of entries held, including any that have expired since the
    /// last sweep.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validates internal invariants. O(n); debug builds run it after every
    /// mutation.
    ///
    /// Checks the capacity bound, that the map, the arena and both lists hold
    /// the same set of entries, that every list is well linked, and that the
    /// freshness list is ordered by `last_touched`.
    pub fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        let len = self.map.len();
        if len > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                len, self.capacity
            )));
        }
        if self.entries.len() != len || self.recency.len() != len || self.freshness.len() != len {
            return Err(InvariantError::new(format!(
                "size mismatch: map {}, arena {}, recency {}, freshness {}",
                len,
                self.entries.len(),
                self.recency.len(),
                self.freshness.len()
            )));
        }

        self.recency.validate(&self.entries)?;
        self.freshness.validate(&self.entries)?;

        for (id, &slot) in &self.map {
            let entry = self
                .entries
                .get(slot)
                .ok_or_else(|| InvariantError::new(format!("map key {id:?} points at empty {slot:?}")))?;
            if entry.id != *id {
                return Err(InvariantError::new(format!(
                    "map key {id:?} points at entry {:?}",
                    entry.id
                )));
            }
        }

        for (slot, entry) in self.recency.iter(&self.entries) {
            if self.map.get(&entry.id) != Some(&slot) {
                return Err(InvariantError::new(format!(
                    "recency entry {:?} at {slot:?} is not indexed",
                    entry.id
                )));
            }
        }

        let mut previous: Option<Instant> = None;
        for (slot, entry) in self.freshness.iter(&self.entries) {
            if self.map.get(&entry.id) != Some(&slot) {
                return Err(InvariantError::new(format!(
                    "freshness entry {:?} at {slot:?} is not indexed",
                    entry.id
                )));
            }
            if previous.is_some_and(|prev| prev > entry.last_touched) {
                return Err(InvariantError::new(format!(
                    "freshness order broken at {:?}",
                    entry.id
                )));
            }
            previous = Some(entry.last_touched);
        }

        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("buffer invariant violated: {err}");
        }
    }
}

impl<T: Identifiable, C: Clock> BufferCore<T, C> {
    /// Inserts `item`, replacing any entry with the same id.
    ///
    /// A replaced entry gets fresh timestamps and becomes most-recently-used.
    /// Inserting a new id into a full buffer first evicts the
    /// least-recently-used entry.
    ///
    /// # Errors
    ///
    /// [`BufferError::Rejected`] if the buffer has zero capacity.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use ttlbuffer::buffer::BufferCore;
    ///
    /// let mut core = BufferCore::new(1, Duration::from_secs(60));
    /// core.put("first".to_string()).unwrap();
    /// core.put("second".to_string()).unwrap(); // evicts "first"
    ///
    /// assert!(!core.contains("first"));
    /// assert!(core.contains("second"));
    /// ```
    pub fn put(&mut self, item: T) -> Result<()> {
        let now = self.clock.now();
        self.sweep(now);

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let id = item.id();
        if let Some(&slot) = self.map.get(&id) {
            if let Some(entry) = self.entries.get_mut(slot) {
                entry.value = Arc::new(item);
            }
            self.refresh(slot, now);

            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            #[cfg(debug_assertions)]
            self.debug_validate_invariants();

            return Ok(());
        }

        if self.capacity == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_rejected();
            debug!(id = %id, "rejected insert into zero-capacity buffer");
            return Err(BufferError::Rejected);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.map.len() >= self.capacity {
            self.evict_lru();
        }

        let slot = self.entries.insert(Entry {
            id: id.clone(),
            value: Arc::new(item),
            last_touched: now,
            links: [Links::default(); 2],
        });
        self.recency.push_front(&mut self.entries, slot);
        self.freshness.push_back(&mut self.entries, slot);
        self.map.insert(id, slot);

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        Ok(())
    }

    /// Replaces the value stored under `item.id()`, resets its TTL and marks it
    /// most-recently-used.
    ///
    /// Returns `false` and inserts nothing if no live entry has that id.
    pub fn update(&mut self, item: T) -> bool {
        let now = self.clock.now();
        self.sweep(now);

        #[cfg(feature = "metrics")]
        self.metrics.record_update_call();

        let Some(&slot) = self.map.get(&item.id()) else {
            return false;
        };
        if let Some(entry) = self.entries.get_mut(slot) {
            entry.value = Arc::new(item);
        }
        self.refresh(slot, now);

        #[cfg(feature = "metrics")]
        self.metrics.record_update_found();

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        true
    }
}

#[cfg(feature = "metrics")]
impl<T, C: Clock> BufferCore<T, C> {
    pub fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        self.metrics.snapshot(self.map.len(), self.capacity)
    }
}

#[cfg(feature = "metrics")]
impl<T, C: Clock> MetricsSnapshotProvider<BufferMetricsSnapshot> for BufferCore<T, C> {
    fn snapshot(&self) -> BufferMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T, C> fmt::Debug for BufferCore<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferCore")
            .field("len", &self.map.len())
            .field("capacity", &self.capacity)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl<T> Default for BufferCore<T, SystemClock> {
    /// Creates a buffer with capacity 32 and a one-hour timeout.
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Thread-safe buffer: a [`BufferCore`] behind a shared `parking_lot::RwLock`.
///
/// Cloning yields another handle to the same buffer.
pub struct Buffer<T, C = SystemClock> {
    inner: Arc<RwLock<BufferCore<T, C>>>,
}

impl<T, C> Clone for Buffer<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Buffer<T, SystemClock> {
    /// Creates a thread-safe buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use ttlbuffer::buffer::Buffer;
    ///
    /// let buffer: Buffer<String> = Buffer::new(100, Duration::from_secs(60));
    /// assert_eq!(buffer.capacity(), 100);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new(capacity: usize, timeout: Duration) -> Self {
        Self::from_core(BufferCore::new(capacity, timeout))
    }

    /// Creates a thread-safe buffer with capacity 32 and a one-hour timeout.
    pub fn with_defaults() -> Self {
        Self::from_core(BufferCore::with_defaults())
    }
}

impl<T, C: Clock> Buffer<T, C> {
    pub fn with_clock(capacity: usize, timeout: Duration, clock: C) -> Self {
        Self::from_core(BufferCore::with_clock(capacity, timeout, clock))
    }

    /// Wraps an existing core.
    pub fn from_core(core: BufferCore<T, C>) -> Self {
        Buffer {
            inner: Arc::new(RwLock::new(core)),
        }
    }

    /// See [`BufferCore::get`].
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use ttlbuffer::buffer::Buffer;
    ///
    /// let buffer: Buffer<String> = Buffer::new(4, Duration::from_secs(60));
    /// buffer.put("value".to_string()).unwrap();
    ///
    /// assert_eq!(*buffer.get("value").unwrap(), "value");
    /// assert!(buffer.get("missing").unwrap_err().is_not_found());
    /// ```
    pub fn get(&self, id: &str) -> Result<Arc<T>> {
        self.inner.write().get(id)
    }

    /// See [`BufferCore::touch`].
    pub fn touch(&self, id: &str) -> bool {
        self.inner.write().touch(id)
    }

    /// Sweeps, then looks up `id` without changing recency or TTL.
    pub fn peek(&self, id: &str) -> Option<Arc<T>> {
        let mut core = self.inner.write();
        core.purge_expired();
        core.peek(id)
    }

    /// Sweeps, then reports whether `id` is held.
    pub fn contains(&self, id: &str) -> bool {
        let mut core = self.inner.write();
        core.purge_expired();
        core.contains(id)
    }

    pub fn remove(&self, id: &str) -> Option<Arc<T>> {
        self.inner.write().remove(id)
    }

    pub fn clear(&self) {
        self.inner.write().clear()
    }

    /// See [`BufferCore::purge_expired`].
    pub fn purge_expired(&self) -> usize {
        self.inner.write().purge_expired()
    }

    /// Sweeps, then returns the entry the next full-buffer insert would evict.
    pub fn peek_lru(&self) -> Option<Arc<T>> {
        let mut core = self.inner.write();
        core.purge_expired();
        core.peek_lru()
    }

    /// Sweeps, then returns the live ids, most-recently-used first.
    pub fn ids(&self) -> Vec<String> {
        let mut core = self.inner.write();
        core.purge_expired();
        core.ids()
    }

    /// Sweeps, then returns the number of live entries.
    pub fn len(&self) -> usize {
        let mut core = self.inner.write();
        core.purge_expired();
        core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.read().timeout()
    }

    pub fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        self.inner.read().check_invariants()
    }
}

impl<T: Identifiable, C: Clock> Buffer<T, C> {
    /// See [`BufferCore::put`].
    pub fn put(&self, item: T) -> Result<()> {
        self.inner.write().put(item)
    }

    /// See [`BufferCore::update`].
    pub fn update(&self, item: T) -> bool {
        self.inner.write().update(item)
    }
}

#[cfg(feature = "metrics")]
impl<T, C: Clock> Buffer<T, C> {
    /// Sweeps, then snapshots the counters, so `cache_len` agrees with
    /// [`len`](Self::len).
    pub fn metrics_snapshot(&self) -> BufferMetricsSnapshot {
        let mut core = self.inner.write();
        core.purge_expired();
        core.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T, C: Clock> MetricsSnapshotProvider<BufferMetricsSnapshot> for Buffer<T, C> {
    fn snapshot(&self) -> BufferMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T, C> fmt::Debug for Buffer<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.read();
        f.debug_struct("Buffer")
            .field("len", &core.map.len())
            .field("capacity", &core.capacity)
            .field("timeout", &core.timeout)
            .finish_non_exhaustive()
    }
}

impl<T> Default for Buffer<T, SystemClock> {
    /// Creates a buffer with capacity 32 and a one-hour timeout.
    fn default() -> Self {
        Self::with_defaults()
    }
}
