use crate::metrics::snapshot::BufferMetricsSnapshot;
use crate::metrics::traits::{BufferMetricsRecorder, CoreMetricsRecorder};

/// Live counters owned by a [`BufferCore`](crate::buffer::BufferCore).
///
/// Only `&mut self` paths record; read-only lookups (`peek`, `contains`) are
/// not counted.
#[derive(Debug, Default, Clone)]
pub struct BufferMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub insert_rejected: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub update_calls: u64,
    pub update_found: u64,
    pub sweep_calls: u64,
    pub expired_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub clear_calls: u64,
}

impl BufferMetrics {
    /// Copies the counters and attaches the given gauges.
    pub fn snapshot(&self, len: usize, capacity: usize) -> BufferMetricsSnapshot {
        BufferMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_new: self.insert_new,
            insert_updates: self.insert_updates,
            insert_rejected: self.insert_rejected,
            evict_calls: self.evict_calls,
            evicted_entries: self.evicted_entries,
            touch_calls: self.touch_calls,
            touch_found: self.touch_found,
            update_calls: self.update_calls,
            update_found: self.update_found,
            sweep_calls: self.sweep_calls,
            expired_entries: self.expired_entries,
            remove_calls: self.remove_calls,
            remove_found: self.remove_found,
            clear_calls: self.clear_calls,
            cache_len: len,
            capacity,
        }
    }
}

impl CoreMetricsRecorder for BufferMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl BufferMetricsRecorder for BufferMetrics {
    fn record_insert_rejected(&mut self) {
        self.insert_rejected += 1;
    }

    fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }

    fn record_update_call(&mut self) {
        self.update_calls += 1;
    }

    fn record_update_found(&mut self) {
        self.update_found += 1;
    }

    fn record_sweep_call(&mut self) {
        self.sweep_calls += 1;
    }

    fn record_expired_entries(&mut self, count: u64) {
        self.expired_entries += count;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_hits_and_misses_both_count_calls() {
        let mut metrics = BufferMetrics::default();
        metrics.record_get_hit();
        metrics.record_get_miss();
        metrics.record_get_miss();

        assert_eq!(metrics.get_calls, 3);
        assert_eq!(metrics.get_hits, 1);
        assert_eq!(metrics.get_misses, 2);
    }

    #[test]
    fn expired_entries_accumulate_counts() {
        let mut metrics = BufferMetrics::default();
        metrics.record_sweep_call();
        metrics.record_expired_entries(3);
        metrics.record_sweep_call();
        metrics.record_expired_entries(0);

        assert_eq!(metrics.sweep_calls, 2);
        assert_eq!(metrics.expired_entries, 3);
    }

    #[test]
    fn snapshot_copies_counters_and_gauges() {
        let mut metrics = BufferMetrics::default();
        metrics.record_insert_call();
        metrics.record_insert_new();
        metrics.record_touch_call();
        metrics.record_touch_found();

        let snap = metrics.snapshot(1, 8);
        assert_eq!(snap.insert_calls, 1);
        assert_eq!(snap.insert_new, 1);
        assert_eq!(snap.touch_found, 1);
        assert_eq!(snap.cache_len, 1);
        assert_eq!(snap.capacity, 8);
    }
}
