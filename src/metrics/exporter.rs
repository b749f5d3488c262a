use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::BufferMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for buffer metrics snapshots.
///
/// Writes in the Prometheus text exposition format so the output can be
/// scraped directly or forwarded to an OpenTelemetry collector. Write errors
/// are dropped: metrics are observational.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", suffix, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<BufferMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &BufferMetricsSnapshot) {
        self.counter("get_calls_total", snapshot.get_calls);
        self.counter("get_hits_total", snapshot.get_hits);
        self.counter("get_misses_total", snapshot.get_misses);
        self.counter("insert_calls_total", snapshot.insert_calls);
        self.counter("insert_new_total", snapshot.insert_new);
        self.counter("insert_updates_total", snapshot.insert_updates);
        self.counter("insert_rejected_total", snapshot.insert_rejected);
        self.counter("evict_calls_total", snapshot.evict_calls);
        self.counter("evicted_entries_total", snapshot.evicted_entries);
        self.counter("touch_calls_total", snapshot.touch_calls);
        self.counter("touch_found_total", snapshot.touch_found);
        self.counter("update_calls_total", snapshot.update_calls);
        self.counter("update_found_total", snapshot.update_found);
        self.counter("sweep_calls_total", snapshot.sweep_calls);
        self.counter("expired_entries_total", snapshot.expired_entries);
        self.counter("remove_calls_total", snapshot.remove_calls);
        self.counter("remove_found_total", snapshot.remove_found);
        self.counter("clear_calls_total", snapshot.clear_calls);
        self.gauge("cache_len", snapshot.cache_len as u64);
        self.gauge("capacity", snapshot.capacity as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("ttlbuffer", Vec::new());
        let snapshot = BufferMetricsSnapshot {
            get_calls: 5,
            get_hits: 4,
            expired_entries: 2,
            cache_len: 3,
            capacity: 32,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE ttlbuffer_get_calls_total counter\nttlbuffer_get_calls_total 5\n"));
        assert!(text.contains("ttlbuffer_get_hits_total 4\n"));
        assert!(text.contains("ttlbuffer_expired_entries_total 2\n"));
        assert!(text.contains("# TYPE ttlbuffer_cache_len gauge\nttlbuffer_cache_len 3\n"));
        assert!(text.contains("ttlbuffer_capacity 32\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&BufferMetricsSnapshot::default());

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.starts_with("# TYPE get_calls_total counter\n"));
    }
}
