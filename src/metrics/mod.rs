//! Optional instrumentation, enabled with the `metrics` feature.

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::BufferMetrics;
pub use snapshot::BufferMetricsSnapshot;
pub use traits::{
    BufferMetricsRecorder, CoreMetricsRecorder, MetricsExporter, MetricsSnapshotProvider,
};
