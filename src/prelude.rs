pub use crate::buffer::{Buffer, BufferCore};
pub use crate::builder::{BufferBuilder, BufferConfig};
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::error::BufferError;
#[cfg(feature = "metrics")]
pub use crate::metrics::{BufferMetricsSnapshot, MetricsExporter, PrometheusTextExporter};
pub use crate::traits::Identifiable;
