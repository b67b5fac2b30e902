//! Observability: in-memory event counters and the sink they flow through.
//!
//! Field, model and label code never touches `metrics` directly; all
//! instrumentation goes through `MetricsEvent` and `MetricsSink`.

pub mod metrics;
pub mod sink;

// re-exports
pub use metrics::EventReport;
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all};
