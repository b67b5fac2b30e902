//! Metrics sink boundary.
//!
//! This module is the only allowed bridge between instrumented code
//! and the thread-local metrics state.
use crate::obs::metrics;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    EntityRegistered {
        entity_name: &'static str,
        fields: u64,
    },
    FieldWrite {
        entity_name: &'static str,
    },
    FieldRejected {
        entity_name: &'static str,
    },
    LabelIssued {
        class_name: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::EntityRegistered { fields, .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.entities_registered = m.ops.entities_registered.saturating_add(1);
                    m.ops.fields_declared = m.ops.fields_declared.saturating_add(fields);
                });
            }

            MetricsEvent::FieldWrite { entity_name } => {
                metrics::with_state_mut(|m| {
                    m.ops.field_writes = m.ops.field_writes.saturating_add(1);
                    let entry = m.entities.entry(entity_name.to_string()).or_default();
                    entry.field_writes = entry.field_writes.saturating_add(1);
                });
            }

            MetricsEvent::FieldRejected { entity_name } => {
                metrics::with_state_mut(|m| {
                    m.ops.field_rejections = m.ops.field_rejections.saturating_add(1);
                    let entry = m.entities.entry(entity_name.to_string()).or_default();
                    entry.field_rejections = entry.field_rejections.saturating_add(1);
                });
            }

            MetricsEvent::LabelIssued { .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.labels_issued = m.ops.labels_issued.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

/// Route one event to the scoped override, or the global sink.
pub fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a live `&dyn MetricsSink` in `with_metrics_sink`,
        //   which restores the previous slot on every exit, including unwind.
        // - `record` dereferences synchronously and never stores `ptr`.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current thread's metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state for the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
pub(crate) fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope; `Guard`
    //   restores the previous slot on all exits.
    // - Only shared access is ever materialized from it.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_support::Note, traits::Entity};
    use std::cell::RefCell;

    #[derive(Default)]
    struct CaptureSink {
        events: RefCell<Vec<MetricsEvent>>,
    }

    impl MetricsSink for CaptureSink {
        fn record(&self, event: MetricsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn override_captures_and_restores() {
        metrics_reset_all();
        let capture = CaptureSink::default();

        with_metrics_sink(&capture, || {
            record(MetricsEvent::LabelIssued { class_name: "A" });
        });
        record(MetricsEvent::LabelIssued { class_name: "B" });

        assert_eq!(
            *capture.events.borrow(),
            [MetricsEvent::LabelIssued { class_name: "A" }]
        );
        assert_eq!(metrics_report().ops.labels_issued, 1);
    }

    #[test]
    fn field_writes_and_rejections_are_counted_per_entity() {
        let mut note = Note::blank();
        let body = &Note::fields().body;
        metrics_reset_all();

        body.set(&mut note, "ok".to_string()).unwrap();
        body.set(&mut note, String::new()).unwrap_err();

        let report = metrics_report();
        let counters = &report.entities["Note"];
        assert_eq!(report.ops.field_writes, 1);
        assert_eq!(report.ops.field_rejections, 1);
        assert_eq!(counters.field_writes, 1);
        assert_eq!(counters.field_rejections, 1);
        assert!(note.store().get_raw("Shout#body").is_some());
    }
}
