use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters. One state per thread.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub entities: BTreeMap<String, EntityCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    pub entities_registered: u64,
    pub fields_declared: u64,
    pub field_writes: u64,
    pub field_rejections: u64,
    pub labels_issued: u64,
}

///
/// EntityCounters
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EntityCounters {
    pub field_writes: u64,
    pub field_rejections: u64,
}

///
/// EventReport
/// Point-in-time copy of the event state.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub entities: BTreeMap<String, EntityCounters>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

#[must_use]
pub fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        entities: m.entities.clone(),
    })
}
