use crate::value::Value;
use serde::Serialize;

///
/// FieldStore
///
/// Per-instance slot map from storage key to current value.
/// Slots keep first-insertion order; overwriting a key updates it in place.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FieldStore {
    slots: Vec<(String, Value)>,
}

impl FieldStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.slots.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Store `value` under `key` without validation.
    pub fn insert_raw(&mut self, key: &str, value: Value) {
        match self.slots.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.slots.push((key.to_string(), value)),
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.slots.iter().map(|(_, v)| v)
    }

    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort_unstable();

        keys
    }
}

///
/// TESTS
///
