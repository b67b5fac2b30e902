//! Per-class instance labels.
//!
//! Every `AutoStorage` instance gets a label `"_<ClassName>#<index>"`.
//! A class that declares a counter starts at 0. A class that does not
//! copies its nearest ancestor's current value the first time it is
//! instantiated, then counts on its own from there; the ancestor is
//! not advanced.

use crate::core::obs::sink::{self, MetricsEvent};
use std::sync::{
    OnceLock,
    atomic::{AtomicU64, Ordering},
};

///
/// StorageClass
///
/// One class in a single-inheritance chain. Declared as a `static` so
/// counters live for the whole process and are never reset.
///

#[derive(Debug)]
pub struct StorageClass {
    name: &'static str,
    parent: Option<&'static Self>,
    declares_counter: bool,
    counter: OnceLock<AtomicU64>,
}

impl StorageClass {
    /// Top of a chain, declaring its own counter.
    #[must_use]
    pub const fn root(name: &'static str) -> Self {
        Self {
            name,
            parent: None,
            declares_counter: true,
            counter: OnceLock::new(),
        }
    }

    /// Subclass that seeds its counter from `parent` on first use.
    #[must_use]
    pub const fn inherit(name: &'static str, parent: &'static Self) -> Self {
        Self {
            name,
            parent: Some(parent),
            declares_counter: false,
            counter: OnceLock::new(),
        }
    }

    /// Subclass declaring its own counter, starting at 0.
    #[must_use]
    pub const fn with_counter(name: &'static str, parent: &'static Self) -> Self {
        Self {
            name,
            parent: Some(parent),
            declares_counter: true,
            counter: OnceLock::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn parent(&self) -> Option<&'static Self> {
        self.parent
    }

    /// Name of the class whose counter the next label is drawn from.
    /// Once a class has been instantiated, that is always the class itself.
    #[must_use]
    pub fn counter_owner(&self) -> &'static str {
        match self.parent {
            Some(parent) if !self.has_counter() => parent.counter_owner(),
            _ => self.name,
        }
    }

    /// Index the next label of this class would get.
    #[must_use]
    pub fn peek_index(&self) -> u64 {
        match (self.counter.get(), self.parent) {
            (Some(counter), _) => counter.load(Ordering::Relaxed),
            (None, Some(parent)) if !self.declares_counter => parent.peek_index(),
            (None, _) => 0,
        }
    }

    fn has_counter(&self) -> bool {
        self.declares_counter || self.counter.get().is_some()
    }

    fn next_index(&self) -> u64 {
        self.counter
            .get_or_init(|| AtomicU64::new(self.peek_index()))
            .fetch_add(1, Ordering::Relaxed)
    }
}

pub static AUTO_STORAGE: StorageClass = StorageClass::root("AutoStorage");
pub static A: StorageClass = StorageClass::inherit("A", &AUTO_STORAGE);
pub static B: StorageClass = StorageClass::inherit("B", &A);

///
/// AutoStorage
///

#[derive(Clone, Debug)]
pub struct AutoStorage {
    class: &'static StorageClass,
    storage_name: String,
}

impl AutoStorage {
    #[must_use]
    pub fn new(class: &'static StorageClass) -> Self {
        let index = class.next_index();
        let storage_name = format!("_{}#{index}", class.name());

        tracing::trace!(
            class = class.name(),
            owner = class.counter_owner(),
            %storage_name,
            "issued storage label"
        );
        sink::record(MetricsEvent::LabelIssued {
            class_name: class.name(),
        });

        Self {
            class,
            storage_name,
        }
    }

    #[must_use]
    pub fn storage_name(&self) -> &str {
        &self.storage_name
    }

    #[must_use]
    pub const fn class(&self) -> &'static StorageClass {
        self.class
    }
}

///
/// TESTS
///
