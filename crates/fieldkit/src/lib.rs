//! fieldkit: entities with validated fields.
//!
//! Re-exports the core runtime and stock validators, plus two small demos:
//! a `LineItem` record and per-class auto-generated storage labels.

pub use fieldkit_base as base;
pub use fieldkit_core as core;

// macros
pub use fieldkit_core::{entity, impl_validator_kind};

pub mod demo;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        base::validator::{MaxLen, NonBlank, Quantity},
        core::prelude::*,
        entity,
    };
}
