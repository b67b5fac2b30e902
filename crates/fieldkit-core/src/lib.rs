//! Core runtime for fieldkit: validator and entity traits, field
//! descriptors, per-instance storage, and the one-time entity registry.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod error;
pub mod field;
pub mod model;
pub mod obs;
pub mod store;
pub mod traits;
pub mod value;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;
pub use thiserror::Error as ThisError;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No stores, sinks or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error::Error,
        field::Field,
        model::EntityModel,
        traits::{Entity, FieldValue, Validator, ValidatorKind},
        value::Value,
    };
}
