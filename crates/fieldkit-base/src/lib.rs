//! Stock validators for fieldkit entities.

pub use fieldkit_core as core;

pub mod validator;

pub(crate) mod prelude {
    pub use crate::core::{
        error::ValidateIssue,
        impl_validator_kind,
        traits::{Validator, ValidatorKind},
    };
}
