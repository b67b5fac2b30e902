//! Small entities and validators shared by unit tests.

use crate::{error::ValidateIssue, traits::Validator};

///
/// Shout
/// Uppercases text; rejects empty input.
///

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Shout;

impl_validator_kind!(Shout);

impl Validator<String> for Shout {
    fn validate(&self, value: String) -> Result<String, ValidateIssue> {
        if value.is_empty() {
            return Err(ValidateIssue::new("Shout", "cannot shout nothing"));
        }

        Ok(value.to_uppercase())
    }
}

///
/// Ceiling
/// Rejects integers above a configured limit.
///

#[derive(Clone, Copy, Debug)]
pub(crate) struct Ceiling(pub(crate) i64);

impl_validator_kind!(Ceiling);

impl Validator<i64> for Ceiling {
    fn validate(&self, value: i64) -> Result<i64, ValidateIssue> {
        if value > self.0 {
            return Err(ValidateIssue::new(
                "Ceiling",
                format!("{value} must be <= {}", self.0),
            ));
        }

        Ok(value)
    }
}

entity! {
    #[derive(Debug)]
    pub(crate) struct Note : NoteFields {
        body: String => Shout,
    }
}

entity! {
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Crate : CrateFields {
        label: String => Shout,
        weight: i64 => Ceiling = Ceiling(100),
        volume: i64 => Ceiling = Ceiling(10),
    }
}
