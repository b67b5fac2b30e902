use crate::prelude::*;

///
/// NonBlank
///
/// Trims surrounding whitespace and rejects what is left if empty.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NonBlank;

impl_validator_kind!(NonBlank);

impl Validator<String> for NonBlank {
    fn validate(&self, value: String) -> Result<String, ValidateIssue> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidateIssue::new(
                Self::KIND,
                "str must be not empty or blank",
            ));
        }

        // avoid reallocating when nothing was trimmed
        if trimmed.len() == value.len() {
            Ok(value)
        } else {
            Ok(trimmed.to_string())
        }
    }
}

///
/// MaxLen
///
/// Rejects text longer than `max` characters.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MaxLen {
    max: usize,
}

impl MaxLen {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl_validator_kind!(MaxLen);

impl Validator<String> for MaxLen {
    fn validate(&self, value: String) -> Result<String, ValidateIssue> {
        let len = value.chars().count();
        if len > self.max {
            return Err(ValidateIssue::new(
                Self::KIND,
                format!("length {len} exceeds max {}", self.max),
            ));
        }

        Ok(value)
    }
}

///
/// TESTS
///
