use crate::prelude::*;
use num_traits::Zero;
use std::fmt::Display;

///
/// Quantity
///
/// Rejects negative numbers. Zero passes; values are returned unchanged.
/// Works for any numeric with a zero and an ordering (ints, floats, `Decimal`).
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Quantity;

impl_validator_kind!(Quantity);

impl<N> Validator<N> for Quantity
where
    N: PartialOrd + Zero + Display,
{
    fn validate(&self, value: N) -> Result<N, ValidateIssue> {
        if value < N::zero() {
            Err(ValidateIssue::new(
                Self::KIND,
                format!("{value} must be > 0"),
            ))
        } else {
            Ok(value)
        }
    }
}

///
/// TESTS
///
