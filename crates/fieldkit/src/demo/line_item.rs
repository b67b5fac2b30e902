use crate::{
    base::validator::{NonBlank, Quantity},
    core::{
        error::Error,
        traits::Entity,
        value::Value,
    },
    entity,
};
use rust_decimal::Decimal;

entity! {
    ///
    /// LineItem
    ///
    /// One priced line of an order. Every field write is validated, during
    /// construction and afterwards alike.
    ///
    #[derive(Clone, Debug, PartialEq)]
    pub struct LineItem : LineItemFields {
        description: String => NonBlank,
        weight: Decimal => Quantity,
        price: Decimal => Quantity,
    }
}

impl LineItem {
    /// Build a line item, validating fields in declaration order.
    /// The first invalid field aborts construction.
    pub fn new(
        description: impl Into<String>,
        weight: Decimal,
        price: Decimal,
    ) -> Result<Self, Error> {
        let fields = Self::fields();
        let mut item = Self::blank();

        fields.description.set(&mut item, description.into())?;
        fields.weight.set(&mut item, weight)?;
        fields.price.set(&mut item, price)?;

        Ok(item)
    }

    #[must_use]
    pub fn description(&self) -> String {
        Self::fields().description.get(self)
    }

    #[must_use]
    pub fn weight(&self) -> Decimal {
        Self::fields().weight.get(self)
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        Self::fields().price.get(self)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), Error> {
        Self::fields().description.set(self, description.into())
    }

    pub fn set_weight(&mut self, weight: Decimal) -> Result<(), Error> {
        Self::fields().weight.set(self, weight)
    }

    pub fn set_price(&mut self, price: Decimal) -> Result<(), Error> {
        Self::fields().price.set(self, price)
    }

    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.weight() * self.price()
    }
}

/// Current field values of `entity`, in the order their slots were first written.
#[must_use]
pub fn as_tuple<E: Entity>(entity: &E) -> Vec<Value> {
    entity.store().values().cloned().collect()
}
