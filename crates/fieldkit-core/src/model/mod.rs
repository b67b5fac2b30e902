//! Entity models: the ordered, registered field metadata of each record type.
//!
//! A model is produced once per entity type by `EntityRegistry` and is
//! read-only afterwards.


use crate::{
    field::{Field, storage_key_for},
    obs::sink::{self, MetricsEvent},
    traits::{Entity, FieldValue, Validator},
};
use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use std::{iter::FusedIterator, marker::PhantomData, slice};

///
/// FieldModel
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldModel {
    /// Field name as declared on the entity.
    pub ident: &'static str,
    /// Slot key in each instance's `FieldStore`.
    pub storage_key: String,
    /// `ValidatorKind::KIND` of the guarding validator.
    pub validator: &'static str,
}

///
/// FieldList
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, Serialize)]
#[into_iterator(owned, ref)]
pub struct FieldList(Vec<FieldModel>);

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&FieldModel> {
        self.0.iter().find(|f| f.ident == ident)
    }
}

///
/// EntityModel
///

#[derive(Clone, Debug, Serialize)]
pub struct EntityModel {
    pub entity_name: &'static str,
    /// Ordered field list (declaration order).
    pub fields: FieldList,
}

impl EntityModel {
    /// Field names in declaration order. Each call yields a fresh iterator.
    #[must_use]
    pub fn iter_fields(&self) -> FieldNames<'_> {
        FieldNames {
            inner: self.fields.iter(),
        }
    }

    #[must_use]
    pub fn field(&self, ident: &str) -> Option<&FieldModel> {
        self.fields.get(ident)
    }

    pub fn storage_keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.storage_key.as_str())
    }
}

///
/// FieldNames
///

#[derive(Clone, Debug)]
pub struct FieldNames<'a> {
    inner: slice::Iter<'a, FieldModel>,
}

impl Iterator for FieldNames<'_> {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|f| f.ident)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for FieldNames<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|f| f.ident)
    }
}

impl ExactSizeIterator for FieldNames<'_> {}

impl FusedIterator for FieldNames<'_> {}

///
/// EntityRegistry
///
/// Collects the fields of one entity type in declaration order, binding
/// each descriptor's storage key as it goes.
///
/// Storage keys must be unique within one entity. Identical keys can only
/// come from declaring the same field name twice, which the `entity!`
/// macro already rejects at compile time.
///

pub struct EntityRegistry<E> {
    fields: Vec<FieldModel>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityRegistry<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Bind `field` to `ident` and record it as the next declared field.
    pub fn declare<T, V>(&mut self, ident: &'static str, mut field: Field<E, T, V>) -> Field<E, T, V>
    where
        T: FieldValue,
        V: Validator<T>,
    {
        let storage_key = storage_key_for(V::KIND, ident);
        debug_assert!(
            self.fields.iter().all(|f| f.storage_key != storage_key),
            "duplicate storage key '{storage_key}' on {}",
            E::ENTITY_NAME
        );

        field.bind(ident);
        self.fields.push(FieldModel {
            ident,
            storage_key,
            validator: V::KIND,
        });

        field
    }

    #[must_use]
    pub fn finish(self) -> EntityModel {
        tracing::debug!(
            entity = E::ENTITY_NAME,
            fields = self.fields.len(),
            "registered entity"
        );
        sink::record(MetricsEvent::EntityRegistered {
            entity_name: E::ENTITY_NAME,
            fields: self.fields.len() as u64,
        });

        EntityModel {
            entity_name: E::ENTITY_NAME,
            fields: FieldList(self.fields),
        }
    }
}

impl<E: Entity> Default for EntityRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
