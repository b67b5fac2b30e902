use crate::{
    error::{Error, FieldError, ValidateError},
    obs::sink::{self, MetricsEvent},
    traits::{Entity, FieldValue, Validator},
};
use std::{any::type_name, marker::PhantomData};

/// Storage key for a field guarded by validator `kind`.
#[must_use]
pub fn storage_key_for(kind: &str, ident: &str) -> String {
    format!("{kind}#{ident}")
}

///
/// Field
///
/// Descriptor for one validated field of entity `E`.
///
/// Every read and write of the field goes through here: writes are
/// validated before anything is stored, so a rejected write leaves the
/// previous value in place. One descriptor is shared by all instances
/// of `E`; only the storage key separates per-field data.
///

pub struct Field<E, T, V> {
    ident: Option<&'static str>,
    storage_key: Option<String>,
    validator: V,
    _marker: PhantomData<fn() -> (E, T)>,
}

impl<E, T, V> Field<E, T, V>
where
    E: Entity,
    T: FieldValue,
    V: Validator<T>,
{
    /// Unbound descriptor; the registry assigns its storage key.
    pub const fn new(validator: V) -> Self {
        Self {
            ident: None,
            storage_key: None,
            validator,
            _marker: PhantomData,
        }
    }

    pub fn with_storage_key(validator: V, storage_key: impl Into<String>) -> Self {
        Self {
            ident: None,
            storage_key: Some(storage_key.into()),
            validator,
            _marker: PhantomData,
        }
    }

    // bind
    // called once, by EntityRegistry::declare
    pub(crate) fn bind(&mut self, ident: &'static str) {
        self.ident = Some(ident);
        self.storage_key = Some(storage_key_for(V::KIND, ident));
    }

    #[must_use]
    pub const fn ident(&self) -> Option<&'static str> {
        self.ident
    }

    #[must_use]
    pub fn storage_key(&self) -> Option<&str> {
        self.storage_key.as_deref()
    }

    #[must_use]
    pub const fn validator_kind(&self) -> &'static str {
        V::KIND
    }

    /// Run the validator with this field's context attached, without storing.
    pub fn validate(&self, value: T) -> Result<T, ValidateError> {
        self.validator
            .validate(value)
            .map_err(|issue| ValidateError {
                entity: E::ENTITY_NAME,
                field: self.ident.unwrap_or_default(),
                storage_key: self.storage_key.clone().unwrap_or_default(),
                issue,
            })
    }

    pub fn try_get(&self, entity: &E) -> Result<T, FieldError> {
        let key = self.bound_key()?;
        let value = entity
            .store()
            .get_raw(key)
            .ok_or_else(|| FieldError::Unset {
                key: key.to_string(),
            })?;

        T::from_value(value).ok_or_else(|| FieldError::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>(),
            found: value.type_label(),
        })
    }

    /// Read the current value.
    ///
    /// # Panics
    /// If the slot is missing or holds the wrong type. Instances built
    /// through their constructor always have every slot filled.
    #[must_use]
    pub fn get(&self, entity: &E) -> T {
        self.try_get(entity)
            .unwrap_or_else(|e| panic!("{}: {e}", E::ENTITY_NAME))
    }

    /// Validate `value`, then store the normalized result.
    pub fn set(&self, entity: &mut E, value: T) -> Result<(), Error> {
        let key = self.bound_key()?;
        let field = self.ident.unwrap_or(key);

        match self.validate(value) {
            Ok(value) => {
                entity.store_mut().insert_raw(key, value.to_value());
                sink::record(MetricsEvent::FieldWrite {
                    entity_name: E::ENTITY_NAME,
                });

                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    entity = E::ENTITY_NAME,
                    field,
                    reason = %err,
                    "rejected field write"
                );
                sink::record(MetricsEvent::FieldRejected {
                    entity_name: E::ENTITY_NAME,
                });

                Err(err.into())
            }
        }
    }

    fn bound_key(&self) -> Result<&str, FieldError> {
        self.storage_key.as_deref().ok_or(FieldError::Unbound {
            entity: E::ENTITY_NAME,
        })
    }
}

impl<E, T, V> std::fmt::Debug for Field<E, T, V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("storage_key", &self.storage_key)
            .field("validator", &self.validator)
            .finish()
    }
}

///
/// TESTS
///
