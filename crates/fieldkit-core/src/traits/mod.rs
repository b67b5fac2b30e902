use crate::{
    error::ValidateIssue,
    model::{EntityModel, FieldNames},
    store::FieldStore,
    value::Value,
};
use rust_decimal::Decimal;

// ============================================================================
// VALIDATION
// ============================================================================

///
/// ValidatorKind
///
/// Stable name of a validator rule. Prefixes every storage key the rule
/// guards (`"<KIND>#<field>"`), so it must not change once data exists.
///

pub trait ValidatorKind {
    const KIND: &'static str;
}

///
/// Validator
///
/// Checks a candidate and returns its normalized form.
/// Must be pure and idempotent: validating an already-valid value
/// returns that same value.
///

pub trait Validator<T>: ValidatorKind {
    fn validate(&self, value: T) -> Result<T, ValidateIssue>;
}

// ============================================================================
// ENTITIES
// ============================================================================

///
/// Entity
///
/// A record type whose fields are declared once through an `EntityRegistry`
/// and stored per instance in a `FieldStore`.
///
/// Normally implemented by the `entity!` macro.
///

pub trait Entity: Sized + 'static {
    const ENTITY_NAME: &'static str;

    /// Registered model; built on first use, read-only afterwards.
    fn model() -> &'static EntityModel;

    fn store(&self) -> &FieldStore;

    /// Raw storage access. Writes through here bypass validation.
    fn store_mut(&mut self) -> &mut FieldStore;

    /// Field names in declaration order. Every call starts from the top.
    #[must_use]
    fn iter_fields() -> FieldNames<'static> {
        Self::model().iter_fields()
    }

    /// Storage keys currently held by this instance, sorted.
    #[must_use]
    fn storage_keys(&self) -> Vec<&str> {
        self.store().sorted_keys()
    }
}

// ============================================================================
// FIELD VALUES
// ============================================================================

///
/// FieldValue
///
/// Conversion between a typed field and its stored `Value`.
///

pub trait FieldValue: Sized {
    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

// impl_field_value
#[macro_export]
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn to_value(&self) -> $crate::value::Value {
                    $crate::value::Value::$variant((*self).into())
                }

                fn from_value(value: &$crate::value::Value) -> Option<Self> {
                    match value {
                        $crate::value::Value::$variant(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value!(
    bool => Bool,
    Decimal => Decimal,
    f64 => Float64,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
);
