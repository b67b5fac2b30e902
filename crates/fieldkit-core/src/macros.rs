/// Implement `ValidatorKind` using the type name as the kind.
#[macro_export]
macro_rules! impl_validator_kind {
    ($($type:ident),* $(,)?) => {
        $(
            impl $crate::traits::ValidatorKind for $type {
                const KIND: &'static str = stringify!($type);
            }
        )*
    };
}

/// Declare an entity: the record struct, its field descriptor table, and
/// the one-time registration that binds storage keys and records field
/// order.
///
/// ```ignore
/// entity! {
///     #[derive(Clone, Debug)]
///     pub struct LineItem : LineItemFields {
///         description: String => NonBlank,
///         weight: Decimal => Quantity,
///         code: String => MaxLen = MaxLen::new(8),
///     }
/// }
/// ```
///
/// Validators without an `= init` expression are built with `Default`.
#[macro_export]
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $fields:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $validator:ty $( = $init:expr )?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            store: $crate::store::FieldStore,
        }

        #[doc = concat!("Field descriptors of `", stringify!($name), "`, in declaration order.")]
        $vis struct $fields {
            $(
                $(#[$fmeta])*
                pub $field: $crate::field::Field<$name, $ty, $validator>,
            )+
        }

        impl $name {
            fn entity_registry() -> &'static ($fields, $crate::model::EntityModel) {
                static REGISTRY: ::std::sync::OnceLock<($fields, $crate::model::EntityModel)> =
                    ::std::sync::OnceLock::new();

                REGISTRY.get_or_init(|| {
                    let mut registry = $crate::model::EntityRegistry::<$name>::new();
                    // struct literal fields evaluate in source order
                    let fields = $fields {
                        $(
                            $field: registry.declare(
                                stringify!($field),
                                $crate::field::Field::new(
                                    $crate::__entity_validator!($validator $(, $init)?)
                                ),
                            ),
                        )+
                    };

                    (fields, registry.finish())
                })
            }

            /// Type-level field descriptors; no instance needed.
            #[must_use]
            $vis fn fields() -> &'static $fields {
                &Self::entity_registry().0
            }

            /// Instance with no slots filled. Constructors fill every field
            /// before handing it out.
            #[allow(dead_code)]
            pub(crate) const fn blank() -> Self {
                Self {
                    store: $crate::store::FieldStore::new(),
                }
            }
        }

        impl $crate::traits::Entity for $name {
            const ENTITY_NAME: &'static str = stringify!($name);

            fn model() -> &'static $crate::model::EntityModel {
                &Self::entity_registry().1
            }

            fn store(&self) -> &$crate::store::FieldStore {
                &self.store
            }

            fn store_mut(&mut self) -> &mut $crate::store::FieldStore {
                &mut self.store
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entity_validator {
    ($validator:ty) => {
        <$validator as ::core::default::Default>::default()
    };
    ($validator:ty, $init:expr) => {
        $init
    };
}
