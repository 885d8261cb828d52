//! Built-in data type implementations.
//!
//! Registration is an explicit table ([`builtin_descriptors`]) rather than
//! runtime discovery: adding a type means declaring it in one of the
//! submodules and adding its constructor entry to the table. The
//! [`UnknownType`] fallback is deliberately absent from the table; it never
//! competes in the registry.

mod misc;
mod numeric;
mod string;
mod temporal;
mod unknown;

pub use misc::{BlobType, UuidType, XmlType};
pub use numeric::{
    BigIntType, BooleanType, DecimalType, DoubleType, FloatType, IntType, SmallIntType,
    TinyIntType,
};
pub use string::{CharType, ClobType, NCharType, NVarcharType, VarcharType};
pub use temporal::{DateTimeType, DateType, TimeType};
pub use unknown::UnknownType;

use crate::core::registry::{TypeConstructor, TypeDescriptor};

/// Declare a parameter/property-carrying [`DataType`](crate::DataType)
/// implementation backed by a [`TypeConfig`](crate::TypeConfig).
macro_rules! declare_type {
    (
        $(#[$meta:meta])*
        $kind:ident {
            name: $name:literal,
            $(aliases: [$($alias:literal),* $(,)?],)?
            $(priority: $priority:expr,)?
            $(properties: [$($prop:literal),* $(,)?],)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $kind {
            cfg: $crate::core::traits::TypeConfig,
        }

        impl $kind {
            /// Fresh unconfigured instance, boxed for descriptor tables.
            pub fn boxed() -> Box<dyn $crate::core::traits::DataType> {
                Box::new(Self::default())
            }
        }

        impl $crate::core::traits::DataType for $kind {
            fn kind(&self) -> &'static str {
                stringify!($kind)
            }

            fn name(&self) -> &str {
                $name
            }

            $(
                fn aliases(&self) -> &'static [&'static str] {
                    &[$($alias),*]
                }
            )?

            $(
                fn priority(&self) -> i32 {
                    $priority
                }
            )?

            fn parameters(&self) -> &[String] {
                self.cfg.parameters()
            }

            fn add_parameter(&mut self, raw: &str) {
                self.cfg.push_parameter(raw);
            }

            fn properties(&self) -> &std::collections::BTreeMap<String, String> {
                self.cfg.properties()
            }

            $(
                fn settable_properties(&self) -> &'static [&'static str] {
                    &[$($prop),*]
                }
            )?

            fn set_property(&mut self, name: &str, value: &str) -> $crate::error::Result<()> {
                let allowed = $crate::core::traits::DataType::settable_properties(self);
                self.cfg.set_property(allowed, self.kind(), name, value)
            }
        }
    };
}
pub(crate) use declare_type;

/// Descriptor table for the built-in type implementations.
///
/// Probes one fresh instance per entry; the resulting descriptors carry the
/// lowercased canonical names and aliases the registry keys on.
pub fn builtin_descriptors() -> Vec<TypeDescriptor> {
    const BUILTINS: &[TypeConstructor] = &[
        BooleanType::boxed,
        TinyIntType::boxed,
        SmallIntType::boxed,
        IntType::boxed,
        BigIntType::boxed,
        FloatType::boxed,
        DoubleType::boxed,
        DecimalType::boxed,
        CharType::boxed,
        VarcharType::boxed,
        NCharType::boxed,
        NVarcharType::boxed,
        ClobType::boxed,
        DateType::boxed,
        TimeType::boxed,
        DateTimeType::boxed,
        BlobType::boxed,
        UuidType::boxed,
        XmlType::boxed,
    ];

    BUILTINS
        .iter()
        .map(|constructor| TypeDescriptor::probe(*constructor))
        .collect()
}
