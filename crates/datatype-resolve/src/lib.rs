//! # datatype-resolve
//!
//! Column-type resolution for database schema migration tooling.
//!
//! Maps raw textual column-type descriptions (from changelogs or live
//! schema introspection) to concrete, parameterized type implementations:
//!
//! - **Description grammar** `name(params){props}` parsed in one lexical pass
//! - **Priority-ordered registry** of competing implementations per name,
//!   with case-insensitive lookup across canonical names and aliases
//! - **Configured instances** carrying positional parameters and properties
//! - **Fallback representation** preserving unrecognized names instead of
//!   failing
//!
//! ## Example
//!
//! ```rust
//! use datatype_resolve::{AnsiDialect, TypeResolver};
//!
//! let resolver = TypeResolver::with_builtins();
//!
//! let ty = resolver.from_description("VARCHAR(255)")?;
//! assert_eq!(ty.name(), "varchar");
//! assert_eq!(ty.parameters(), ["255"]);
//!
//! let unknown = resolver.from_description("frobnicate")?;
//! assert_eq!(unknown.name(), "frobnicate");
//!
//! assert_eq!(resolver.true_literal(&AnsiDialect)?, "TRUE");
//! # Ok::<(), datatype_resolve::ResolveError>(())
//! ```

pub mod core;
pub mod error;
pub mod parse;
pub mod resolver;
pub mod types;

// Re-exports for convenient access
pub use crate::core::{
    AnsiDialect, DataType, DescriptorProvider, DescriptorSummary, Dialect, ScalarValue,
    TypeConfig, TypeConstructor, TypeDescriptor, TypeRegistry, PRIORITY_DEFAULT, PRIORITY_DIALECT,
};
pub use error::{BoxError, ResolveError, Result};
pub use parse::{parse_description, ParsedDescription};
pub use resolver::{default_resolver, reset_default_resolver, TypeResolver};
pub use types::{builtin_descriptors, UnknownType};
