//! Core traits for type resolution.
//!
//! This module defines the seams between the resolver and its collaborators:
//!
//! - [`DataType`]: the surface of a resolved, configurable type instance
//! - [`Dialect`]: opaque dialect context consulted for literal rendering
//! - [`DescriptorProvider`]: construction-time source of type descriptors
//!
//! # Design Patterns
//!
//! - **Strategy**: `Dialect` implementations provide interchangeable literal
//!   rendering without the resolver interpreting them
//! - **Template Method**: `DataType` defaults define the common behavior;
//!   implementations override only what differs

use std::collections::BTreeMap;

use crate::core::registry::TypeDescriptor;
use crate::core::value::ScalarValue;
use crate::error::{BoxError, ResolveError, Result};

/// Priority of the built-in, database-agnostic implementations.
pub const PRIORITY_DEFAULT: i32 = 1;

/// Priority of database-specific overrides of a built-in type.
pub const PRIORITY_DIALECT: i32 = 5;

/// Dialect context consulted when rendering values as SQL literals.
///
/// Implemented by callers; the resolver core never interprets the context
/// beyond handing it to the resolved type. Dialect-specific value
/// serialization lives with those implementations, not here.
pub trait Dialect: Send + Sync {
    /// Dialect identifier (e.g. "postgres", "mssql").
    fn name(&self) -> &str;

    /// Literal text for a boolean value in this dialect.
    fn boolean_literal(&self, value: bool) -> String {
        if value {
            "TRUE".to_string()
        } else {
            "FALSE".to_string()
        }
    }

    /// Quote a string literal, escaping embedded quotes.
    fn quote_literal(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }
}

/// Plain ANSI dialect using the default literal rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDialect;

impl Dialect for AnsiDialect {
    fn name(&self) -> &str {
        "ansi"
    }
}

/// Source of type descriptors at resolver construction time.
///
/// Stands in for an external plugin-discovery mechanism. A provider fault is
/// fatal to the whole resolver; see
/// [`TypeResolver::from_provider`](crate::resolver::TypeResolver::from_provider).
pub trait DescriptorProvider {
    /// Enumerate the descriptors to register.
    fn descriptors(&self) -> std::result::Result<Vec<TypeDescriptor>, BoxError>;
}

/// A resolved, configurable column type implementation.
///
/// Instances are created fresh for every resolution call, configured with
/// positional parameters and properties, and treated as immutable by
/// downstream consumers thereafter. Implementations are registered through
/// a [`TypeDescriptor`] built from their default-constructed state.
pub trait DataType: Send + Sync + std::fmt::Debug {
    /// Concrete implementation name used in error messages (e.g. `VarcharType`).
    fn kind(&self) -> &'static str;

    /// Canonical lowercase name this implementation registers under.
    fn name(&self) -> &str;

    /// Secondary names resolving to the same implementation.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Rank among implementations sharing a name; higher wins.
    fn priority(&self) -> i32 {
        PRIORITY_DEFAULT
    }

    /// Positional parameters applied from the `(..)` block, in order.
    fn parameters(&self) -> &[String];

    /// Append one positional parameter.
    fn add_parameter(&mut self, raw: &str);

    /// Properties applied from the `{..}` block.
    fn properties(&self) -> &BTreeMap<String, String>;

    /// Property names this implementation accepts in a `{name:value}` block.
    fn settable_properties(&self) -> &'static [&'static str] {
        &[]
    }

    /// Apply one `{name:value}` assignment.
    ///
    /// # Errors
    ///
    /// Fails with [`ResolveError::UnsettableProperty`] when `name` is not
    /// among [`settable_properties`](DataType::settable_properties).
    fn set_property(&mut self, name: &str, value: &str) -> Result<()>;

    /// Render a scalar value as a SQL literal for the given dialect.
    fn sql_literal(&self, value: &ScalarValue, dialect: &dyn Dialect) -> String {
        value.render(dialect)
    }

    /// Render the configured form back to description text, e.g. `varchar(10)`.
    fn to_description(&self) -> String {
        if self.parameters().is_empty() {
            self.name().to_string()
        } else {
            format!("{}({})", self.name(), self.parameters().join(","))
        }
    }
}

/// Parameter and property storage shared by `DataType` implementations.
///
/// Implementations embed one `TypeConfig` and delegate their accumulator
/// methods to it; the settable-property check lives here so every type
/// reports unknown properties the same way.
#[derive(Debug, Clone, Default)]
pub struct TypeConfig {
    parameters: Vec<String>,
    properties: BTreeMap<String, String>,
}

impl TypeConfig {
    /// Positional parameters collected so far.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Append one positional parameter.
    pub fn push_parameter(&mut self, raw: &str) {
        self.parameters.push(raw.to_string());
    }

    /// Properties collected so far.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Store a property assignment if `allowed` lists it.
    ///
    /// # Errors
    ///
    /// Fails with [`ResolveError::UnsettableProperty`] naming the property
    /// and `kind` when the property is not allowed.
    pub fn set_property(
        &mut self,
        allowed: &[&str],
        kind: &'static str,
        name: &str,
        value: &str,
    ) -> Result<()> {
        if !allowed.contains(&name) {
            return Err(ResolveError::unsettable_property(name, kind));
        }
        self.properties.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
