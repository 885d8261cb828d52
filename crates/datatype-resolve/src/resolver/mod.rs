//! Description-to-type resolution.
//!
//! [`TypeResolver`] owns a [`TypeRegistry`] and orchestrates the resolution
//! pipeline: parse the description, look up the lowercased name, instantiate
//! the winning implementation (or the fallback), then apply positional
//! parameters and properties.
//!
//! Resolvers are explicit values owned by the caller's context. A
//! process-wide default is available through [`default_resolver`] for
//! ergonomic parity with tooling that has no context to thread one through;
//! [`reset_default_resolver`] swaps the whole resolver reference atomically,
//! so concurrent callers see either the fully-old or the fully-new registry.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::trace;

use crate::core::registry::{DescriptorSummary, TypeDescriptor, TypeRegistry};
use crate::core::traits::{DataType, DescriptorProvider, Dialect};
use crate::core::value::ScalarValue;
use crate::error::{ResolveError, Result};
use crate::parse::parse_description;
use crate::types::{builtin_descriptors, UnknownType};

/// Maps textual column-type descriptions to configured type instances.
#[derive(Debug, Default)]
pub struct TypeResolver {
    registry: TypeRegistry,
}

impl TypeResolver {
    /// Create a resolver with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with the built-in descriptor table registered.
    pub fn with_builtins() -> Self {
        let resolver = Self::new();
        for descriptor in builtin_descriptors() {
            resolver.registry.register(descriptor);
        }
        resolver
    }

    /// Create a resolver from an external descriptor source.
    ///
    /// # Errors
    ///
    /// A provider fault maps to [`ResolveError::Initialization`] and no
    /// resolver value exists, so a failed discovery can never serve
    /// resolutions.
    pub fn from_provider(provider: &dyn DescriptorProvider) -> Result<Self> {
        let descriptors = provider
            .descriptors()
            .map_err(ResolveError::Initialization)?;
        let resolver = Self::new();
        for descriptor in descriptors {
            resolver.registry.register(descriptor);
        }
        Ok(resolver)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Register one type implementation descriptor.
    pub fn register(&self, descriptor: TypeDescriptor) {
        self.registry.register(descriptor);
    }

    /// Remove every implementation registered under `name`.
    pub fn unregister(&self, name: &str) -> bool {
        self.registry.unregister(name)
    }

    /// Read-only snapshot of the registry.
    pub fn list(&self) -> BTreeMap<String, Vec<DescriptorSummary>> {
        self.registry.list()
    }

    /// Resolve a description string to a configured type instance.
    ///
    /// Unrecognized names do not fail; they resolve to an [`UnknownType`]
    /// carrying the original, case-preserved name.
    ///
    /// # Errors
    ///
    /// Fails with [`ResolveError::MalformedProperty`] for a property token
    /// without a `:` separator, and [`ResolveError::UnsettableProperty`]
    /// when the resolved type does not expose a named property.
    pub fn from_description(&self, description: &str) -> Result<Box<dyn DataType>> {
        let parsed = parse_description(description)?;

        let mut resolved = match self.registry.lookup(&parsed.name) {
            Some(descriptor) => descriptor.instantiate(),
            None => {
                trace!(name = %parsed.name, "no registered implementation, using fallback");
                UnknownType::named(&parsed.name)
            }
        };

        for parameter in &parsed.parameters {
            resolved.add_parameter(parameter);
        }
        for (name, value) in &parsed.properties {
            resolved.set_property(name, value)?;
        }

        Ok(resolved)
    }

    /// Resolve the type a scalar value belongs under.
    ///
    /// The value's variant maps to a canonical type name which is then fed
    /// through [`from_description`](TypeResolver::from_description); no
    /// per-dialect value inference happens here.
    pub fn from_value(&self, value: &ScalarValue) -> Result<Box<dyn DataType>> {
        self.from_description(value.type_name())
    }

    /// Literal text for boolean `true` under the given dialect.
    pub fn true_literal(&self, dialect: &dyn Dialect) -> Result<String> {
        Ok(self
            .from_description("boolean")?
            .sql_literal(&ScalarValue::Bool(true), dialect))
    }

    /// Literal text for boolean `false` under the given dialect.
    pub fn false_literal(&self, dialect: &dyn Dialect) -> Result<String> {
        Ok(self
            .from_description("boolean")?
            .sql_literal(&ScalarValue::Bool(false), dialect))
    }
}

static DEFAULT_RESOLVER: OnceLock<RwLock<Arc<TypeResolver>>> = OnceLock::new();

fn default_cell() -> &'static RwLock<Arc<TypeResolver>> {
    DEFAULT_RESOLVER.get_or_init(|| RwLock::new(Arc::new(TypeResolver::with_builtins())))
}

/// Process-wide default resolver, built from the built-in descriptor table
/// on first use.
pub fn default_resolver() -> Arc<TypeResolver> {
    Arc::clone(&default_cell().read())
}

/// Discard the process-wide default and rebuild it from the built-in table.
///
/// The swap replaces the whole resolver reference: callers holding a
/// previously obtained handle keep resolving against the old registry, and
/// new [`default_resolver`] calls see only the fresh one. No caller ever
/// observes a partially rebuilt registry.
pub fn reset_default_resolver() {
    *default_cell().write() = Arc::new(TypeResolver::with_builtins());
}
