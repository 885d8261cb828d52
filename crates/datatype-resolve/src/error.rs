//! Error types for the resolution library.
//!
//! Unrecognized type names are deliberately absent from the taxonomy: they
//! are not errors and resolve to the fallback representation instead. See
//! [`UnknownType`](crate::types::UnknownType).

use thiserror::Error;

/// Boxed fault from an external collaborator (descriptor discovery).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for type-resolution operations.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A `{name:value}` block referenced a property the resolved type does
    /// not expose.
    #[error("unknown property '{property}' for type {kind}")]
    UnsettableProperty {
        /// The property name as written in the description.
        property: String,
        /// Implementation kind of the resolved instance.
        kind: &'static str,
    },

    /// A property token had no `name:value` separator.
    #[error("malformed property assignment '{token}' (expected name:value)")]
    MalformedProperty { token: String },

    /// Descriptor discovery failed while constructing a resolver.
    ///
    /// Fatal to the whole resolver: construction returns this error and no
    /// resolver value exists to serve resolutions.
    #[error("type discovery failed: {0}")]
    Initialization(#[source] BoxError),
}

impl ResolveError {
    /// Create an UnsettableProperty error.
    pub fn unsettable_property(property: impl Into<String>, kind: &'static str) -> Self {
        ResolveError::UnsettableProperty {
            property: property.into(),
            kind,
        }
    }
}

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
