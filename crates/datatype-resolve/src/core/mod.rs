//! Core abstractions for type resolution.
//!
//! - [`traits`]: the `DataType` resolved-instance surface plus the dialect
//!   and discovery collaborator traits
//! - [`value`]: scalar values for literal rendering and value-based lookup
//! - [`registry`]: the priority-ordered descriptor registry

pub mod registry;
pub mod traits;
pub mod value;

// Re-export commonly used types for convenience
pub use registry::{DescriptorSummary, TypeConstructor, TypeDescriptor, TypeRegistry};
pub use traits::{
    AnsiDialect, DataType, DescriptorProvider, Dialect, TypeConfig, PRIORITY_DEFAULT,
    PRIORITY_DIALECT,
};
pub use value::ScalarValue;
