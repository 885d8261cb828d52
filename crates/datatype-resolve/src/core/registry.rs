//! Priority-ordered registry of type descriptors.
//!
//! The registry maps each lowercased name (canonical names and aliases
//! alike) to an ordered bucket of competing implementations. Buckets keep a
//! stable total order: descending priority first, then registration
//! sequence, so equal-priority implementations are both retained and the
//! earlier registration wins resolution.
//!
//! Interior mutability lets callers share one registry across threads
//! without their own locking; `register` holds the write lock across the
//! whole read-modify-write, so concurrent registrations under the same name
//! cannot lose updates.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::core::traits::DataType;

/// Constructor for a fresh, unconfigured type instance.
pub type TypeConstructor = fn() -> Box<dyn DataType>;

/// Registration record for one type implementation.
///
/// Built by probing a fresh default instance for its canonical name,
/// aliases, and priority; immutable once registered.
#[derive(Clone)]
pub struct TypeDescriptor {
    kind: &'static str,
    name: String,
    aliases: Vec<String>,
    priority: i32,
    constructor: TypeConstructor,
}

impl TypeDescriptor {
    /// Build a descriptor by probing one fresh instance from `constructor`.
    ///
    /// The canonical name and every alias are lowercased here, so registry
    /// keys are lowercase by construction.
    pub fn probe(constructor: TypeConstructor) -> Self {
        let instance = constructor();
        Self {
            kind: instance.kind(),
            name: instance.name().to_lowercase(),
            aliases: instance
                .aliases()
                .iter()
                .map(|alias| alias.to_lowercase())
                .collect(),
            priority: instance.priority(),
            constructor,
        }
    }

    /// Implementation kind label (e.g. `VarcharType`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased aliases.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Rank among implementations sharing a name; higher wins.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Construct a fresh, unconfigured instance.
    pub fn instantiate(&self) -> Box<dyn DataType> {
        (self.constructor)()
    }

    /// Canonical name plus aliases, all lowercase.
    fn lookup_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Serializable summary of one registered implementation, for introspection
/// and diagnostics output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorSummary {
    /// Implementation kind label.
    pub kind: &'static str,
    /// Declared priority.
    pub priority: i32,
}

struct Entry {
    sequence: u64,
    descriptor: Arc<TypeDescriptor>,
}

#[derive(Default)]
struct RegistryInner {
    buckets: HashMap<String, Vec<Entry>>,
    next_sequence: u64,
}

/// Registry of competing type implementations keyed by lowercased name.
#[derive(Default)]
pub struct TypeRegistry {
    inner: RwLock<RegistryInner>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor under its canonical name and every alias.
    ///
    /// Re-registering an implementation kind already present under a name
    /// replaces that entry in place instead of producing a duplicate; its
    /// original registration sequence is kept, so bucket order is stable
    /// across repeated registrations.
    pub fn register(&self, descriptor: TypeDescriptor) {
        debug!(
            kind = descriptor.kind(),
            name = descriptor.name(),
            priority = descriptor.priority(),
            "registering data type"
        );
        let descriptor = Arc::new(descriptor);
        let mut inner = self.inner.write();
        inner.next_sequence += 1;
        let sequence = inner.next_sequence;

        for name in descriptor.lookup_names() {
            let bucket = inner.buckets.entry(name.to_string()).or_default();
            match bucket
                .iter_mut()
                .find(|entry| entry.descriptor.kind() == descriptor.kind())
            {
                Some(entry) => entry.descriptor = Arc::clone(&descriptor),
                None => bucket.push(Entry {
                    sequence,
                    descriptor: Arc::clone(&descriptor),
                }),
            }
            // Stable total order: priority descending, registration sequence
            // ascending. Equal-priority entries both survive.
            bucket.sort_by(|a, b| {
                b.descriptor
                    .priority()
                    .cmp(&a.descriptor.priority())
                    .then(a.sequence.cmp(&b.sequence))
            });
        }
    }

    /// Remove the entire bucket for `name`: every competing implementation
    /// registered under that name, not just one.
    ///
    /// Aliases are separate buckets and are not touched.
    pub fn unregister(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        let removed = self.inner.write().buckets.remove(&key).is_some();
        if removed {
            debug!(name = %key, "unregistered data type bucket");
        }
        removed
    }

    /// Highest-priority descriptor registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.inner
            .read()
            .buckets
            .get(&name.to_lowercase())
            .and_then(|bucket| bucket.first())
            .map(|entry| Arc::clone(&entry.descriptor))
    }

    /// Full ordered bucket for `name`, best candidate first.
    pub fn candidates(&self, name: &str) -> Vec<Arc<TypeDescriptor>> {
        self.inner
            .read()
            .buckets
            .get(&name.to_lowercase())
            .map(|bucket| {
                bucket
                    .iter()
                    .map(|entry| Arc::clone(&entry.descriptor))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any implementation is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .buckets
            .contains_key(&name.to_lowercase())
    }

    /// Read-only snapshot of the full mapping, buckets in resolution order.
    pub fn list(&self) -> BTreeMap<String, Vec<DescriptorSummary>> {
        self.inner
            .read()
            .buckets
            .iter()
            .map(|(name, bucket)| {
                let summaries = bucket
                    .iter()
                    .map(|entry| DescriptorSummary {
                        kind: entry.descriptor.kind(),
                        priority: entry.descriptor.priority(),
                    })
                    .collect();
                (name.clone(), summaries)
            })
            .collect()
    }

    /// Number of registered names (buckets).
    pub fn len(&self) -> usize {
        self.inner.read().buckets.len()
    }

    /// Whether no names are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().buckets.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        let mut names: Vec<&str> = inner.buckets.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TypeRegistry").field("names", &names).finish()
    }
}
