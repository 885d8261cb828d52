//! Fallback representation for unrecognized type names.

use std::collections::BTreeMap;

use crate::core::traits::{DataType, TypeConfig};
use crate::error::Result;

/// Degenerate type returned when no registered implementation matches a
/// parsed name.
///
/// Keeps the original, case-preserved name and accepts positional
/// parameters, but exposes no settable properties. Never registered: it
/// does not compete in the priority registry.
#[derive(Debug)]
pub struct UnknownType {
    name: String,
    cfg: TypeConfig,
}

impl UnknownType {
    /// Fallback instance carrying `name` exactly as the caller wrote it.
    pub fn named(name: impl Into<String>) -> Box<dyn DataType> {
        Box::new(Self {
            name: name.into(),
            cfg: TypeConfig::default(),
        })
    }
}

impl DataType for UnknownType {
    fn kind(&self) -> &'static str {
        "UnknownType"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &[String] {
        self.cfg.parameters()
    }

    fn add_parameter(&mut self, raw: &str) {
        self.cfg.push_parameter(raw);
    }

    fn properties(&self) -> &BTreeMap<String, String> {
        self.cfg.properties()
    }

    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.cfg
            .set_property(self.settable_properties(), self.kind(), name, value)
    }
}
