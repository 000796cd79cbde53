//! Type catalog - available types and type accelerators.
//!
//! Answers whether a fully-qualified type name exists on the platform and
//! resolves short accelerator names to their full form. All matching is
//! case-insensitive.

use crate::util::caseless::{CaselessMap, CaselessSet};

/// The types and type accelerators available on one platform.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    names: CaselessSet,
    accelerators: CaselessMap<String>,
}

impl TypeCatalog {
    /// Build a catalog from fully-qualified type names and
    /// accelerator -> type-name pairs.
    pub fn new(
        names: impl IntoIterator<Item = String>,
        accelerators: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        TypeCatalog {
            names: names.into_iter().collect(),
            accelerators: accelerators.into_iter().collect(),
        }
    }

    /// Whether the fully-qualified type name is available.
    pub fn has_type(&self, full_name: &str) -> bool {
        self.names.contains(full_name)
    }

    /// Resolve an accelerator to its fully-qualified type name.
    pub fn resolve_accelerator(&self, accelerator: &str) -> Option<&str> {
        self.accelerators.get(accelerator).map(String::as_str)
    }

    /// Whether the name is usable as a type on this platform, either as a
    /// fully-qualified name or as an accelerator.
    pub fn is_available(&self, name: &str) -> bool {
        self.has_type(name) || self.accelerators.contains(name)
    }

    /// Iterate over the fully-qualified type names.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter()
    }

    /// Iterate over `(accelerator, type_name)` pairs.
    pub fn accelerators(&self) -> impl Iterator<Item = (&str, &str)> {
        self.accelerators.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of fully-qualified type names.
    pub fn type_count(&self) -> usize {
        self.names.len()
    }

    /// Number of accelerators.
    pub fn accelerator_count(&self) -> usize {
        self.accelerators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.accelerators.is_empty()
    }
}
