//! Native command lookup table.
//!
//! A flat index over the external executables a platform provides. No
//! alias layer and no version layering - a name maps straight to the
//! recorded installations.

use std::sync::Arc;

use tracing::debug;

use crate::core::native::NativeCommandDescriptor;
use crate::core::profile::Profile;
use crate::util::caseless::CaselessMap;

/// Case-insensitive index: native command name -> installations.
#[derive(Debug, Default)]
pub struct NativeCommandLookupTable {
    entries: CaselessMap<Vec<Arc<NativeCommandDescriptor>>>,
}

impl NativeCommandLookupTable {
    /// Build the table from a profile's native-command map.
    ///
    /// A profile with no native commands yields an empty, valid table.
    pub fn build(profile: &Profile) -> NativeCommandLookupTable {
        let mut entries = CaselessMap::new();
        for (name, descriptors) in profile.native_commands().iter() {
            entries.insert(name.to_string(), descriptors.clone());
        }

        debug!(names = entries.len(), "built native command lookup table");
        NativeCommandLookupTable { entries }
    }

    /// Look up every recorded installation of a native command.
    pub fn lookup(&self, name: &str) -> Option<&[Arc<NativeCommandDescriptor>]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Whether the platform has the native command, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    /// Number of distinct native command names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, installations)` pairs, sorted by folded name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Arc<NativeCommandDescriptor>])> {
        self.entries.iter().map(|(name, list)| (name, list.as_slice()))
    }
}
