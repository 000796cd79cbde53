//! Runtime query façade.
//!
//! The single read API handed to comparison and reporting collaborators.
//! Owns one profile plus the two derived lookup tables, which are built on
//! first access and cached for the lifetime of the instance.
//!
//! There is deliberately no process-wide "current profile": each
//! `RuntimeQuery` is its own context, so concurrent queries against
//! different profiles cannot interfere.

use std::sync::OnceLock;

use crate::core::profile::{ModuleVersions, Profile};
use crate::core::types::TypeCatalog;
use crate::query::commands::CommandLookupTable;
use crate::query::natives::NativeCommandLookupTable;
use crate::util::caseless::CaselessMap;

/// Read-only query interface over one platform capture.
///
/// The lookup tables are memoized with single-initialization semantics:
/// under concurrent first access the first caller builds, everyone else
/// blocks until the build completes and then sees the identical table.
/// After that, everything is immutable and reads need no coordination.
pub struct RuntimeQuery {
    profile: Profile,
    commands: OnceLock<CommandLookupTable>,
    native_commands: OnceLock<NativeCommandLookupTable>,
}

impl RuntimeQuery {
    /// Wrap a built profile in a query façade.
    pub fn new(profile: Profile) -> RuntimeQuery {
        RuntimeQuery {
            profile,
            commands: OnceLock::new(),
            native_commands: OnceLock::new(),
        }
    }

    /// The underlying profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Types and type accelerators available on the platform.
    pub fn types(&self) -> &TypeCatalog {
        self.profile.types()
    }

    /// Modules by name (case-insensitive), then by version.
    pub fn modules(&self) -> &CaselessMap<ModuleVersions> {
        self.profile.modules()
    }

    /// The command lookup table, built on first access.
    pub fn commands(&self) -> &CommandLookupTable {
        self.commands
            .get_or_init(|| CommandLookupTable::build(&self.profile))
    }

    /// The native command lookup table, built on first access.
    pub fn native_commands(&self) -> &NativeCommandLookupTable {
        self.native_commands
            .get_or_init(|| NativeCommandLookupTable::build(&self.profile))
    }
}

impl std::fmt::Debug for RuntimeQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeQuery")
            .field("modules", &self.profile.modules().len())
            .field("commands_built", &self.commands.get().is_some())
            .field("natives_built", &self.native_commands.get().is_some())
            .finish()
    }
}
