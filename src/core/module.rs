//! Module descriptors - one version of one module.
//!
//! A module version exports cmdlets, functions, and aliases. Versions of the
//! same module are never merged: a module may add, remove, or change
//! commands across releases, so each version keeps an independent command
//! set.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::command::{CmdletDescriptor, FunctionDescriptor};
use crate::core::version::PlatformVersion;

/// The exports of one module at one version.
///
/// Names within a module are unique under case-insensitive comparison; that
/// is a property of captured input, not something enforced here. Original
/// casing is preserved throughout.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    name: String,
    version: PlatformVersion,
    cmdlets: BTreeMap<String, Arc<CmdletDescriptor>>,
    functions: BTreeMap<String, Arc<FunctionDescriptor>>,
    aliases: BTreeMap<String, String>,
}

impl ModuleDescriptor {
    /// Assemble a module descriptor from its exports.
    pub fn new(
        name: impl Into<String>,
        version: PlatformVersion,
        cmdlets: BTreeMap<String, Arc<CmdletDescriptor>>,
        functions: BTreeMap<String, Arc<FunctionDescriptor>>,
        aliases: BTreeMap<String, String>,
    ) -> Self {
        ModuleDescriptor {
            name: name.into(),
            version,
            cmdlets,
            functions,
            aliases,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> PlatformVersion {
        self.version
    }

    /// Cmdlet exports by name.
    pub fn cmdlets(&self) -> &BTreeMap<String, Arc<CmdletDescriptor>> {
        &self.cmdlets
    }

    /// Function exports by name.
    pub fn functions(&self) -> &BTreeMap<String, Arc<FunctionDescriptor>> {
        &self.functions
    }

    /// Alias name -> target command name.
    ///
    /// Aliases carry no descriptor of their own; they are resolved against
    /// the full command set when the lookup table is built, not at load
    /// time.
    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    /// Total number of direct (non-alias) command exports.
    pub fn command_count(&self) -> usize {
        self.cmdlets.len() + self.functions.len()
    }
}
