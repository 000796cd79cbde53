//! Profile - the immutable root of one platform capture.
//!
//! A profile is built once from a decoded wire document and never mutated
//! afterwards. Construction is also where version-string keys are parsed,
//! so a document with a bad version never produces a partially built
//! profile.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::codec::wire::{CommandObject, ModuleObject, ProfileDocument};
use crate::core::command::{
    CmdletDescriptor, CommandMetadata, FunctionDescriptor, ParameterDescriptor,
};
use crate::core::module::ModuleDescriptor;
use crate::core::native::NativeCommandDescriptor;
use crate::core::platform::PlatformInfo;
use crate::core::types::TypeCatalog;
use crate::core::version::{PlatformVersion, VersionParseError};
use crate::util::caseless::CaselessMap;

/// All versions of one module, ordered by version.
pub type ModuleVersions = BTreeMap<PlatformVersion, ModuleDescriptor>;

/// Everything one platform capture says is available: types, modules keyed
/// by name then version, and native commands.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    types: TypeCatalog,
    modules: CaselessMap<ModuleVersions>,
    native_commands: CaselessMap<Vec<Arc<NativeCommandDescriptor>>>,
    platform: Option<PlatformInfo>,
}

impl Profile {
    /// Build a profile from a decoded wire document.
    ///
    /// Replaces every raw module leaf with a `ModuleDescriptor` (module
    /// names indexed case-insensitively, versions kept separate per
    /// release) and parses every version string. The only way this fails
    /// is an unparsable version.
    pub fn from_document(document: ProfileDocument) -> Result<Profile, VersionParseError> {
        let types = TypeCatalog::new(
            document.types.names,
            document.types.accelerators.into_iter(),
        );

        let mut modules: CaselessMap<ModuleVersions> = CaselessMap::new();
        for (module_name, versions) in document.modules {
            let mut by_version = ModuleVersions::new();
            for (version_str, module_data) in versions {
                let version: PlatformVersion = version_str.parse()?;
                by_version.insert(
                    version,
                    build_module(&module_name, version, module_data),
                );
            }
            modules.insert(module_name, by_version);
        }

        let mut native_commands: CaselessMap<Vec<Arc<NativeCommandDescriptor>>> =
            CaselessMap::new();
        for (name, entries) in document.native_commands {
            let mut descriptors = Vec::with_capacity(entries.len());
            for entry in entries {
                let version = match entry.version {
                    Some(v) => Some(v.parse()?),
                    None => None,
                };
                descriptors.push(Arc::new(NativeCommandDescriptor::new(
                    name.clone(),
                    entry.path,
                    version,
                )));
            }
            native_commands.insert(name, descriptors);
        }

        debug!(
            modules = modules.len(),
            types = types.type_count(),
            native_commands = native_commands.len(),
            "built profile"
        );

        Ok(Profile {
            types,
            modules,
            native_commands,
            platform: document.platform,
        })
    }

    /// The type catalog of the platform.
    pub fn types(&self) -> &TypeCatalog {
        &self.types
    }

    /// Modules by name (case-insensitive), then by version.
    pub fn modules(&self) -> &CaselessMap<ModuleVersions> {
        &self.modules
    }

    /// All versions of one module, if the platform has it.
    pub fn get_module(&self, name: &str) -> Option<&ModuleVersions> {
        self.modules.get(name)
    }

    /// Native commands by name (case-insensitive).
    pub fn native_commands(&self) -> &CaselessMap<Vec<Arc<NativeCommandDescriptor>>> {
        &self.native_commands
    }

    /// Metadata about the captured installation, when recorded.
    pub fn platform(&self) -> Option<&PlatformInfo> {
        self.platform.as_ref()
    }

    /// Iterate over every module descriptor across all names and versions.
    pub fn all_module_versions(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.values().flat_map(|versions| versions.values())
    }
}

fn build_module(name: &str, version: PlatformVersion, data: ModuleObject) -> ModuleDescriptor {
    let cmdlets = data
        .cmdlets
        .into_iter()
        .map(|(cmdlet_name, object)| {
            let descriptor = Arc::new(CmdletDescriptor::new(
                cmdlet_name.clone(),
                build_metadata(&object),
            ));
            (cmdlet_name, descriptor)
        })
        .collect();

    let functions = data
        .functions
        .into_iter()
        .map(|(function_name, object)| {
            let cmdlet_binding = object.cmdlet_binding;
            let descriptor = Arc::new(FunctionDescriptor::new(
                function_name.clone(),
                build_metadata(&object),
                cmdlet_binding,
            ));
            (function_name, descriptor)
        })
        .collect();

    ModuleDescriptor::new(name, version, cmdlets, functions, data.aliases)
}

fn build_metadata(object: &CommandObject) -> CommandMetadata {
    CommandMetadata {
        parameter_sets: object.parameter_sets.clone(),
        default_parameter_set: object.default_parameter_set.clone(),
        output_types: object.output_types.clone(),
        parameters: object
            .parameters
            .iter()
            .map(|(name, p)| {
                (
                    name.clone(),
                    ParameterDescriptor {
                        type_name: p.type_name.clone(),
                        dynamic: p.dynamic,
                    },
                )
            })
            .collect(),
        parameter_aliases: object.parameter_aliases.clone(),
    }
}
