//! Wire document shapes for the profile format.
//!
//! The wire format is a JSON document with PascalCase field names. `Types`
//! and `Modules` are required at the top level; everything else is
//! optional. Version fields travel as dotted strings and are parsed during
//! profile construction, not here, so the error taxonomy can tell a
//! malformed document from a malformed version.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::platform::PlatformInfo;
use crate::core::profile::Profile;

/// Top-level profile document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileDocument {
    /// Available types and accelerators. Required.
    pub types: TypesObject,

    /// Module name -> version string -> module exports. Required.
    pub modules: BTreeMap<String, BTreeMap<String, ModuleObject>>,

    /// Native command name -> installations. Optional; absent means the
    /// collector recorded none.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub native_commands: BTreeMap<String, Vec<NativeCommandObject>>,

    /// Captured-installation metadata. Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformInfo>,
}

/// The `Types` block: type names plus accelerator mappings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypesObject {
    /// Fully-qualified type names.
    #[serde(default)]
    pub names: Vec<String>,

    /// Accelerator name -> fully-qualified type name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub accelerators: BTreeMap<String, String>,
}

/// One module version's exports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleObject {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cmdlets: BTreeMap<String, CommandObject>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub functions: BTreeMap<String, CommandObject>,

    /// Alias name -> target command name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

/// One command export (cmdlet or function).
///
/// `CmdletBinding` is only meaningful for functions; cmdlets ignore it
/// (they always bind as advanced commands).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandObject {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter_sets: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_parameter_set: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_types: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, ParameterObject>,

    /// Parameter alias -> target parameter name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameter_aliases: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cmdlet_binding: bool,
}

/// One parameter of a command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterObject {
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "Type")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dynamic: bool,
}

/// One recorded installation of a native command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NativeCommandObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Dotted version string, when the collector could determine one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ProfileDocument {
    /// Lower a built profile back to its wire shape.
    ///
    /// The inverse of `Profile::from_document` up to collection ordering:
    /// versions become dotted strings again and descriptors flatten back to
    /// command objects.
    pub fn from_profile(profile: &Profile) -> ProfileDocument {
        let types = TypesObject {
            names: profile.types().type_names().map(str::to_string).collect(),
            accelerators: profile
                .types()
                .accelerators()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };

        let mut modules: BTreeMap<String, BTreeMap<String, ModuleObject>> = BTreeMap::new();
        for (module_name, versions) in profile.modules().iter() {
            let mut by_version = BTreeMap::new();
            for (version, descriptor) in versions {
                let mut object = ModuleObject::default();
                for (name, cmdlet) in descriptor.cmdlets() {
                    object
                        .cmdlets
                        .insert(name.clone(), command_object(cmdlet.metadata(), false));
                }
                for (name, function) in descriptor.functions() {
                    object.functions.insert(
                        name.clone(),
                        command_object(function.metadata(), function.cmdlet_binding()),
                    );
                }
                object.aliases = descriptor.aliases().clone();
                by_version.insert(version.to_string(), object);
            }
            modules.insert(module_name.to_string(), by_version);
        }

        let mut native_commands = BTreeMap::new();
        for (name, descriptors) in profile.native_commands().iter() {
            let entries = descriptors
                .iter()
                .map(|d| NativeCommandObject {
                    path: d.path().map(str::to_string),
                    version: d.version().map(|v| v.to_string()),
                })
                .collect();
            native_commands.insert(name.to_string(), entries);
        }

        ProfileDocument {
            types,
            modules,
            native_commands,
            platform: profile.platform().cloned(),
        }
    }
}

fn command_object(
    metadata: &crate::core::command::CommandMetadata,
    cmdlet_binding: bool,
) -> CommandObject {
    CommandObject {
        parameter_sets: metadata.parameter_sets.clone(),
        default_parameter_set: metadata.default_parameter_set.clone(),
        output_types: metadata.output_types.clone(),
        parameters: metadata
            .parameters
            .iter()
            .map(|(name, p)| {
                (
                    name.clone(),
                    ParameterObject {
                        type_name: p.type_name.clone(),
                        dynamic: p.dynamic,
                    },
                )
            })
            .collect(),
        parameter_aliases: metadata.parameter_aliases.clone(),
        cmdlet_binding,
    }
}
