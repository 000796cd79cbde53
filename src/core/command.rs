//! Command descriptors - the two script-level command variants.
//!
//! A platform capture describes each exported command either as a cmdlet
//! (compiled, always advanced binding) or a function (script-defined,
//! advanced binding only when declared). Both share the same descriptor
//! contract: name, parameter sets, parameters, and output types.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Which kind of export a command descriptor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOrigin {
    Cmdlet,
    Function,
}

/// A single parameter of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterDescriptor {
    /// Fully-qualified type name of the parameter, if captured.
    pub type_name: Option<String>,
    /// Whether the parameter is added dynamically at runtime.
    pub dynamic: bool,
}

/// Descriptor fields shared by both command variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandMetadata {
    /// Parameter set names.
    pub parameter_sets: Vec<String>,
    /// The default parameter set, when one is declared.
    pub default_parameter_set: Option<String>,
    /// Declared output type names.
    pub output_types: Vec<String>,
    /// Parameters by name (original casing).
    pub parameters: BTreeMap<String, ParameterDescriptor>,
    /// Parameter alias -> target parameter name.
    pub parameter_aliases: BTreeMap<String, String>,
}

/// A compiled command export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdletDescriptor {
    name: String,
    metadata: CommandMetadata,
}

impl CmdletDescriptor {
    pub fn new(name: impl Into<String>, metadata: CommandMetadata) -> Self {
        CmdletDescriptor {
            name: name.into(),
            metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }
}

/// A script-defined command export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    name: String,
    metadata: CommandMetadata,
    cmdlet_binding: bool,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, metadata: CommandMetadata, cmdlet_binding: bool) -> Self {
        FunctionDescriptor {
            name: name.into(),
            metadata,
            cmdlet_binding,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    /// Whether the function declared advanced (cmdlet-style) binding.
    pub fn cmdlet_binding(&self) -> bool {
        self.cmdlet_binding
    }
}

/// One command as seen by the lookup table: either variant, shared.
///
/// Clones are links to the same underlying descriptor, so a table entry
/// copied for an alias refers to the identical command, not a duplicate.
#[derive(Debug, Clone)]
pub enum CommandDescriptor {
    Cmdlet(Arc<CmdletDescriptor>),
    Function(Arc<FunctionDescriptor>),
}

impl CommandDescriptor {
    pub fn name(&self) -> &str {
        match self {
            CommandDescriptor::Cmdlet(c) => c.name(),
            CommandDescriptor::Function(f) => f.name(),
        }
    }

    pub fn origin(&self) -> CommandOrigin {
        match self {
            CommandDescriptor::Cmdlet(_) => CommandOrigin::Cmdlet,
            CommandDescriptor::Function(_) => CommandOrigin::Function,
        }
    }

    fn metadata(&self) -> &CommandMetadata {
        match self {
            CommandDescriptor::Cmdlet(c) => c.metadata(),
            CommandDescriptor::Function(f) => f.metadata(),
        }
    }

    pub fn parameter_sets(&self) -> &[String] {
        &self.metadata().parameter_sets
    }

    pub fn default_parameter_set(&self) -> Option<&str> {
        self.metadata().default_parameter_set.as_deref()
    }

    pub fn output_types(&self) -> &[String] {
        &self.metadata().output_types
    }

    pub fn parameters(&self) -> &BTreeMap<String, ParameterDescriptor> {
        &self.metadata().parameters
    }

    pub fn parameter_aliases(&self) -> &BTreeMap<String, String> {
        &self.metadata().parameter_aliases
    }

    /// Whether the command uses advanced binding.
    ///
    /// Cmdlets always do; functions only when they declared it.
    pub fn is_advanced_binding(&self) -> bool {
        match self {
            CommandDescriptor::Cmdlet(_) => true,
            CommandDescriptor::Function(f) => f.cmdlet_binding(),
        }
    }

    /// Whether two table entries refer to the same underlying descriptor.
    pub fn same_descriptor(&self, other: &CommandDescriptor) -> bool {
        match (self, other) {
            (CommandDescriptor::Cmdlet(a), CommandDescriptor::Cmdlet(b)) => Arc::ptr_eq(a, b),
            (CommandDescriptor::Function(a), CommandDescriptor::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
