//! Core data model for platform captures.
//!
//! This module contains the immutable entities a profile is made of:
//! - Platform versions (2-4 dotted numeric components)
//! - Command descriptors (cmdlets and functions)
//! - Module descriptors keyed by name and version
//! - Native command descriptors
//! - The type catalog and optional platform metadata
//! - The profile root that ties them together

pub mod command;
pub mod module;
pub mod native;
pub mod platform;
pub mod profile;
pub mod types;
pub mod version;

pub use command::{
    CmdletDescriptor, CommandDescriptor, CommandMetadata, CommandOrigin, FunctionDescriptor,
    ParameterDescriptor,
};
pub use module::ModuleDescriptor;
pub use native::NativeCommandDescriptor;
pub use platform::{OsDescriptor, OsFamily, PlatformInfo};
pub use profile::{ModuleVersions, Profile};
pub use types::TypeCatalog;
pub use version::{PlatformVersion, VersionParseError};
