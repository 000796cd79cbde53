//! runtime-compat - runtime compatibility profiles for shell platforms.
//!
//! This crate is the data model and query engine behind compatibility
//! checking: it decodes captured "compatibility profiles" describing what a
//! platform installation provides (modules, commands, aliases, types,
//! native executables) and answers read-only availability lookups against
//! them. Producing captures and judging scripts against the answers belong
//! to external collaborators; this crate never executes or inspects a
//! script.

pub mod codec;
pub mod core;
pub mod query;
pub mod util;

pub use codec::errors::CodecError;
pub use core::{
    CmdletDescriptor, CommandDescriptor, CommandOrigin, FunctionDescriptor, ModuleDescriptor,
    NativeCommandDescriptor, PlatformVersion, Profile, TypeCatalog, VersionParseError,
};
pub use query::{CommandLookupTable, NativeCommandLookupTable, RuntimeQuery};
