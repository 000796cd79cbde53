//! Native command descriptors - external executables on the platform.
//!
//! Native commands live outside the module/alias structure: a capture
//! records each executable's name with whatever location hints the
//! collector could determine. One name may map to several descriptors when
//! multiple installations sit on the search path.

use crate::core::version::PlatformVersion;

/// An external executable available to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCommandDescriptor {
    name: String,
    path: Option<String>,
    version: Option<PlatformVersion>,
}

impl NativeCommandDescriptor {
    pub fn new(
        name: impl Into<String>,
        path: Option<String>,
        version: Option<PlatformVersion>,
    ) -> Self {
        NativeCommandDescriptor {
            name: name.into(),
            path,
            version,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filesystem location hint, when the collector recorded one.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn version(&self) -> Option<PlatformVersion> {
        self.version
    }
}
