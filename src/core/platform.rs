//! Platform metadata - optional description of the captured installation.
//!
//! A collector may record what it ran on alongside the runtime data. The
//! whole block is optional on the wire; absence means the capture predates
//! platform recording or the collector chose not to emit it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Operating system family, encoded on the wire as its symbolic name.
///
/// Family names a collector emits in the future stay representable: an
/// unrecognized name is carried through as `Other` rather than rejected, so
/// older consumers can still round-trip newer captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Linux,
    MacOs,
    Other(String),
}

impl OsFamily {
    /// The symbolic wire name.
    pub fn as_str(&self) -> &str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::Linux => "Linux",
            OsFamily::MacOs => "MacOS",
            OsFamily::Other(name) => name,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Windows" => OsFamily::Windows,
            "Linux" => OsFamily::Linux,
            "MacOS" => OsFamily::MacOs,
            other => OsFamily::Other(other.to_string()),
        })
    }
}

impl Serialize for OsFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OsFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(OsFamily::Other(s)))
    }
}

/// Operating system details of the captured installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OsDescriptor {
    pub family: OsFamily,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

/// Metadata about the installation a profile was captured on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<OsDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<crate::core::version::PlatformVersion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_symbolic_names() {
        assert_eq!(
            serde_json::to_string(&OsFamily::Windows).unwrap(),
            "\"Windows\""
        );
        assert_eq!(serde_json::to_string(&OsFamily::MacOs).unwrap(), "\"MacOS\"");
    }

    #[test]
    fn test_unknown_family_round_trips() {
        let parsed: OsFamily = serde_json::from_str("\"FreeBSD\"").unwrap();
        assert_eq!(parsed, OsFamily::Other("FreeBSD".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"FreeBSD\"");
    }

    #[test]
    fn test_platform_block_fields_are_optional() {
        let info: PlatformInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, PlatformInfo::default());

        let info: PlatformInfo = serde_json::from_str(
            r#"{"OperatingSystem":{"Family":"Linux","Name":"Ubuntu"},"RuntimeVersion":"7.2"}"#,
        )
        .unwrap();
        let os = info.operating_system.unwrap();
        assert_eq!(os.family, OsFamily::Linux);
        assert_eq!(os.version, None);
        assert_eq!(info.runtime_version.unwrap().to_string(), "7.2");
    }
}
