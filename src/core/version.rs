//! Platform version handling.
//!
//! Runtime platforms report versions with two to four dotted numeric
//! components (`"7.2"`, `"7.2.1"`, `"10.0.17763.1"`), so semver does not
//! fit. On the wire a version is always the dotted string, never a
//! structured object.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error parsing a platform version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version `{input}`: expected 2-4 dotted numeric components")]
pub struct VersionParseError {
    /// The string that failed to parse.
    pub input: String,
}

/// A platform version with 2-4 dotted numeric components.
///
/// Equality is structural: `1.2` and `1.2.0` are distinct versions (they
/// round-trip to different strings). Ordering treats absent components as
/// zero, with component count as a final tiebreaker so that ordering stays
/// consistent with equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformVersion {
    major: u64,
    minor: u64,
    patch: Option<u64>,
    revision: Option<u64>,
}

impl PlatformVersion {
    /// Create a two-component version.
    pub fn new(major: u64, minor: u64) -> Self {
        PlatformVersion {
            major,
            minor,
            patch: None,
            revision: None,
        }
    }

    /// Extend this version with a patch component.
    pub fn with_patch(mut self, patch: u64) -> Self {
        self.patch = Some(patch);
        self
    }

    /// Extend this version with a revision component.
    ///
    /// A revision without a patch is not representable in the dotted form;
    /// setting the revision fills in a zero patch if one was absent.
    pub fn with_revision(mut self, revision: u64) -> Self {
        self.patch.get_or_insert(0);
        self.revision = Some(revision);
        self
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    pub fn revision(&self) -> Option<u64> {
        self.revision
    }

    /// The components with absent ones as zero, for ordering.
    fn padded(&self) -> [u64; 4] {
        [
            self.major,
            self.minor,
            self.patch.unwrap_or(0),
            self.revision.unwrap_or(0),
        ]
    }

    /// How many components were present in the source form (2-4).
    fn component_count(&self) -> u8 {
        2 + self.patch.is_some() as u8 + self.revision.is_some() as u8
    }
}

impl PartialOrd for PlatformVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlatformVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.padded()
            .cmp(&other.padded())
            .then_with(|| self.component_count().cmp(&other.component_count()))
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        if let Some(revision) = self.revision {
            write!(f, ".{}", revision)?;
        }
        Ok(())
    }
}

impl FromStr for PlatformVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VersionParseError {
            input: s.to_string(),
        };

        let mut components = [0u64; 4];
        let mut count = 0usize;

        for part in s.split('.') {
            if count == 4 {
                return Err(err());
            }
            // Reject empty parts, signs, and whitespace; u64::from_str
            // accepts only plain decimal digits but allows a leading '+'.
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            components[count] = part.parse().map_err(|_| err())?;
            count += 1;
        }

        if count < 2 {
            return Err(err());
        }

        let mut version = PlatformVersion::new(components[0], components[1]);
        if count >= 3 {
            version.patch = Some(components[2]);
        }
        if count == 4 {
            version.revision = Some(components[3]);
        }
        Ok(version)
    }
}

impl Serialize for PlatformVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlatformVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_counts() {
        let v2: PlatformVersion = "7.2".parse().unwrap();
        assert_eq!((v2.major(), v2.minor()), (7, 2));
        assert_eq!(v2.patch(), None);

        let v3: PlatformVersion = "7.2.1".parse().unwrap();
        assert_eq!(v3.patch(), Some(1));
        assert_eq!(v3.revision(), None);

        let v4: PlatformVersion = "10.0.17763.1".parse().unwrap();
        assert_eq!(v4.patch(), Some(17763));
        assert_eq!(v4.revision(), Some(1));
    }

    #[test]
    fn test_parse_rejects_bad_forms() {
        for bad in ["abc", "7", "7.", ".2", "1.2.3.4.5", "1.x", "1..2", "1.-2", "1. 2", "+1.2", ""] {
            assert!(
                bad.parse::<PlatformVersion>().is_err(),
                "expected `{}` to fail",
                bad
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["7.2", "7.2.1", "10.0.17763.1", "0.0"] {
            let v: PlatformVersion = s.parse().unwrap();
            assert_eq!(v.to_string(), s);
        }
    }

    #[test]
    fn test_ordering_pads_absent_components() {
        let v2: PlatformVersion = "1.2".parse().unwrap();
        let v3: PlatformVersion = "1.2.0".parse().unwrap();
        let v3_1: PlatformVersion = "1.2.1".parse().unwrap();

        // 1.2 and 1.2.0 are distinct but adjacent: the shorter form sorts first.
        assert_ne!(v2, v3);
        assert!(v2 < v3);
        assert!(v3 < v3_1);
        assert!("1.10".parse::<PlatformVersion>().unwrap() > "1.9.9.9".parse().unwrap());
    }

    #[test]
    fn test_builder_fills_patch_before_revision() {
        let v = PlatformVersion::new(6, 1).with_revision(7601);
        assert_eq!(v.to_string(), "6.1.0.7601");
    }

    #[test]
    fn test_serde_uses_dotted_string() {
        let v: PlatformVersion = "7.2.1".parse().unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"7.2.1\"");

        let back: PlatformVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        assert!(serde_json::from_str::<PlatformVersion>("\"abc\"").is_err());
        assert!(serde_json::from_str::<PlatformVersion>("{\"Major\":7}").is_err());
    }
}
