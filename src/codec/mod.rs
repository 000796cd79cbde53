//! Profile codec - wire format encode/decode.
//!
//! Converts between the JSON wire format and built `Profile` values.
//! Decoding validates structure (serde) and then constructs the profile,
//! so the caller either gets a fully usable `Profile` or an error - never
//! a partially hydrated one. All file I/O lives here, is synchronous, and
//! holds its streams only for the duration of the call.

pub mod errors;
pub mod wire;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

use crate::core::profile::Profile;
use self::errors::CodecError;
use self::wire::ProfileDocument;

/// Decode a profile from wire bytes.
pub fn decode(bytes: &[u8]) -> Result<Profile, CodecError> {
    let document: ProfileDocument = serde_json::from_slice(bytes)?;
    Ok(Profile::from_document(document)?)
}

/// Encode a profile to wire bytes.
///
/// Pure transform: version fields are written as dotted strings and
/// enumerated fields as their symbolic names, so the output round-trips
/// through `decode` with all observable fields intact.
pub fn encode(profile: &Profile, pretty: bool) -> Result<Vec<u8>, CodecError> {
    let document = ProfileDocument::from_profile(profile);
    let bytes = if pretty {
        serde_json::to_vec_pretty(&document)?
    } else {
        serde_json::to_vec(&document)?
    };
    Ok(bytes)
}

/// Decode a profile from a file.
///
/// The file handle is scoped to this call and released on every exit path,
/// including decode failure. I/O errors surface as
/// `CodecError::Resource` untouched; retry policy belongs to the caller.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Profile, CodecError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "decoding profile file");

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let document: ProfileDocument = serde_json::from_reader(reader)?;
    Ok(Profile::from_document(document)?)
}

/// Encode a profile to a file.
///
/// Same stream discipline as `decode_file`: the handle lives only for this
/// call and is flushed and released before returning.
pub fn encode_to_file(
    path: impl AsRef<Path>,
    profile: &Profile,
    pretty: bool,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    debug!(path = %path.display(), pretty, "encoding profile file");

    let bytes = encode(profile, pretty)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Load every `*.json` profile in a directory.
///
/// Files that fail to decode are skipped with a warning rather than
/// aborting the whole load; a capture directory may mix profile versions
/// and stray files.
pub fn load_profile_dir(dir: impl AsRef<Path>) -> anyhow::Result<Vec<(PathBuf, Profile)>> {
    let dir = dir.as_ref();
    let mut profiles = Vec::new();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read profile directory `{}`", dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read profile directory `{}`", dir.display()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match decode_file(&path) {
            Ok(profile) => profiles.push((path, profile)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable profile");
            }
        }
    }

    // Deterministic order regardless of directory enumeration.
    profiles.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(profiles)
}
