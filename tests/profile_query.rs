//! Integration tests for the profile codec and query engine.
//!
//! These tests run the full path a consumer takes: decode a capture
//! document, query it through the façade, and round-trip it back through
//! the codec.

use std::sync::Once;

use tempfile::TempDir;

use runtime_compat::codec;
use runtime_compat::{CodecError, CommandLookupTable, CommandOrigin, RuntimeQuery};

static TRACING: Once = Once::new();

/// Install a test subscriber once so RUST_LOG=trace surfaces build logs.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A capture document exercising every wire feature at once.
fn full_capture() -> &'static str {
    r#"{
        "Types": {
            "Names": ["System.String", "System.Management.Automation.PSObject"],
            "Accelerators": { "psobject": "System.Management.Automation.PSObject" }
        },
        "Modules": {
            "Management": {
                "3.1.0.0": {
                    "Cmdlets": {
                        "Get-ChildItem": {
                            "ParameterSets": ["Items", "LiteralItems"],
                            "DefaultParameterSet": "Items",
                            "OutputTypes": ["System.IO.FileInfo"],
                            "Parameters": {
                                "Path": { "Type": "System.String[]" },
                                "CodeSigningCert": { "Type": "System.Management.Automation.SwitchParameter", "Dynamic": true }
                            },
                            "ParameterAliases": { "LP": "LiteralPath" }
                        },
                        "Get-Process": {}
                    },
                    "Aliases": { "gci": "Get-ChildItem", "dir": "gci" }
                },
                "7.0.0.0": {
                    "Cmdlets": { "Get-ChildItem": {}, "Get-Process": {} }
                }
            },
            "Scripting": {
                "1.0": {
                    "Functions": {
                        "Get-Process": { "CmdletBinding": true },
                        "Invoke-Helper": {}
                    },
                    "Aliases": { "ih": "Invoke-Helper", "gone": "Removed-Command" }
                }
            }
        },
        "NativeCommands": {
            "git": [ { "Path": "/usr/bin/git", "Version": "2.39.1" } ],
            "curl": [ { "Path": "/usr/bin/curl" }, { "Path": "/opt/local/bin/curl" } ]
        },
        "Platform": {
            "OperatingSystem": { "Family": "Linux", "Name": "Ubuntu", "Version": "22.04", "Architecture": "x64" },
            "RuntimeVersion": "7.2.1"
        }
    }"#
}

// ============================================================================
// decode + query
// ============================================================================

#[test]
fn test_decode_and_query_full_capture() {
    init_tracing();
    let profile = codec::decode(full_capture().as_bytes()).unwrap();
    let query = RuntimeQuery::new(profile);

    // Types.
    assert!(query.types().has_type("system.string"));
    assert_eq!(
        query.types().resolve_accelerator("PSObject"),
        Some("System.Management.Automation.PSObject")
    );

    // Modules: case-insensitive by name, versions kept apart.
    let management = query.modules().get("MANAGEMENT").unwrap();
    assert_eq!(management.len(), 2);

    // Commands: Get-Process appears as a cmdlet in two Management versions
    // and as a function in Scripting.
    let get_process = query.commands().lookup("get-process").unwrap();
    assert_eq!(get_process.len(), 3);
    let functions = get_process
        .iter()
        .filter(|d| d.origin() == CommandOrigin::Function)
        .count();
    assert_eq!(functions, 1);

    // Parameter-level data survives into descriptors.
    let gci = query.commands().lookup("Get-ChildItem").unwrap();
    let with_params = gci
        .iter()
        .find(|d| !d.parameters().is_empty())
        .expect("one Get-ChildItem capture has parameters");
    assert_eq!(with_params.default_parameter_set(), Some("Items"));
    assert!(with_params.parameters()["CodeSigningCert"].dynamic);
    assert_eq!(with_params.parameter_aliases()["LP"], "LiteralPath");

    // Native commands.
    assert_eq!(query.native_commands().lookup("CURL").unwrap().len(), 2);

    // Platform block.
    let platform = query.profile().platform().unwrap();
    assert_eq!(platform.runtime_version.unwrap().to_string(), "7.2.1");
}

#[test]
fn test_alias_resolution_including_chains() {
    let profile = codec::decode(full_capture().as_bytes()).unwrap();
    let query = RuntimeQuery::new(profile);
    let commands = query.commands();

    let direct = commands.lookup("Get-ChildItem").unwrap();

    // gci -> Get-ChildItem, dir -> gci -> Get-ChildItem.
    for alias in ["gci", "dir"] {
        let list = commands.lookup(alias).unwrap();
        assert_eq!(list.len(), direct.len(), "alias `{}`", alias);
        assert!(list[0].same_descriptor(&direct[0]));
    }

    // An alias whose target never existed stays known-but-empty.
    assert!(commands.lookup("gone").unwrap().is_empty());
    assert!(commands.lookup("Removed-Command").is_none());
}

#[test]
fn test_advanced_binding_distinguishes_variants() {
    let profile = codec::decode(full_capture().as_bytes()).unwrap();
    let query = RuntimeQuery::new(profile);

    let ih = query.commands().lookup("ih").unwrap();
    assert_eq!(ih.len(), 1);
    assert!(!ih[0].is_advanced_binding());

    let advanced_function = query
        .commands()
        .lookup("Get-Process")
        .unwrap()
        .iter()
        .find(|d| d.origin() == CommandOrigin::Function)
        .unwrap()
        .clone();
    assert!(advanced_function.is_advanced_binding());
}

// ============================================================================
// round-trip
// ============================================================================

#[test]
fn test_encode_decode_preserves_observable_fields() {
    let profile = codec::decode(full_capture().as_bytes()).unwrap();
    let bytes = codec::encode(&profile, true).unwrap();
    let again = codec::decode(&bytes).unwrap();

    // Module names, versions, and command names.
    assert_eq!(
        profile.modules().names().collect::<Vec<_>>(),
        again.modules().names().collect::<Vec<_>>()
    );
    for (name, versions) in profile.modules().iter() {
        let again_versions = again.modules().get(name).unwrap();
        assert_eq!(versions.len(), again_versions.len());
        for (version, module) in versions {
            let again_module = &again_versions[version];
            assert_eq!(
                module.cmdlets().keys().collect::<Vec<_>>(),
                again_module.cmdlets().keys().collect::<Vec<_>>()
            );
            assert_eq!(module.aliases(), again_module.aliases());
        }
    }

    // Types and accelerators.
    assert_eq!(
        profile.types().type_names().collect::<Vec<_>>(),
        again.types().type_names().collect::<Vec<_>>()
    );
    assert_eq!(profile.types().accelerator_count(), again.types().accelerator_count());

    // Native commands and platform block.
    assert_eq!(profile.native_commands().len(), again.native_commands().len());
    assert_eq!(profile.platform(), again.platform());
}

#[test]
fn test_file_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("linux-pwsh-7.2.json");

    let profile = codec::decode(full_capture().as_bytes()).unwrap();
    codec::encode_to_file(&path, &profile, false).unwrap();

    let loaded = codec::decode_file(&path).unwrap();
    let query = RuntimeQuery::new(loaded);
    assert!(query.commands().contains("gci"));
}

#[test]
fn test_load_profile_dir() {
    let tmp = TempDir::new().unwrap();
    let profile = codec::decode(full_capture().as_bytes()).unwrap();
    codec::encode_to_file(tmp.path().join("a.json"), &profile, false).unwrap();
    codec::encode_to_file(tmp.path().join("b.json"), &profile, true).unwrap();
    std::fs::write(tmp.path().join("broken.json"), b"{").unwrap();

    let loaded = codec::load_profile_dir(tmp.path()).unwrap();
    assert_eq!(loaded.len(), 2);
}

// ============================================================================
// error taxonomy
// ============================================================================

#[test]
fn test_decode_error_taxonomy() {
    // Missing Modules entirely.
    let err = codec::decode(br#"{ "Types": { "Names": [] } }"#).unwrap_err();
    assert!(matches!(err, CodecError::Format(_)));

    // Structurally invalid Modules.
    let err = codec::decode(br#"{ "Types": { "Names": [] }, "Modules": [] }"#).unwrap_err();
    assert!(matches!(err, CodecError::Format(_)));

    // Unparsable version key.
    let err = codec::decode(
        br#"{ "Types": { "Names": [] }, "Modules": { "M": { "abc": {} } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, CodecError::VersionParse(_)));
}

// ============================================================================
// laziness + concurrency
// ============================================================================

#[test]
fn test_concurrent_queries_share_one_table() {
    let profile = codec::decode(full_capture().as_bytes()).unwrap();
    let query = RuntimeQuery::new(profile);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                scope.spawn(|| {
                    let table = query.commands();
                    assert!(table.contains("Get-ChildItem"));
                    table as *const CommandLookupTable as usize
                })
            })
            .collect();

        let pointers: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    });
}
