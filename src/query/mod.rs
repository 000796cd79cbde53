//! Derived, read-only indices over a profile.
//!
//! Everything here is computed from an immutable `Profile` and cached: the
//! command lookup table (with alias resolution), the native command table,
//! and the `RuntimeQuery` façade that owns both.

pub mod commands;
pub mod natives;
pub mod runtime;

pub use commands::CommandLookupTable;
pub use natives::NativeCommandLookupTable;
pub use runtime::RuntimeQuery;
