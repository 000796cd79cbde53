//! Shared utilities

pub mod caseless;

pub use caseless::{CaselessMap, CaselessSet};
