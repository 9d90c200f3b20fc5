//! Shared vocabulary for the desdb crates: database engines, credential
//! sources and the immutable connection defaults.

pub mod defaults;
pub mod types;

pub use defaults::Defaults;
pub use types::*;

use thiserror::Error;

/// Error during `impl FromStr for DbType`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized db type: {0}")]
pub struct UnsupportedDbType(pub String);
impl UnsupportedDbType {
    pub fn new(s: impl Into<String>) -> Self {
        UnsupportedDbType(s.into())
    }
}

/// Error during `impl FromStr for SourceKind`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected type 'netrc', 'services', or 'desdb_pass', got '{0}'")]
pub struct UnknownSource(pub String);
impl UnknownSource {
    pub fn new(s: impl Into<String>) -> Self {
        UnknownSource(s.into())
    }
}
