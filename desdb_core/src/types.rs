use crate::{UnknownSource, UnsupportedDbType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Relational engine the resolved credentials target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DbType {
    #[default]
    Oracle,
    Postgres,
}

impl FromStr for DbType {
    type Err = UnsupportedDbType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DbType::iter()
            .find(|t| t.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedDbType::new(s))
    }
}

/// A file-backed credential source that can appear in a source order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceKind {
    /// Multi-section INI services file.
    Services,
    /// Standard netrc file.
    Netrc,
    /// Deprecated two-line user/password file.
    DesdbPass,
}

impl FromStr for SourceKind {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceKind::iter()
            .find(|k| k.as_ref() == s)
            .ok_or_else(|| UnknownSource::new(s))
    }
}

/// Records which source supplied a credential record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CredentialType {
    /// Explicit user and password given by the caller.
    Keyword,
    Services,
    Netrc,
    DesdbPass,
}

impl From<SourceKind> for CredentialType {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Services => CredentialType::Services,
            SourceKind::Netrc => CredentialType::Netrc,
            SourceKind::DesdbPass => CredentialType::DesdbPass,
        }
    }
}
