use crate::{Error, Result};
use desdb_core::SourceKind;
use std::path::{Path, PathBuf};

/// Per-user locations of the credential files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPaths {
    pub netrc: PathBuf,
    pub services: PathBuf,
    pub desdb_pass: PathBuf,
}

impl CredentialPaths {
    /// Standard file names under `home`
    pub fn in_home(home: impl AsRef<Path>) -> Self {
        let home = home.as_ref();
        Self {
            netrc: home.join(".netrc"),
            services: home.join(".desservices.ini"),
            desdb_pass: home.join(".desdb_pass"),
        }
    }

    /// Standard file names under `$HOME`
    pub fn from_env() -> Result<Self> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::Config("HOME is not set".to_string()))?;
        Ok(Self::in_home(home))
    }

    pub fn for_source(&self, kind: SourceKind) -> &Path {
        match kind {
            SourceKind::Services => &self.services,
            SourceKind::Netrc => &self.netrc,
            SourceKind::DesdbPass => &self.desdb_pass,
        }
    }
}
