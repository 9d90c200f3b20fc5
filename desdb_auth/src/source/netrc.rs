use super::{CredentialSource, Login};
use crate::netrc::Netrc;
use crate::perms::read_private;
use crate::record::Target;
use crate::{Error, Result};
use desdb_core::SourceKind;
use std::path::Path;

/// Reads the `machine` entry for the target host from a netrc file.
pub struct NetrcSource<'a> {
    path: &'a Path,
}

impl<'a> NetrcSource<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }
}

impl CredentialSource for NetrcSource<'_> {
    fn kind(&self) -> SourceKind {
        SourceKind::Netrc
    }

    fn lookup(&self, target: &mut Target) -> Result<Option<Login>> {
        let Some(contents) = read_private(self.path)? else {
            return Ok(None);
        };
        let netrc = Netrc::parse(&contents).map_err(|e| Error::format(self.path, e.to_string()))?;

        match netrc.authenticators(&target.host) {
            Some(entry) => Ok(Some(Login::new(&entry.login, &entry.password))),
            None => {
                tracing::debug!(host = %target.host, "no netrc entry for host");
                Ok(None)
            }
        }
    }
}
