//! Credential sources tried by the [`Authenticator`](crate::Authenticator).

mod desdb_pass;
mod netrc;
mod services;

pub use desdb_pass::DesdbPassSource;
pub use netrc::NetrcSource;
pub use services::ServicesSource;

use crate::record::Target;
use crate::{CredentialPaths, Result};
use desdb_core::{Defaults, SourceKind};

/// User and password as found by a source.
///
/// Either may be missing when the source located its file and entry but the
/// entry did not carry the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Login {
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Login {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            password: Some(password.into()),
        }
    }
}

pub trait CredentialSource {
    fn kind(&self) -> SourceKind;

    /// Looks up credentials for `target`.
    ///
    /// `Ok(None)` means the file is absent or holds nothing for this host and
    /// the next source should be tried. Any `Err` ends the resolution. A
    /// source may rewrite `target` when its file names the server itself.
    fn lookup(&self, target: &mut Target) -> Result<Option<Login>>;
}

/// Builds the source for `kind`, reading from the matching file in `paths`
pub fn for_kind<'a>(
    kind: SourceKind,
    paths: &'a CredentialPaths,
    defaults: &'a Defaults,
) -> Box<dyn CredentialSource + 'a> {
    let path = paths.for_source(kind);
    match kind {
        SourceKind::Services => Box::new(ServicesSource::new(path, defaults)),
        SourceKind::Netrc => Box::new(NetrcSource::new(path)),
        SourceKind::DesdbPass => Box::new(DesdbPassSource::new(path)),
    }
}
