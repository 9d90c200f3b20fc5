use super::{CredentialSource, Login};
use crate::perms::read_private;
use crate::record::Target;
use crate::{Error, Result};
use desdb_core::SourceKind;
use std::path::Path;

/// Deprecated `~/.desdb_pass` file: the user on the first line, the password
/// on the second.
pub struct DesdbPassSource<'a> {
    path: &'a Path,
}

impl<'a> DesdbPassSource<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }
}

impl CredentialSource for DesdbPassSource<'_> {
    fn kind(&self) -> SourceKind {
        SourceKind::DesdbPass
    }

    fn lookup(&self, _target: &mut Target) -> Result<Option<Login>> {
        let Some(contents) = read_private(self.path)? else {
            return Ok(None);
        };
        parse(&contents)
            .map(Some)
            .ok_or_else(|| Error::format(self.path, "expected first line user second line pass"))
    }
}

fn parse(contents: &str) -> Option<Login> {
    let lines: Vec<&str> = contents.lines().collect();
    match lines.as_slice() {
        [user, password] => Some(Login::new(user.trim(), password.trim())),
        _ => None,
    }
}
