use crate::record::{Password, Target};
use crate::source::{self, Login};
use crate::{CredentialPaths, Credentials, Error, ResolveOptions, Result};
use desdb_core::{CredentialType, DbType, Defaults, SourceKind};

/// Resolves a user/password pair for a database target.
///
/// Explicit credentials in the options win outright. Otherwise the credential
/// sources are tried in order and the first one that locates an entry for the
/// host supplies the login. A missing file moves on to the next source; a
/// file that is present but unreadable, too open or malformed ends the
/// resolution with an error.
#[derive(Debug, Clone)]
pub struct Authenticator {
    defaults: Defaults,
    paths: CredentialPaths,
}

impl Authenticator {
    pub fn new(defaults: Defaults, paths: CredentialPaths) -> Self {
        Self { defaults, paths }
    }

    /// Built-in defaults and credential files under `$HOME`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Defaults::default(), CredentialPaths::from_env()?))
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn paths(&self) -> &CredentialPaths {
        &self.paths
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resolve(&self, options: &ResolveOptions) -> Result<Credentials> {
        let explicit = explicit_login(options)?;
        let mut target = self.target(options)?;

        if let Some((user, password)) = explicit {
            tracing::debug!(host = %target.host, "using explicit credentials");
            return Ok(Credentials::new(
                user,
                Password::new(password),
                target,
                CredentialType::Keyword,
            ));
        }

        let sources = self
            .source_order(options)?
            .into_iter()
            .map(|kind| source::for_kind(kind, &self.paths, &self.defaults));
        for source in sources {
            let kind = source.kind();
            match source.lookup(&mut target)? {
                Some(login) => {
                    tracing::info!(source = %kind, host = %target.host, "credentials found");
                    return complete(login, target, kind);
                }
                None => {
                    tracing::debug!(
                        source = %kind,
                        path = %self.paths.for_source(kind).display(),
                        "no credentials from source"
                    );
                }
            }
        }

        Err(Error::CredentialsNotFound { host: target.host })
    }

    fn target(&self, options: &ResolveOptions) -> Result<Target> {
        let dbtype = match options.dbtype.as_deref() {
            Some(dbtype) => dbtype.parse::<DbType>()?,
            None => self.defaults.dbtype,
        };
        Ok(Target {
            host: options
                .host
                .clone()
                .unwrap_or_else(|| self.defaults.host.clone()),
            port: options
                .port
                .unwrap_or_else(|| self.defaults.port_for(dbtype)),
            dbname: options
                .name
                .clone()
                .unwrap_or_else(|| self.defaults.dbname.clone()),
            dbtype,
            section: options
                .section
                .clone()
                .unwrap_or_else(|| self.defaults.section.clone()),
        })
    }

    fn source_order(&self, options: &ResolveOptions) -> Result<Vec<SourceKind>> {
        match &options.types {
            Some(types) => types
                .iter()
                .map(|t| t.parse::<SourceKind>().map_err(Error::from))
                .collect(),
            None => Ok(self.defaults.types.clone()),
        }
    }
}

fn explicit_login(options: &ResolveOptions) -> Result<Option<(String, String)>> {
    match (&options.user, &options.password) {
        (None, None) => Ok(None),
        (Some(user), Some(password)) => {
            if user.is_empty() || password.is_empty() {
                return Err(Error::InvalidArgument(
                    "explicit user and password must not be empty".to_string(),
                ));
            }
            Ok(Some((user.clone(), password.clone())))
        }
        _ => Err(Error::InvalidArgument(
            "Send either both or neither of user password".to_string(),
        )),
    }
}

/// The first matching source decides; an incomplete login is not completed
/// from later sources.
fn complete(login: Login, target: Target, kind: SourceKind) -> Result<Credentials> {
    match (login.user, login.password) {
        (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => Ok(
            Credentials::new(user, Password::new(password), target, kind.into()),
        ),
        _ => {
            tracing::debug!(source = %kind, section = %target.section, "source entry lacks user or password");
            Err(Error::CredentialsNotFound { host: target.host })
        }
    }
}
