use desdb_core::{CredentialType, DbType};
use serde::Serialize;
use std::fmt;

/// A password that never shows up in `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Password(value.into())
    }

    /// The clear-text value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

/// A resolved identity plus the target it applies to.
///
/// Built once per resolution; all fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    user: String,
    #[serde(skip)]
    password: Password,
    host: String,
    port: u16,
    dbname: String,
    dbtype: DbType,
    section: String,
    #[serde(rename = "type")]
    source: CredentialType,
}

impl Credentials {
    pub(crate) fn new(
        user: String,
        password: Password,
        target: Target,
        source: CredentialType,
    ) -> Self {
        Self {
            user,
            password,
            host: target.host,
            port: target.port,
            dbname: target.dbname,
            dbtype: target.dbtype,
            section: target.section,
            source,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn dbname(&self) -> &str {
        &self.dbname
    }

    pub fn dbtype(&self) -> DbType {
        self.dbtype
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    /// Which source supplied the user and password
    pub fn source(&self) -> CredentialType {
        self.source
    }
}

/// Connection target as it evolves while sources are consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub dbtype: DbType,
    pub section: String,
}
