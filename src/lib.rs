//! desdb - credentials and connections for the DES science databases
//!
//! Resolves a user/password pair from explicit options, the DES services
//! file, `~/.netrc` or the deprecated `~/.desdb_pass`, then opens an Oracle
//! or PostgreSQL session for the resolved target.
//!
//! ```no_run
//! use desdb::prelude::*;
//!
//! let mut conn = desdb::connect(&ResolveOptions::new().dbtype("postgres"))?;
//! println!("connected as {} via {}", conn.credentials().user(), conn.credentials().source());
//! conn.ping()?;
//! conn.close()?;
//! # Ok::<(), desdb::Error>(())
//! ```

mod database;
pub mod prelude;
pub mod test_util;

pub use database::*;
pub use desdb_auth as auth;
pub use desdb_auth::{Authenticator, CredentialPaths, Credentials, Password, ResolveOptions};
pub use desdb_core::{CredentialType, DbType, Defaults, SourceKind};

/// Connects with the built-in defaults and the credential files under `$HOME`
pub fn connect(options: &ResolveOptions) -> Result<DatabaseConnection> {
    let authenticator = Authenticator::from_env()?;
    ConnectionFactory::new(authenticator).connect(options)
}
