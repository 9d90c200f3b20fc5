//! Database credential resolution for desdb.
//!
//! Credentials come from, in order of precedence:
//!
//! - explicit `user`/`password` options,
//! - the DES services file `~/.desservices.ini`,
//! - `~/.netrc`,
//! - the deprecated `~/.desdb_pass` file.
//!
//! The order of the file sources is configurable per call. Every credential
//! file must be private to its owner (`chmod go-rw`) before it is read.
//!
//! ```no_run
//! use desdb_auth::{Authenticator, ResolveOptions};
//!
//! let auth = Authenticator::from_env()?;
//! let creds = auth.resolve(&ResolveOptions::new().types(["netrc", "services"]))?;
//! println!("{}@{}:{} via {}", creds.user(), creds.host(), creds.port(), creds.source());
//! # Ok::<(), desdb_auth::Error>(())
//! ```

mod authenticator;
pub mod error;
pub mod netrc;
mod options;
mod paths;
pub mod perms;
mod record;
pub mod source;

pub use authenticator::Authenticator;
pub use error::{Error, Result};
pub use options::ResolveOptions;
pub use paths::CredentialPaths;
pub use record::{Credentials, Password, Target};

pub use desdb_core::{CredentialType, DbType, Defaults, SourceKind, UnsupportedDbType};
