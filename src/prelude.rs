pub use crate::{
    ConnectRequest, ConnectionFactory, DatabaseConnection, Driver, DriverConnection, Error,
    Result,
};
pub use desdb_auth::{Authenticator, CredentialPaths, Credentials, ResolveOptions};
pub use desdb_core::{CredentialType, DbType, Defaults, SourceKind};
