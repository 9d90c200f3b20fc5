use desdb_auth::Credentials;
use desdb_core::DbType;
use std::any::Any;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a driver needs to open a session.
pub struct ConnectRequest<'a> {
    /// Connect string in the driver's own format, see [`ConnectRequest::new`]
    pub dsn: String,
    pub credentials: &'a Credentials,
}

impl<'a> ConnectRequest<'a> {
    /// Builds the connect string for the credentials' dbtype:
    ///
    /// - oracle: `host:port/dbname`, user and password passed separately
    /// - postgres: `host=.. dbname=.. user=.. password=.. port=..`
    pub fn new(credentials: &'a Credentials) -> Self {
        let dsn = match credentials.dbtype() {
            DbType::Oracle => oracle_dsn(credentials),
            DbType::Postgres => postgres_dsn(credentials),
        };
        Self { dsn, credentials }
    }

    pub fn dbtype(&self) -> DbType {
        self.credentials.dbtype()
    }

    pub fn user(&self) -> &str {
        self.credentials.user()
    }

    pub fn password(&self) -> &str {
        self.credentials.password().expose()
    }
}

pub fn oracle_dsn(credentials: &Credentials) -> String {
    format!(
        "{}:{}/{}",
        credentials.host(),
        credentials.port(),
        credentials.dbname()
    )
}

pub fn postgres_dsn(credentials: &Credentials) -> String {
    format!(
        "host={} dbname={} user={} password={} port={}",
        credentials.host(),
        credentials.dbname(),
        credentials.user(),
        credentials.password().expose(),
        credentials.port()
    )
}

/// Opens sessions against one database engine.
pub trait Driver: Send + Sync {
    fn connect(&self, request: &ConnectRequest<'_>) -> Result<Box<dyn DriverConnection>, BoxError>;
}

/// The operations forwarded from a [`DatabaseConnection`] to the native
/// session.
///
/// [`DatabaseConnection`]: crate::DatabaseConnection
pub trait DriverConnection: Send {
    fn commit(&mut self) -> Result<(), BoxError>;

    fn rollback(&mut self) -> Result<(), BoxError>;

    /// Round trip to the server
    fn ping(&mut self) -> Result<(), BoxError>;

    fn close(self: Box<Self>) -> Result<(), BoxError>;

    /// The native session, for downcasting
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
