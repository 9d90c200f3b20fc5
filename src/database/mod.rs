mod connection;
mod driver;
mod factory;
#[cfg(feature = "with-oracle")]
mod oracle;
#[cfg(feature = "with-postgres")]
mod postgres;

pub use connection::DatabaseConnection;
pub use driver::{oracle_dsn, postgres_dsn, BoxError, ConnectRequest, Driver, DriverConnection};
pub use factory::ConnectionFactory;
#[cfg(feature = "with-oracle")]
pub use self::oracle::OracleDriver;
#[cfg(feature = "with-postgres")]
pub use self::postgres::PostgresDriver;

use desdb_core::DbType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] desdb_auth::Error),

    #[error("No {0} driver is available; enable the `with-{0}` feature or register one")]
    DriverUnavailable(DbType),

    #[error("{dbtype} driver error: {source}")]
    Driver {
        dbtype: DbType,
        #[source]
        source: BoxError,
    },
}

impl Error {
    pub(crate) fn driver(dbtype: DbType, source: BoxError) -> Self {
        Error::Driver { dbtype, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
