use super::connection::DatabaseConnection;
use super::driver::{ConnectRequest, Driver};
use super::{Error, Result};
use desdb_auth::{Authenticator, ResolveOptions};
use desdb_core::DbType;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves credentials and hands them to the driver for the resolved
/// dbtype.
#[derive(Clone)]
pub struct ConnectionFactory {
    authenticator: Authenticator,
    drivers: HashMap<DbType, Arc<dyn Driver>>,
}

impl ConnectionFactory {
    /// A factory with the drivers compiled into this build
    pub fn new(authenticator: Authenticator) -> Self {
        let factory = Self::without_drivers(authenticator);
        #[cfg(feature = "with-oracle")]
        let factory = factory.with_driver(DbType::Oracle, super::oracle::OracleDriver);
        #[cfg(feature = "with-postgres")]
        let factory = factory.with_driver(DbType::Postgres, super::postgres::PostgresDriver);
        factory
    }

    pub fn without_drivers(authenticator: Authenticator) -> Self {
        Self {
            authenticator,
            drivers: HashMap::new(),
        }
    }

    /// Registers `driver` for `dbtype`, replacing any previous one
    pub fn with_driver(mut self, dbtype: DbType, driver: impl Driver + 'static) -> Self {
        self.drivers.insert(dbtype, Arc::new(driver));
        self
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn connect(&self, options: &ResolveOptions) -> Result<DatabaseConnection> {
        let credentials = self.authenticator.resolve(options)?;
        let dbtype = credentials.dbtype();
        let driver = self
            .drivers
            .get(&dbtype)
            .ok_or(Error::DriverUnavailable(dbtype))?;

        let conn = {
            let request = ConnectRequest::new(&credentials);
            driver
                .connect(&request)
                .map_err(|e| Error::driver(dbtype, e))?
        };
        tracing::info!(
            %dbtype,
            host = %credentials.host(),
            port = credentials.port(),
            dbname = %credentials.dbname(),
            user = %credentials.user(),
            source = %credentials.source(),
            "connected"
        );
        Ok(DatabaseConnection::new(credentials, conn))
    }
}
