use super::driver::DriverConnection;
use super::{Error, Result};
use desdb_auth::Credentials;
use desdb_core::DbType;
use std::fmt;

/// An open session plus the credentials it was opened with.
///
/// Only commit, rollback, ping and close are forwarded; anything else goes
/// through the native handle from [`native`](Self::native) or
/// [`native_mut`](Self::native_mut).
pub struct DatabaseConnection {
    credentials: Credentials,
    inner: Box<dyn DriverConnection>,
}

impl DatabaseConnection {
    pub(crate) fn new(credentials: Credentials, inner: Box<dyn DriverConnection>) -> Self {
        Self { credentials, inner }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn dbtype(&self) -> DbType {
        self.credentials.dbtype()
    }

    pub fn commit(&mut self) -> Result<()> {
        let dbtype = self.dbtype();
        self.inner.commit().map_err(|e| Error::driver(dbtype, e))
    }

    pub fn rollback(&mut self) -> Result<()> {
        let dbtype = self.dbtype();
        self.inner.rollback().map_err(|e| Error::driver(dbtype, e))
    }

    pub fn ping(&mut self) -> Result<()> {
        let dbtype = self.dbtype();
        self.inner.ping().map_err(|e| Error::driver(dbtype, e))
    }

    pub fn close(self) -> Result<()> {
        let dbtype = self.dbtype();
        self.inner.close().map_err(|e| Error::driver(dbtype, e))
    }

    /// The driver's own session type, e.g. `postgres::Client` or
    /// `oracle::Connection`
    pub fn native<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    pub fn native_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.inner.as_any_mut().downcast_mut::<T>()
    }
}

impl fmt::Debug for DatabaseConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnection")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
