use super::driver::{BoxError, ConnectRequest, Driver, DriverConnection};
use oracle::Connection;
use std::any::Any;

/// Sessions through the `oracle` crate (ODPI-C).
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDriver;

impl Driver for OracleDriver {
    fn connect(&self, request: &ConnectRequest<'_>) -> Result<Box<dyn DriverConnection>, BoxError> {
        let conn = Connection::connect(request.user(), request.password(), &request.dsn)?;
        Ok(Box::new(conn))
    }
}

// Inherent methods are called by path; `self.commit()` here would resolve to
// the trait method.
impl DriverConnection for Connection {
    fn commit(&mut self) -> Result<(), BoxError> {
        Connection::commit(self)?;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), BoxError> {
        Connection::rollback(self)?;
        Ok(())
    }

    fn ping(&mut self) -> Result<(), BoxError> {
        Connection::ping(self)?;
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<(), BoxError> {
        Connection::close(&self)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
