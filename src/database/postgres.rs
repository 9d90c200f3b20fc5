use super::driver::{BoxError, ConnectRequest, Driver, DriverConnection};
use postgres::{Client, NoTls};
use std::any::Any;
use std::time::Duration;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Plain-text sessions through the `postgres` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDriver;

impl Driver for PostgresDriver {
    fn connect(&self, request: &ConnectRequest<'_>) -> Result<Box<dyn DriverConnection>, BoxError> {
        let client = Client::connect(&request.dsn, NoTls)?;
        Ok(Box::new(client))
    }
}

impl DriverConnection for Client {
    fn commit(&mut self) -> Result<(), BoxError> {
        Client::batch_execute(self, "COMMIT")?;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), BoxError> {
        Client::batch_execute(self, "ROLLBACK")?;
        Ok(())
    }

    fn ping(&mut self) -> Result<(), BoxError> {
        Client::is_valid(self, PING_TIMEOUT)?;
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<(), BoxError> {
        Client::close(*self)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
