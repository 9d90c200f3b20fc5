mod connect;

use desdb::{BoxError, ConnectRequest, DbType, Driver, DriverConnection};
use std::any::Any;
use std::sync::{Arc, Mutex};

/// What a [`RecordingDriver`] was asked to connect with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub dbtype: DbType,
    pub dsn: String,
    pub user: String,
    pub password: String,
}

/// Stands in for a native driver and remembers every connect request.
#[derive(Clone, Default)]
pub struct RecordingDriver {
    pub requests: Arc<Mutex<Vec<Recorded>>>,
    pub events: Arc<Mutex<Vec<&'static str>>>,
    pub refuse: bool,
}

impl RecordingDriver {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl Driver for RecordingDriver {
    fn connect(&self, request: &ConnectRequest<'_>) -> Result<Box<dyn DriverConnection>, BoxError> {
        self.requests.lock().unwrap().push(Recorded {
            dbtype: request.dbtype(),
            dsn: request.dsn.clone(),
            user: request.user().to_string(),
            password: request.password().to_string(),
        });
        if self.refuse {
            return Err("connection refused".into());
        }
        Ok(Box::new(FakeSession {
            events: self.events.clone(),
        }))
    }
}

pub struct FakeSession {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl FakeSession {
    fn log(&self, event: &'static str) {
        self.events.lock().unwrap().push(event);
    }
}

impl DriverConnection for FakeSession {
    fn commit(&mut self) -> Result<(), BoxError> {
        self.log("commit");
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), BoxError> {
        self.log("rollback");
        Ok(())
    }

    fn ping(&mut self) -> Result<(), BoxError> {
        self.log("ping");
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<(), BoxError> {
        self.log("close");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
