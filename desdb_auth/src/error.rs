use desdb_core::{UnknownSource, UnsupportedDbType};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "{} has incorrect mode {mode:o}.  On UNIX use\n    chmod go-rw {}",
        .path.display(),
        .path.display()
    )]
    Permission { path: PathBuf, mode: u32 },

    #[error("Malformed credentials file {}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    #[error("could not determine username/password for host '{host}'")]
    CredentialsNotFound { host: String },

    #[error(transparent)]
    UnsupportedDbType(#[from] UnsupportedDbType),

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<UnknownSource> for Error {
    fn from(e: UnknownSource) -> Self {
        Error::InvalidArgument(e.to_string())
    }
}

impl Error {
    pub(crate) fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
