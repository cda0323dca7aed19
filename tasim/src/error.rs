//! Error types for the simulation's startup path.

use std::fmt;
use std::io;

/// Fatal startup errors. Once the simulation is running it cannot fail
/// except through an invariant assertion, so only configuration and thread
/// provisioning are represented here.
#[derive(Debug)]
pub enum Error {
    /// The student population must be at least one.
    NoStudents,
    /// Interactive input was not a non-negative integer.
    InvalidNumber(String),
    /// IO error while prompting for configuration.
    Io(io::Error),
    /// The OS refused to start a simulation thread.
    Spawn(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoStudents => write!(f, "number of students must be at least 1"),
            Error::InvalidNumber(input) => {
                write!(f, "not a non-negative integer: {:?}", input)
            }
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Spawn(e) => write!(f, "failed to spawn thread: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) | Error::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type for simulation startup.
pub type Result<T> = std::result::Result<T, Error>;
