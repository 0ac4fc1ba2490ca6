//! Error kinds that carry a process exit status

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors whose kind determines hop's exit code
#[derive(Error, Debug)]
pub enum HopError {
    /// Malformed command line
    #[error("{0}")]
    Argument(String),

    /// The query matched nothing in the current candidate set
    #[error("No matching project found")]
    NoMatch,

    /// A lookup was required but the registry is empty
    #[error("No saved projects found")]
    NoProjects,

    /// A required environment variable is unset
    #[error("{0}")]
    Config(String),

    /// Could not change into a project directory
    #[error("Failed to change into {path}: {source}")]
    ChangeDir { path: PathBuf, source: io::Error },

    /// The backing store could not be read, parsed, or written
    #[error("{0}")]
    Store(String),
}

impl HopError {
    /// Exit status for this error kind: store I/O is 2, everything else 1
    pub fn exit_code(&self) -> i32 {
        match self {
            HopError::Store(_) => 2,
            _ => 1,
        }
    }
}
