use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised when a project directory could not be created.
#[derive(Debug, Error)]
#[error("failed to create directory {}: {source}", path.display())]
pub struct FilesystemError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FilesystemError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
