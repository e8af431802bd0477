//! File I/O error types.
//!
//! Failures that originate outside the program (missing files, permission
//! problems, short reads) are returned to the caller rather than aborting.
//! Each variant records the path and the underlying [`io::Error`].

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from file operations.
#[derive(Debug)]
pub enum FileError {
    /// The file could not be opened or created.
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Seeking or querying the position failed.
    Seek {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Reading failed, including reads that ended early.
    Read {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Writing failed.
    Write {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Flushing data to disk on close failed.
    Sync {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl FileError {
    /// Path of the file the operation was on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Seek { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Sync { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.io_error().kind()
    }

    fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. }
            | Self::Seek { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. }
            | Self::Sync { source, .. } => source,
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (action, path, source) = match self {
            Self::Open { path, source } => ("open", path, source),
            Self::Seek { path, source } => ("seek", path, source),
            Self::Read { path, source } => ("read", path, source),
            Self::Write { path, source } => ("write", path, source),
            Self::Sync { path, source } => ("sync", path, source),
        };
        write!(f, "failed to {action} '{}': {source}", path.display())
    }
}

impl Error for FileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.io_error())
    }
}
