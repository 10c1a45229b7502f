use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::bounds::BoundViolation;

/// Result type returned from functions that can have our `Error`s.
pub type Result<T, E = BrightlightError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BrightlightError {
    #[error("Control directory {} does not exist", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Could not access {}: Permission denied", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Could not access control directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No backlight device matches {0:?}")]
    NoDevices(String),

    #[error("Could not open {file} file: {source}")]
    FileOpen {
        file: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Could not read from {file} file: {source}")]
    FileRead {
        file: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Invalid content in {file} file: {reason}")]
    InvalidFileContent { file: &'static str, reason: String },

    #[error("Could not write brightness to {file} file: {source}")]
    FileWrite {
        file: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] BoundViolation),

    #[error("Value {value} does not fit in a {capacity} byte write buffer")]
    FormatOverflow { value: u32, capacity: usize },

    #[error("Control directory path is {len} bytes long, the limit is {max}")]
    PathTooLong { len: usize, max: usize },

    #[error("{0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Coarse classification of a [`BrightlightError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DirectoryAccess,
    FileAccess,
    FileRead,
    FileWrite,
    InvalidArgument,
    Configuration,
}

impl BrightlightError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DirectoryNotFound { .. }
            | Self::NotADirectory { .. }
            | Self::PermissionDenied { .. }
            | Self::DirectoryAccess { .. }
            | Self::NoDevices(_) => ErrorKind::DirectoryAccess,
            Self::FileOpen { .. } => ErrorKind::FileAccess,
            Self::FileRead { .. } | Self::InvalidFileContent { .. } => ErrorKind::FileRead,
            Self::FileWrite { .. } => ErrorKind::FileWrite,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::FormatOverflow { .. } | Self::PathTooLong { .. } | Self::InvalidRegex(_) => {
                ErrorKind::Configuration
            }
        }
    }
}
