//! Typed error enum for loading the laureate tables.
//!
//! Every variant is fatal: the dashboard never renders from a partially
//! loaded context.

use std::io;
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

/// Failure to load one of the required CSV tables.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Required input file does not exist.
    #[error("required data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// File exists but could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File is not well-formed CSV (ragged rows, invalid header, ...).
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Header row lacks a column the loader depends on.
    #[error("{} is missing required column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

impl DataLoadError {
    /// Maps an open/read failure, keeping not-found distinct from other I/O errors.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source: err }
        }
    }

    /// Maps a CSV reader failure.
    pub fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        Self::Csv { path: path.into(), source: err }
    }

    /// The file the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Csv { path, .. }
            | Self::MissingColumn { path, .. } => path,
        }
    }
}

pub type Result<T> = StdResult<T, DataLoadError>;
