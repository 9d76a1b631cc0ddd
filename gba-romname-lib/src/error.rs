use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that stop the directory walk.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root path is missing or cannot be inspected
    #[error("Cannot access {}: {source}", .path.display())]
    Root { path: PathBuf, source: io::Error },

    /// The root path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A directory inside the tree could not be listed
    #[error("Cannot read directory {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },
}

impl ScanError {
    pub fn root(path: &Path, source: io::Error) -> Self {
        Self::Root {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn read_dir(path: &Path, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Errors that abort catalog generation as a whole.
///
/// Unreadable ROM files are not in here: they are logged and skipped.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The ROM tree could not be walked
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Writing a catalog line failed
    #[error("Failed to write catalog output: {0}")]
    Output(#[from] io::Error),
}
