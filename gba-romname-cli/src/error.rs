use std::path::{Path, PathBuf};

use thiserror::Error;

use gba_romname_lib::CatalogError;

/// Errors that end the CLI run with a failure status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Scanning the ROM directory or writing the catalog failed
    #[error("Error processing ROMs in {}: {source}", .path.display())]
    Catalog { path: PathBuf, source: CatalogError },

    /// Runtime creation failed
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn catalog(path: &Path, source: CatalogError) -> Self {
        Self::Catalog {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
