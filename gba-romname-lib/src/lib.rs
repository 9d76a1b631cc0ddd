//! Filesystem side of the GBA ROM catalog: scanning, header reading and
//! catalog output.

pub mod catalog;
pub mod error;
pub mod options;
pub mod reader;
pub mod scanner;

// Re-export core types so frontends only need this crate
pub use gba_romname_core::{
    CatalogRecord, HEADER_SIZE, LINE_ENDING, RomHeader, TARGET_EXTENSION, clean_title,
    normalize_title,
};

pub use catalog::{CatalogSummary, CatalogWriter, write_catalog};
pub use error::{CatalogError, ScanError};
pub use options::{DEFAULT_JOBS, ScanOptions};
