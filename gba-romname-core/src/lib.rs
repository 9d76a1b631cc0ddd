//! Domain types for cataloguing Game Boy Advance ROMs.
//!
//! Nothing here touches the filesystem: header decoding works on byte
//! slices and title cleaning works on names.

pub mod header;
pub mod record;
pub mod title;
pub mod util;

pub use header::{HEADER_SIZE, RomHeader};
pub use record::{CatalogRecord, LINE_ENDING};
pub use title::{clean_title, normalize_title};

/// File name suffix of the ROMs this tool catalogs, compared case-insensitively.
pub const TARGET_EXTENSION: &str = "gba";
