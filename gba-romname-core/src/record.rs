use std::fmt;

use crate::header::RomHeader;
use crate::util::is_pattern_whitespace;

/// Line terminator for catalog output, independent of the host platform.
pub const LINE_ENDING: &str = "\r\n";

/// One catalog line: `key|game_code|display_title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    /// Untrimmed `game_title + game_code`.
    pub key: String,
    pub game_code: String,
    pub display_title: String,
}

impl CatalogRecord {
    /// Build a record, or `None` when the header cannot identify the ROM.
    ///
    /// A header is unusable when its key is blank after trimming or holds
    /// any non-ASCII char.
    pub fn from_header(header: RomHeader, display_title: String) -> Option<Self> {
        let key = header.key();
        if key.trim_matches(is_pattern_whitespace).is_empty() || !key.is_ascii() {
            return None;
        }
        Some(Self {
            key,
            game_code: header.game_code,
            display_title,
        })
    }
}

impl fmt::Display for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.key, self.game_code, self.display_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(title: &str, code: &str) -> RomHeader {
        RomHeader {
            game_title: title.to_string(),
            game_code: code.to_string(),
        }
    }

    #[test]
    fn test_valid_record_line() {
        let record =
            CatalogRecord::from_header(header("GAME TITLE  ", "ABCD"), "Game".to_string()).unwrap();
        assert_eq!(record.key, "GAME TITLE  ABCD");
        assert_eq!(record.to_string(), "GAME TITLE  ABCD|ABCD|Game");
    }

    #[test]
    fn test_code_keeps_embedded_spaces() {
        let record =
            CatalogRecord::from_header(header("TITLE       ", "AB D"), String::new()).unwrap();
        assert_eq!(record.to_string(), "TITLE       AB D|AB D|");
    }

    #[test]
    fn test_blank_key_is_skipped() {
        assert!(CatalogRecord::from_header(header("            ", "    "), "X".into()).is_none());
        assert!(CatalogRecord::from_header(header("", ""), "X".into()).is_none());
    }

    #[test]
    fn test_code_alone_is_enough() {
        let record = CatalogRecord::from_header(header("            ", "AXVE"), "X".into()).unwrap();
        assert_eq!(record.key, "            AXVE");
    }

    #[test]
    fn test_non_ascii_key_is_skipped() {
        assert!(CatalogRecord::from_header(header("G\u{E9}ME        ", "ABCD"), "X".into()).is_none());
        assert!(CatalogRecord::from_header(header("GAME        ", "AB\u{FF}D"), "X".into()).is_none());
    }
}
