//! Game Boy Advance cartridge header fields.
//!
//! Only the first [`HEADER_SIZE`] bytes of a ROM are ever looked at. Within
//! that window the catalog needs two fields:
//!
//! ```text
//! 0xA0..0xAC  game title (12 bytes, null-padded)
//! 0xAC..0xB0  game code  (4 bytes, e.g. "AXVE")
//! ```

use std::ops::Range;

use crate::util::read_latin1_fixed;

/// Number of bytes read from the start of each ROM.
pub const HEADER_SIZE: usize = 0xC0;

const TITLE_RANGE: Range<usize> = 0xA0..0xAC;
const CODE_RANGE: Range<usize> = 0xAC..0xB0;

/// Identification fields decoded from a ROM header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomHeader {
    /// Internal title, 12 chars, nulls replaced by spaces.
    pub game_title: String,
    /// Game code, 4 chars, nulls replaced by spaces.
    pub game_code: String,
}

impl RomHeader {
    /// Decode the header fields from the start of a ROM image.
    ///
    /// `data` may be shorter than [`HEADER_SIZE`]; the missing tail reads as
    /// zero bytes. Anything past [`HEADER_SIZE`] is ignored.
    pub fn parse(data: &[u8]) -> Self {
        let mut window = [0u8; HEADER_SIZE];
        let len = data.len().min(HEADER_SIZE);
        window[..len].copy_from_slice(&data[..len]);

        Self {
            game_title: read_latin1_fixed(&window[TITLE_RANGE]),
            game_code: read_latin1_fixed(&window[CODE_RANGE]),
        }
    }

    /// Title followed by code, untrimmed.
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(self.game_title.len() + self.game_code.len());
        key.push_str(&self.game_title);
        key.push_str(&self.game_code);
        key
    }
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
