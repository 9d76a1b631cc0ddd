//! Display titles derived from ROM file names.
//!
//! ROM sets are usually named like
//! ```text
//! 0123 - Game Name (Europe) (En,Fr,De) [!].gba
//! ```
//! The catalog only wants `Game Name`: the extension, the leading release
//! number and the trailing tag groups are removed, in that order.

use std::path::Path;

use crate::TARGET_EXTENSION;
use crate::util::{is_line_terminator, is_pattern_whitespace};

/// Clean the final component of `path` into a display title.
///
/// Non-UTF-8 file names are converted lossily first.
pub fn clean_title(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    normalize_title(&file_name)
}

/// Clean a bare file name into a display title.
///
/// # Examples
///
/// ```
/// use gba_romname_core::title::normalize_title;
///
/// assert_eq!(normalize_title("0001 - Super Game [En].gba"), "Super Game");
/// assert_eq!(normalize_title("Some Title (Rev 1) [Proto].GBA"), "Some Title");
/// assert_eq!(normalize_title("NoPrefixTitle.gba"), "NoPrefixTitle");
/// ```
pub fn normalize_title(file_name: &str) -> String {
    let name = strip_extension(file_name);
    let name = strip_release_number(name);
    let name = strip_trailing_tags(name);
    name.split(is_pattern_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove a trailing `.gba`, any letter case.
fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case(TARGET_EXTENSION) => stem,
        _ => name,
    }
}

/// Remove a leading four-digit release number and its separator.
///
/// `"0123 - Title"`, `"0123-Title"` and `"0123Title"` all become `"Title"`.
fn strip_release_number(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return name;
    }
    let rest = name[4..].trim_start_matches(is_pattern_whitespace);
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    rest.trim_start_matches(is_pattern_whitespace)
}

/// Remove the longest run of `[...]` / `(...)` groups that ends the name.
///
/// Each group may be preceded by whitespace, and its contents may hold any
/// character except a line terminator, brackets included. A group may also
/// open with a colon (`[:...]`), which the contents absorb like any other
/// char. The run must reach the end of the name.
fn strip_trailing_tags(name: &str) -> &str {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let n = chars.len();

    // tagged[i]: chars[i..] is one or more complete groups.
    let mut tagged = vec![false; n];
    for i in (0..n).rev() {
        let mut j = i;
        while j < n && is_pattern_whitespace(chars[j].1) {
            j += 1;
        }
        let Some(close) = chars.get(j).and_then(|&(_, c)| closing_bracket(c)) else {
            continue;
        };
        for k in j + 1..n {
            let c = chars[k].1;
            if c == close && (k + 1 == n || tagged[k + 1]) {
                tagged[i] = true;
                break;
            }
            if is_line_terminator(c) {
                break;
            }
        }
    }

    match tagged.iter().position(|&t| t) {
        Some(i) => &name[..chars[i].0],
        None => name,
    }
}

fn closing_bracket(open: char) -> Option<char> {
    match open {
        '[' => Some(']'),
        '(' => Some(')'),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
