/// Decode a fixed-length header field byte-for-byte.
///
/// Each byte maps to the char with the same code point (Latin-1), and
/// every null byte becomes a single space. Nothing is trimmed or filtered,
/// so the result always has exactly `buf.len()` chars.
pub fn read_latin1_fixed(buf: &[u8]) -> String {
    buf.iter()
        .map(|&b| if b == 0 { ' ' } else { char::from(b) })
        .collect()
}

/// Returns true for chars that a `.` in a line-oriented pattern never spans.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whitespace as file-name patterns see it: the ASCII blanks, line
/// terminators, the Unicode space separators and U+FEFF.
///
/// Differs from [`char::is_whitespace`] on U+0085 (not a blank here) and
/// U+FEFF (a blank here).
pub fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
