use super::*;

/// Build a synthetic GBA ROM image with the given title and code fields.
fn make_gba_rom(title: &[u8; 12], code: &[u8; 4], size: usize) -> Vec<u8> {
    let mut rom = vec![0u8; size];

    // Entry point (ARM branch instruction placeholder)
    rom[0x03] = 0xEA;

    rom[0xA0..0xAC].copy_from_slice(title);
    rom[0xAC..0xB0].copy_from_slice(code);

    // Maker code at 0xB0 and fixed value at 0xB2, outside the decoded fields
    rom[0xB0..0xB2].copy_from_slice(b"01");
    rom[0xB2] = 0x96;

    rom
}

#[test]
fn test_parse_full_header() {
    let rom = make_gba_rom(b"POKEMON EMER", b"BPEE", 0x4000);
    let header = RomHeader::parse(&rom);
    assert_eq!(header.game_title, "POKEMON EMER");
    assert_eq!(header.game_code, "BPEE");
    assert_eq!(header.key(), "POKEMON EMERBPEE");
}

#[test]
fn test_parse_replaces_nulls_with_spaces() {
    let rom = make_gba_rom(b"GAME TITLE\0\0", b"AB\0D", 0x200);
    let header = RomHeader::parse(&rom);
    assert_eq!(header.game_title, "GAME TITLE  ");
    assert_eq!(header.game_code, "AB D");
    assert_eq!(header.key(), "GAME TITLE  AB D");
}

#[test]
fn test_parse_exact_window() {
    let rom = make_gba_rom(b"TESTGAME\0\0\0\0", b"ATEJ", HEADER_SIZE);
    let header = RomHeader::parse(&rom);
    assert_eq!(header.game_title, "TESTGAME    ");
    assert_eq!(header.game_code, "ATEJ");
}

#[test]
fn test_parse_empty_input() {
    let header = RomHeader::parse(&[]);
    assert_eq!(header.game_title, " ".repeat(12));
    assert_eq!(header.game_code, " ".repeat(4));
    assert!(header.key().trim().is_empty());
}

#[test]
fn test_parse_truncated_inside_title() {
    let mut data = vec![0u8; 0xA4];
    data[0xA0..0xA4].copy_from_slice(b"ABCD");
    let header = RomHeader::parse(&data);
    assert_eq!(header.game_title, "ABCD        ");
    assert_eq!(header.game_code, "    ");
}

#[test]
fn test_parse_truncated_inside_code() {
    let rom = make_gba_rom(b"SHORTROMTEST", b"XYZW", 0x200);
    let header = RomHeader::parse(&rom[..0xAE]);
    assert_eq!(header.game_title, "SHORTROMTEST");
    assert_eq!(header.game_code, "XY  ");
}

#[test]
fn test_parse_keeps_non_ascii_bytes() {
    let rom = make_gba_rom(b"\x82\xA0\x82\xA2GAME\0\0\0\0", b"AJPJ", 0x200);
    let header = RomHeader::parse(&rom);
    assert_eq!(header.game_title.chars().count(), 12);
    assert!(!header.game_title.is_ascii());
    assert!(header.game_title.starts_with('\u{82}'));
}

#[test]
fn test_key_is_untrimmed() {
    let header = RomHeader {
        game_title: "  TITLE     ".to_string(),
        game_code: "AB  ".to_string(),
    };
    assert_eq!(header.key(), "  TITLE     AB  ");
}
