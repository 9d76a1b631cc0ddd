use std::fs;
use std::path::Path;

/// Write a small GBA ROM with the given header title and code fields.
pub fn write_rom(path: &Path, title: &[u8; 12], code: &[u8; 4]) {
    let mut rom = vec![0u8; 0x200];
    rom[0x03] = 0xEA;
    rom[0xA0..0xAC].copy_from_slice(title);
    rom[0xAC..0xB0].copy_from_slice(code);
    rom[0xB2] = 0x96;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, rom).unwrap();
}
