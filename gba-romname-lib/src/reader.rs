use std::io;
use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use gba_romname_core::{HEADER_SIZE, RomHeader};

/// Read and decode the header window of one ROM file.
///
/// At most [`HEADER_SIZE`] bytes are read; shorter files decode as if
/// zero-padded. The file handle is closed before this returns, whether the
/// read succeeded or not.
pub async fn read_header(path: &Path) -> io::Result<RomHeader> {
    let mut window = Vec::with_capacity(HEADER_SIZE);
    File::open(path)
        .await?
        .take(HEADER_SIZE as u64)
        .read_to_end(&mut window)
        .await?;
    Ok(RomHeader::parse(&window))
}
