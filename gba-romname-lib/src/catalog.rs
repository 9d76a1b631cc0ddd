//! Catalog generation: walk a ROM tree and write one line per usable ROM.

use std::io::{self, Write};
use std::path::Path;

use futures::StreamExt;
use futures::stream;

use gba_romname_core::{CatalogRecord, LINE_ENDING, clean_title};

use crate::error::CatalogError;
use crate::options::ScanOptions;
use crate::{reader, scanner};

/// Counters for one catalog run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// ROM files found by the scan
    pub candidates: usize,
    /// Lines written
    pub emitted: usize,
    /// Files whose header had no usable title/code
    pub skipped: usize,
    /// Files that could not be read
    pub failed: usize,
}

/// Writes catalog records as CRLF-terminated lines.
pub struct CatalogWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> CatalogWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn write_record(&mut self, record: &CatalogRecord) -> io::Result<()> {
        write!(self.out, "{record}{LINE_ENDING}")?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered output.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Catalog every ROM under `root` into `out`.
///
/// Headers are read with up to `options.jobs` files open at once, but
/// records are written in sorted path order. A file that cannot be read is
/// logged and skipped; failing to scan `root` or to write `out` aborts the
/// run.
pub async fn write_catalog<W: Write>(
    root: &Path,
    options: &ScanOptions,
    out: W,
) -> Result<CatalogSummary, CatalogError> {
    let files = scanner::find_rom_files(root).await?;
    log::debug!("Found {} ROM files in {}", files.len(), root.display());

    let mut summary = CatalogSummary {
        candidates: files.len(),
        ..Default::default()
    };
    let mut writer = CatalogWriter::new(out);

    let mut headers = stream::iter(files)
        .map(|path| async move {
            let header = reader::read_header(&path).await;
            (path, header)
        })
        .buffered(options.jobs.max(1));

    while let Some((path, header)) = headers.next().await {
        let header = match header {
            Ok(h) => h,
            Err(e) => {
                log::error!("Error reading file {}: {}", path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        match CatalogRecord::from_header(header, clean_title(&path)) {
            Some(record) => writer.write_record(&record)?,
            None => {
                log::debug!("Skipping {}: no usable title or code", path.display());
                summary.skipped += 1;
            }
        }
    }

    summary.emitted = writer.written();
    writer.finish()?;
    Ok(summary)
}
