//! Directory scanner for GBA ROM collections.
//!
//! Walks the whole tree under a root, listing sibling directories
//! concurrently, and returns every non-directory entry whose path ends in
//! the target extension. The result is sorted so catalog output is stable.

use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};

use gba_romname_core::TARGET_EXTENSION;
use gba_romname_core::util::is_line_terminator;

use crate::error::ScanError;

/// Find all ROM files under `root`, at any depth.
///
/// `root` is made absolute (symlinks are left unresolved) and must be an
/// existing directory. Any directory in the tree that cannot be listed
/// fails the whole scan. Directory symlinks are not followed.
pub async fn find_rom_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let root = std::path::absolute(root).map_err(|e| ScanError::root(root, e))?;
    let metadata = tokio::fs::metadata(&root)
        .await
        .map_err(|e| ScanError::root(&root, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root));
    }

    let mut files = walk(root).await?;
    files.sort();
    Ok(files)
}

/// Check whether a path looks like a ROM by its trailing text.
///
/// The match is a plain suffix test on the whole path: `gba` in any letter
/// case, preceded by at least one char other than a line terminator. No dot
/// is required, so `foogba` qualifies.
pub fn matches_extension(path: &Path) -> bool {
    let text = path.to_string_lossy();
    let Some(split) = text.len().checked_sub(TARGET_EXTENSION.len()) else {
        return false;
    };
    if !text.is_char_boundary(split) || !text[split..].eq_ignore_ascii_case(TARGET_EXTENSION) {
        return false;
    }
    text[..split]
        .chars()
        .next_back()
        .is_some_and(|c| !is_line_terminator(c))
}

fn walk(dir: PathBuf) -> BoxFuture<'static, Result<Vec<PathBuf>, ScanError>> {
    async move {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| ScanError::read_dir(&dir, e))?;

        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ScanError::read_dir(&dir, e))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| ScanError::read_dir(&dir, e))?;
            if file_type.is_dir() {
                subdirs.push(walk(path));
            } else if matches_extension(&path) {
                files.push(path);
            }
        }

        for nested in try_join_all(subdirs).await? {
            files.extend(nested);
        }
        log::trace!("{}: {} ROM files", dir.display(), files.len());
        Ok(files)
    }
    .boxed()
}
