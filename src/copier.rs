//! Recursive verbatim directory copying.
//! Mirrors a source tree into a destination tree byte-for-byte, creating
//! missing directories and silently overwriting existing files.

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Copies the directory tree at `src_dir` into `dest_dir`.
///
/// `dest_dir` and any missing ancestors are created. Files are copied as
/// raw bytes; an existing destination file is overwritten without notice.
/// Subtrees already copied before a failure remain on disk — there is no
/// rollback.
///
/// # Errors
/// * `Error::Template` if an entry cannot be walked
/// * `Error::Copy` on a failed file copy, carrying both operand paths
pub fn copy_tree(src_dir: &Path, dest_dir: &Path) -> Result<()> {
    for entry in WalkDir::new(src_dir) {
        let entry = entry.map_err(|e| Error::Template(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(|e| Error::Template(e.to_string()))?;
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::Io)?;
        } else {
            debug!("Copying file: {}", target.display());
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(Error::Io)?;
            }
            fs::copy(entry.path(), &target).map(|_| ()).map_err(|e| Error::Copy {
                source_path: entry.path().display().to_string(),
                dest_path: target.display().to_string(),
                source: e,
            })?;
        }
    }
    Ok(())
}
