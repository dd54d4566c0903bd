//! Tables directory permission checks

use crate::constants::FORBIDDEN_DIR_MODE_BITS;
use crate::error::{Result, TableError};
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Ensure the tables directory exists and is accessible only by its owner
///
/// Symlinks are followed. The directory is only inspected, never chmod-ed.
pub fn validate_directory_permissions(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TableError::NotFound {
            path: path.to_path_buf(),
        },
        _ => TableError::Stat {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_dir() {
        return Err(TableError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let mode = metadata.permissions().mode() & 0o7777;
    if mode & FORBIDDEN_DIR_MODE_BITS != 0 {
        return Err(TableError::InsecureDirectory {
            path: path.to_path_buf(),
            mode,
        });
    }

    Ok(())
}
