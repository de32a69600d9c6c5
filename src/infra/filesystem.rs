//! Filesystem operations
//!
//! Handles directory creation and listing for the cache layout.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// List the entries of a directory
pub fn list_dir(path: &Path) -> Result<Vec<PathBuf>, FilesystemError> {
    let entries = std::fs::read_dir(path).map_err(|e| FilesystemError::ListDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FilesystemError::ListDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        paths.push(entry.path());
    }

    Ok(paths)
}
