//! Destination directory naming.
//!
//! Paths here are where the download agent writes, which may be a different
//! host; nothing is created locally.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Folder name for a handle argument: the first of a comma-separated list,
/// without a leading `@`.
pub fn folder_name(handles: &str) -> Result<String> {
    let first = handles
        .split(',')
        .map(str::trim)
        .find(|h| !h.is_empty())
        .unwrap_or("");

    sanitize_path_component(first.trim_start_matches('@'))
}

/// Absolute directory handed to the download agent for a folder.
pub fn destination_dir(base_directory: &Path, folder: &str) -> PathBuf {
    base_directory.join(folder)
}
