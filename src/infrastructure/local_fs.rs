//! Local file system implementation
//!
//! Implements the FileSystem port over `std::fs` directory listings.

use std::path::{Path, PathBuf};

use crate::ports::{FileSystem, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn list_files_with_extension(&self, dir: &Path, extension: &str) -> FsResult<Vec<PathBuf>> {
        let mut matches = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let is_match = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            if is_match {
                matches.push(path);
            }
        }

        Ok(matches)
    }
}
