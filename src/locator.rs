//! Solution locator
//!
//! Nearest-wins search for solution files: starting at the output
//! directory, ascend toward the filesystem root and stop at the first
//! level that contains any `*.sln` file, even when that level has more
//! than one. The caller decides whether an ambiguous (multi-match)
//! level is acceptable.

use std::path::{Path, PathBuf};

use crate::ports::FileSystem;

/// File extension identifying solution files.
pub const SOLUTION_EXTENSION: &str = "sln";

/// Find the solution files in the nearest enclosing directory of
/// `start_path` that has any.
///
/// Returns the matches of the first level yielding matches, or an empty
/// list when the root is reached without one. Listing errors at a level
/// (the directory vanished, permissions) are treated as "no matches
/// here" and the ascent continues.
pub fn find_solution_files_at_or_above(
    fs: &dyn FileSystem,
    start_path: &Path,
) -> Vec<PathBuf> {
    let mut current: Option<&Path> = Some(start_path);

    while let Some(dir) = current {
        if let Ok(matches) = fs.list_files_with_extension(dir, SOLUTION_EXTENSION) {
            if !matches.is_empty() {
                return matches;
            }
        }
        current = dir.parent();
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::ports::FsResult;

    /// In-memory filesystem: directory path -> file names inside it.
    struct MapFs {
        dirs: HashMap<PathBuf, Vec<String>>,
    }

    impl MapFs {
        fn new(entries: &[(&str, &[&str])]) -> Self {
            let dirs = entries
                .iter()
                .map(|(dir, files)| {
                    (
                        PathBuf::from(dir),
                        files.iter().map(|f| f.to_string()).collect(),
                    )
                })
                .collect();
            Self { dirs }
        }
    }

    impl FileSystem for MapFs {
        fn list_files_with_extension(&self, dir: &Path, extension: &str) -> FsResult<Vec<PathBuf>> {
            let files = self.dirs.get(dir).cloned().unwrap_or_default();
            Ok(files
                .iter()
                .filter(|name| {
                    Path::new(name)
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
                })
                .map(|name| dir.join(name))
                .collect())
        }
    }

    #[test]
    fn finds_solution_in_start_directory() {
        let fs = MapFs::new(&[
            ("/repo", &["Top.sln"][..]),
            ("/repo/src/app", &["App.sln", "readme.md"][..]),
        ]);

        let found = find_solution_files_at_or_above(&fs, Path::new("/repo/src/app"));
        assert_eq!(found, vec![PathBuf::from("/repo/src/app/App.sln")]);
    }

    #[test]
    fn nearest_level_wins_over_ancestors() {
        let fs = MapFs::new(&[
            ("/repo", &["Top.sln"][..]),
            ("/repo/src", &["Mid.sln"][..]),
            ("/repo/src/app", &["app.csproj"][..]),
        ]);

        let found = find_solution_files_at_or_above(&fs, Path::new("/repo/src/app"));
        assert_eq!(found, vec![PathBuf::from("/repo/src/Mid.sln")]);
    }

    #[test]
    fn multiple_matches_at_one_level_all_returned() {
        let fs = MapFs::new(&[("/repo", &["A.sln", "B.sln"][..])]);

        let found = find_solution_files_at_or_above(&fs, Path::new("/repo"));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn no_solution_anywhere_is_empty() {
        let fs = MapFs::new(&[("/repo/src/app", &["app.csproj"][..])]);

        let found = find_solution_files_at_or_above(&fs, Path::new("/repo/src/app"));
        assert!(found.is_empty());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let fs = MapFs::new(&[("/repo", &["Legacy.SLN"][..])]);

        let found = find_solution_files_at_or_above(&fs, Path::new("/repo"));
        assert_eq!(found, vec![PathBuf::from("/repo/Legacy.SLN")]);
    }
}
