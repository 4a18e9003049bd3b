//! Project-file resolver
//!
//! Turns the action's configuration and the generation engine's outputs
//! into the ordered list of project files to add. Two strategies share
//! one entry point:
//!
//! - `ByIndex` (legacy): select primary outputs by position, or all of
//!   them when no indexes were configured.
//! - `ByGlob` (effects-based): map configured globs through the creation
//!   effects and keep targets whose extension ends in `proj`.
//!
//! Order is always preserved and duplicates pass through unchanged; the
//! external command sees exactly what the template author listed.

use std::path::{Path, PathBuf};

use crate::config::ProjectFilesSpec;
use crate::error::{SlnlinkError, SlnlinkResult};
use crate::models::{CreationEffects, CreationResult};

/// Which resolution strategy an entry point selected.
#[derive(Debug, Clone, Copy)]
pub enum ResolveStrategy<'a> {
    /// Select primary outputs by `primaryOutputIndexes`.
    ByIndex { indexes: Option<&'a str> },

    /// Map `projectFiles` globs through the creation effects.
    ByGlob {
        spec: &'a ProjectFilesSpec,
        effects: &'a CreationEffects,
    },
}

/// Resolve the ordered project-file list for one action invocation.
///
/// An empty result is returned as-is; the orchestrator decides that an
/// empty list is a failure.
pub fn resolve_project_files(
    strategy: ResolveStrategy<'_>,
    creation_result: &CreationResult,
    output_base_path: &Path,
) -> SlnlinkResult<Vec<PathBuf>> {
    match strategy {
        ResolveStrategy::ByIndex { indexes } => {
            resolve_by_index(indexes, creation_result, output_base_path)
        }
        ResolveStrategy::ByGlob { spec, effects } => {
            resolve_by_glob(spec, effects, output_base_path)
        }
    }
}

fn resolve_by_index(
    indexes: Option<&str>,
    creation_result: &CreationResult,
    output_base_path: &Path,
) -> SlnlinkResult<Vec<PathBuf>> {
    let outputs = &creation_result.primary_outputs;

    let Some(indexes) = indexes else {
        // No indexes configured: every primary output is a project.
        return Ok(outputs
            .iter()
            .map(|output| output_base_path.join(&output.path))
            .collect());
    };

    let mut files = Vec::new();

    for token in indexes.split(';').filter(|token| !token.is_empty()) {
        let token = token.trim();
        let index: usize =
            token
                .parse()
                .map_err(|_| SlnlinkError::InvalidOutputIndex {
                    token: token.to_string(),
                })?;

        let output = outputs
            .get(index)
            .ok_or(SlnlinkError::OutputIndexOutOfRange {
                index,
                count: outputs.len(),
            })?;

        files.push(output_base_path.join(&output.path));
    }

    Ok(files)
}

fn resolve_by_glob(
    spec: &ProjectFilesSpec,
    effects: &CreationEffects,
    output_base_path: &Path,
) -> SlnlinkResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for glob in spec.globs() {
        for target in effects.targets_for_source(glob) {
            if has_project_extension(target) {
                files.push(output_base_path.join(target));
            }
        }
    }

    if files.is_empty() {
        return Err(SlnlinkError::NoProjectFilesMatched);
    }

    Ok(files)
}

/// Extension-suffix match: `.csproj`, `.fsproj`, `.vbproj`, but also any
/// custom extension ending in `proj`. Not an equality check.
fn has_project_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.to_ascii_lowercase().ends_with("proj"))
}
