//! Run manifest for the standalone CLI
//!
//! The generation engine hands the post-action its inputs in memory;
//! the `slnlink run` subcommand takes the same inputs from a JSON file
//! written at generation time:
//!
//! ```json
//! {
//!   "args": { "projectFiles": "[\"src/*.csproj\"]" },
//!   "primaryOutputs": [{ "path": "src/App.csproj" }],
//!   "fileChanges": { "src/*.csproj": ["src/App.csproj"] }
//! }
//! ```
//!
//! `fileChanges` is optional; without it only the legacy index strategy
//! is available.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::RawArgs;
use crate::error::{SlnlinkError, SlnlinkResult};
use crate::models::{CreationEffects, CreationResult, PrimaryOutput};

/// Post-action inputs persisted by a generation run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub args: RawArgs,

    #[serde(default)]
    pub primary_outputs: Vec<PrimaryOutput>,

    #[serde(default)]
    pub file_changes: Option<HashMap<String, Vec<PathBuf>>>,
}

impl Manifest {
    /// Load and decode a manifest file.
    pub fn load(path: &Path) -> SlnlinkResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                SlnlinkError::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SlnlinkError::Io(err)
            }
        })?;

        Ok(serde_json::from_str(&text)?)
    }

    /// Split into the shapes the action entry points take.
    pub fn into_inputs(self) -> (RawArgs, CreationResult, Option<CreationEffects>) {
        let effects = self.file_changes.map(CreationEffects::new);
        (self.args, CreationResult::new(self.primary_outputs), effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_round_trips_all_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("postaction.json");
        std::fs::write(
            &path,
            r#"{
                "args": { "projectFiles": "\"*.csproj\"" },
                "primaryOutputs": [{ "path": "src/App.csproj" }],
                "fileChanges": { "*.csproj": ["src/App.csproj"] }
            }"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        let (args, result, effects) = manifest.into_inputs();

        assert_eq!(args.get("projectFiles").unwrap(), "\"*.csproj\"");
        assert_eq!(result.primary_outputs.len(), 1);
        let effects = effects.unwrap();
        assert_eq!(
            effects.targets_for_source("*.csproj"),
            &[PathBuf::from("src/App.csproj")]
        );
    }

    #[test]
    fn missing_fields_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("postaction.json");
        std::fs::write(&path, "{}").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.args.is_empty());
        assert!(manifest.primary_outputs.is_empty());
        assert!(manifest.file_changes.is_none());
    }

    #[test]
    fn missing_file_is_manifest_not_found() {
        let err = Manifest::load(Path::new("/no/such/manifest.json")).unwrap_err();
        assert!(matches!(err, SlnlinkError::ManifestNotFound { .. }));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("postaction.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, SlnlinkError::Json(_)));
    }
}
