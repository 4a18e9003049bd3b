//! Post-action configuration
//!
//! Template authors configure the action through a string-keyed argument
//! map. This module decodes that map once, at the boundary, into a typed
//! structure so the two resolver strategies are statically distinguishable:
//!
//! - `primaryOutputIndexes`: semicolon-separated primary-output indexes
//!   (legacy strategy)
//! - `projectFiles`: a JSON value, either one glob string or an array of
//!   glob strings (effects-based strategy)

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{SlnlinkError, SlnlinkResult};

/// Raw string-keyed argument map as the generation engine supplies it.
pub type RawArgs = HashMap<String, String>;

/// The `projectFiles` argument decoded from JSON.
///
/// Template authors may write a single glob or an array of globs;
/// non-string array elements are ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilesSpec {
    One(String),
    Many(Vec<String>),
}

impl ProjectFilesSpec {
    /// The configured glob strings in declaration order.
    pub fn globs(&self) -> Vec<&str> {
        match self {
            ProjectFilesSpec::One(glob) => vec![glob.as_str()],
            ProjectFilesSpec::Many(globs) => globs.iter().map(String::as_str).collect(),
        }
    }

    fn from_json(raw: &str) -> SlnlinkResult<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| SlnlinkError::InvalidProjectFilesValue {
                message: e.to_string(),
            })?;

        match value {
            Value::String(glob) => Ok(ProjectFilesSpec::One(glob)),
            Value::Array(items) => {
                let globs = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(glob) => Some(glob),
                        _ => None,
                    })
                    .collect();
                Ok(ProjectFilesSpec::Many(globs))
            }
            // Any other well-formed JSON shape matches nothing, which the
            // resolver reports as "no project files".
            _ => Ok(ProjectFilesSpec::Many(Vec::new())),
        }
    }
}

/// Typed view of the action's arguments.
#[derive(Debug, Clone, Default)]
pub struct PostActionArgs {
    /// Semicolon-separated indexes into the primary outputs. Absent means
    /// "every primary output is a project".
    pub primary_output_indexes: Option<String>,

    /// Globs selecting generated project files through the creation
    /// effects. Absent means the template did not opt in to the
    /// effects-based strategy.
    pub project_files: Option<ProjectFilesSpec>,
}

impl PostActionArgs {
    /// Decode the raw argument map.
    ///
    /// A malformed `projectFiles` JSON value is an error here, so the
    /// caller can log it and fail the action instead of panicking midway
    /// through resolution.
    pub fn from_raw(raw: &RawArgs) -> SlnlinkResult<Self> {
        let project_files = match raw.get("projectFiles") {
            Some(value) => Some(ProjectFilesSpec::from_json(value)?),
            None => None,
        };

        Ok(Self {
            primary_output_indexes: raw.get("primaryOutputIndexes").cloned(),
            project_files,
        })
    }
}
