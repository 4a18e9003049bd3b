//! Core data models for slnlink
//!
//! Defines the data the generation engine hands to the post-action:
//! - `CreationResult`: the ordered primary outputs of a template run
//! - `CreationEffects`: the source-reference to generated-target mapping
//! - `CommandResult`: exit code and captured streams of the external command
//!
//! All of these are read-only inputs; nothing here outlives one action
//! invocation.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A file path the generation engine reports as a main artifact of
/// template instantiation, relative to the output base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryOutput {
    pub path: PathBuf,
}

impl PrimaryOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Ordered primary outputs of a completed template run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreationResult {
    #[serde(default)]
    pub primary_outputs: Vec<PrimaryOutput>,
}

impl CreationResult {
    pub fn new(primary_outputs: Vec<PrimaryOutput>) -> Self {
        Self { primary_outputs }
    }
}

/// Report mapping template source references to the concrete output-relative
/// paths they were materialized to.
///
/// A single source reference (typically a glob) may have produced several
/// targets; target order within one source is the order generation emitted
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreationEffects {
    #[serde(default)]
    file_changes: HashMap<String, Vec<PathBuf>>,
}

impl CreationEffects {
    pub fn new(file_changes: HashMap<String, Vec<PathBuf>>) -> Self {
        Self { file_changes }
    }

    /// Targets generated for a source reference, in generation order.
    /// Unknown sources resolve to nothing.
    pub fn targets_for_source(&self, source: &str) -> &[PathBuf] {
        self.file_changes.get(source).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Exit code and captured streams from one external command run.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
