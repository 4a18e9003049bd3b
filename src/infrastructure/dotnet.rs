//! Dotnet CLI invocation
//!
//! Implements the SolutionCli port by running
//! `dotnet sln <solution> add <projects...>` synchronously with both
//! streams captured. Exactly one attempt per call; a hanging `dotnet`
//! blocks the caller, matching the engine's synchronous action model.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{SlnlinkError, SlnlinkResult};
use crate::models::CommandResult;
use crate::ports::SolutionCli;

const DOTNET_PROGRAM: &str = "dotnet";

/// Solution command backed by the `dotnet` CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct DotnetCli;

impl DotnetCli {
    pub fn new() -> Self {
        Self
    }

    /// Check if `dotnet` is installed and available
    pub fn check_available() -> bool {
        Command::new(DOTNET_PROGRAM)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl SolutionCli for DotnetCli {
    fn add_projects(&self, solution: &Path, projects: &[PathBuf]) -> SlnlinkResult<CommandResult> {
        let output = Command::new(DOTNET_PROGRAM)
            .arg("sln")
            .arg(solution)
            .arg("add")
            .args(projects)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| SlnlinkError::CommandSpawn {
                program: DOTNET_PROGRAM.to_string(),
                source,
            })?;

        Ok(CommandResult {
            // Termination by signal has no exit code; report it as -1.
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_available_does_not_panic() {
        let _ = DotnetCli::check_available();
    }
}
