//! Solution command port
//!
//! One operation: add a list of project files to a solution file by
//! running the external build tool. The call blocks until the tool
//! exits; no retry, no timeout.

use std::path::{Path, PathBuf};

use crate::error::SlnlinkResult;
use crate::models::CommandResult;

/// Abstract "add projects to solution" command
///
/// Implementations:
/// - `DotnetCli` - runs `dotnet sln <solution> add <projects...>`
/// - fakes in tests
pub trait SolutionCli {
    /// Run the command once, capturing both output streams.
    ///
    /// A non-zero exit is not an error here - it comes back inside the
    /// `CommandResult`. Errors are reserved for failing to run the
    /// command at all.
    fn add_projects(&self, solution: &Path, projects: &[PathBuf]) -> SlnlinkResult<CommandResult>;
}
