//! Slnlink - register generated project files into the nearest solution
//!
//! After a template instantiates files on disk, this post-action finds
//! the nearest `*.sln` file above the output directory, works out which
//! generated files are projects, and adds them to the solution through
//! the `dotnet` CLI. The action reports everything through a message
//! sink and returns a plain success flag.

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod locator;
pub mod manifest;
pub mod models;
pub mod ports;
pub mod processor;
pub mod resolver;

// Re-exports for convenience
pub use config::{PostActionArgs, ProjectFilesSpec, RawArgs};
pub use error::{SlnlinkError, SlnlinkResult};
pub use locator::find_solution_files_at_or_above;
pub use models::{CommandResult, CreationEffects, CreationResult, PrimaryOutput};
pub use ports::{FileSystem, MessageSink, SolutionCli};
pub use processor::AddProjectsToSolution;
pub use resolver::{resolve_project_files, ResolveStrategy};
