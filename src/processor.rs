//! The add-projects-to-solution post-action
//!
//! Orchestrates the three steps every invocation runs exactly once:
//! locate the nearest solution file, resolve which generated files are
//! projects, and invoke the external add command. Every outcome - good
//! or bad - is reported through the message sink; the return value is a
//! bare success flag and no error ever escapes the entry points.

use std::path::{Path, PathBuf};

use uuid::{uuid, Uuid};

use crate::config::{PostActionArgs, RawArgs};
use crate::locator::find_solution_files_at_or_above;
use crate::models::{CommandResult, CreationEffects, CreationResult};
use crate::ports::{FileSystem, MessageSink, SolutionCli};
use crate::resolver::{resolve_project_files, ResolveStrategy};

const MSG_UNRESOLVED_SOLUTION: &str =
    "Unable to determine the solution file to add generated projects to.";
const MSG_NO_PROJECT_FILES: &str =
    "Unable to determine which project files to add to the solution.";

/// Post-action that registers generated project files into the nearest
/// solution file.
pub struct AddProjectsToSolution<'a> {
    fs: &'a dyn FileSystem,
    solution_cli: &'a dyn SolutionCli,
    sink: &'a dyn MessageSink,
}

impl<'a> AddProjectsToSolution<'a> {
    /// Identifier the surrounding orchestration format dispatches on.
    /// Must stay bit-exact across implementations.
    pub const ID: Uuid = uuid!("d396686c-de0e-4de6-906d-291cd29fc5de");

    pub fn new(
        fs: &'a dyn FileSystem,
        solution_cli: &'a dyn SolutionCli,
        sink: &'a dyn MessageSink,
    ) -> Self {
        Self {
            fs,
            solution_cli,
            sink,
        }
    }

    /// Legacy entry point: project files come from the primary outputs,
    /// selected by `primaryOutputIndexes` when configured.
    pub fn process(
        &self,
        args: &RawArgs,
        creation_result: &CreationResult,
        output_base_path: &Path,
    ) -> bool {
        self.run(args, None, creation_result, output_base_path)
    }

    /// Effects-aware entry point: when the template configured
    /// `projectFiles`, globs are mapped through the creation effects;
    /// otherwise this behaves exactly like [`process`](Self::process).
    pub fn process_with_effects(
        &self,
        args: &RawArgs,
        creation_effects: &CreationEffects,
        creation_result: &CreationResult,
        output_base_path: &Path,
    ) -> bool {
        self.run(args, Some(creation_effects), creation_result, output_base_path)
    }

    fn run(
        &self,
        raw_args: &RawArgs,
        creation_effects: Option<&CreationEffects>,
        creation_result: &CreationResult,
        output_base_path: &Path,
    ) -> bool {
        if output_base_path.as_os_str().to_string_lossy().trim().is_empty() {
            self.sink.log(MSG_UNRESOLVED_SOLUTION);
            return false;
        }

        let found = find_solution_files_at_or_above(self.fs, output_base_path);
        if found.len() != 1 {
            self.sink.log(MSG_UNRESOLVED_SOLUTION);
            return false;
        }
        let solution = &found[0];

        let args = match PostActionArgs::from_raw(raw_args) {
            Ok(args) => args,
            Err(err) => {
                self.sink.log(&err.to_string());
                self.sink.log(MSG_NO_PROJECT_FILES);
                return false;
            }
        };

        // Templates opt in to the glob strategy by configuring
        // `projectFiles`; without it (or without effects) the legacy
        // index strategy applies.
        let strategy = match (creation_effects, &args.project_files) {
            (Some(effects), Some(spec)) => ResolveStrategy::ByGlob { spec, effects },
            _ => ResolveStrategy::ByIndex {
                indexes: args.primary_output_indexes.as_deref(),
            },
        };

        let projects = match resolve_project_files(strategy, creation_result, output_base_path) {
            Ok(projects) if !projects.is_empty() => projects,
            Ok(_) => {
                self.sink.log(MSG_NO_PROJECT_FILES);
                return false;
            }
            Err(err) => {
                self.sink.log(&err.to_string());
                self.sink.log(MSG_NO_PROJECT_FILES);
                return false;
            }
        };

        let project_list = display_list(&projects);
        self.sink.log(&format!(
            "Adding project(s) {} to solution file {}...",
            project_list,
            solution.display()
        ));

        let result = match self.solution_cli.add_projects(solution, &projects) {
            Ok(result) => result,
            Err(err) => {
                self.log_failure(&project_list, solution);
                self.sink.log(&err.to_string());
                return false;
            }
        };

        if result.success() {
            self.sink.log(&format!(
                "Successfully added project(s) {} to solution file {}.",
                project_list,
                solution.display()
            ));
            true
        } else {
            self.log_failure(&project_list, solution);
            self.log_command_output(&result);
            false
        }
    }

    fn log_failure(&self, project_list: &str, solution: &Path) {
        self.sink.log(&format!(
            "Failed to add project(s) {} to solution file {}.",
            project_list,
            solution.display()
        ));
    }

    fn log_command_output(&self, result: &CommandResult) {
        self.sink.log(&format!(
            "Command output: {}\n\n{}",
            result.stdout, result.stderr
        ));
        self.sink.log("");
    }
}

fn display_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
