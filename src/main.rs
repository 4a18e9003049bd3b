//! Slnlink CLI - register generated project files into the nearest solution
//!
//! Usage: slnlink <COMMAND>
//!
//! Commands:
//!   locate  Print the nearest solution file at or above a directory
//!   run     Run the add-to-solution post-action from a generation manifest

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use slnlink::cli::{Cli, Commands};
use slnlink::infrastructure::{ConsoleSink, DotnetCli, LocalFs};
use slnlink::locator::find_solution_files_at_or_above;
use slnlink::manifest::Manifest;
use slnlink::processor::AddProjectsToSolution;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Locate { output_dir } => cmd_locate(&output_dir),
        Commands::Run {
            manifest,
            output_dir,
        } => cmd_run(&manifest, &output_dir),
    }
}

fn cmd_locate(output_dir: &Path) -> Result<()> {
    let output_dir = output_dir
        .canonicalize()
        .with_context(|| format!("cannot resolve directory {}", output_dir.display()))?;

    let found = find_solution_files_at_or_above(&LocalFs::new(), &output_dir);
    match found.as_slice() {
        [solution] => {
            println!("{}", solution.display());
            Ok(())
        }
        [] => bail!("no solution file found at or above {}", output_dir.display()),
        many => bail!(
            "ambiguous: {} solution files found in {}",
            many.len(),
            many[0].parent().unwrap_or(&output_dir).display()
        ),
    }
}

fn cmd_run(manifest_path: &Path, output_dir: &Path) -> Result<()> {
    let output_dir = output_dir
        .canonicalize()
        .with_context(|| format!("cannot resolve directory {}", output_dir.display()))?;

    let (args, creation_result, effects) = Manifest::load(manifest_path)?.into_inputs();

    let fs = LocalFs::new();
    let dotnet = DotnetCli::new();
    let sink = ConsoleSink::new();
    let action = AddProjectsToSolution::new(&fs, &dotnet, &sink);

    let ok = match effects {
        Some(effects) => {
            action.process_with_effects(&args, &effects, &creation_result, &output_dir)
        }
        None => action.process(&args, &creation_result, &output_dir),
    };

    if !ok {
        // Detail already went to the sink.
        bail!("add-to-solution action failed");
    }

    Ok(())
}
