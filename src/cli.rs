use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Slnlink - register generated project files into the nearest solution
#[derive(Parser, Debug)]
#[command(name = "slnlink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the nearest solution file at or above a directory
    Locate {
        /// Directory to start the ascent from
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Run the add-to-solution post-action from a generation manifest
    Run {
        /// Path to the JSON manifest written at generation time
        #[arg(short, long)]
        manifest: PathBuf,

        /// Directory the template was generated into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}
