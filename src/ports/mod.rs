//! Ports
//!
//! Trait seams between the action's logic and the outside world: the
//! filesystem it searches, the message sink it reports through, and the
//! external solution command it invokes.

mod file_system;
mod message_sink;
mod solution_cli;

pub use file_system::{FileSystem, FsError, FsResult};
pub use message_sink::{MessageSink, NoopSink};
pub use solution_cli::SolutionCli;
