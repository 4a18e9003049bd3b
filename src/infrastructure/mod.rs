//! Infrastructure
//!
//! Concrete implementations of the ports: local disk listings, the
//! `dotnet` CLI, and console logging.

mod console;
mod dotnet;
mod local_fs;

pub use console::ConsoleSink;
pub use dotnet::DotnetCli;
pub use local_fs::LocalFs;
