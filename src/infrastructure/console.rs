//! Console message sink

use crate::ports::MessageSink;

/// Sink that prints every message to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for ConsoleSink {
    fn log(&self, message: &str) {
        println!("{message}");
    }
}
