//! Message sink port
//!
//! Everything the action has to say - progress, success, failure detail,
//! captured command output - goes through this sink as plain formatted
//! strings. The boolean the entry points return carries no detail.

/// Trait for receiving action messages
///
/// Implementations can be:
/// - `ConsoleSink`: print to stdout
/// - `NoopSink`: silent operation
/// - recording sinks in tests
pub trait MessageSink {
    /// Handle one formatted message
    fn log(&self, message: &str);
}

/// No-op sink for silent operation
pub struct NoopSink;

impl MessageSink for NoopSink {
    fn log(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSink {
        messages: Mutex<Vec<String>>,
    }

    impl MessageSink for RecordingSink {
        fn log(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn recording_sink_captures_messages() {
        let sink = RecordingSink {
            messages: Mutex::new(Vec::new()),
        };
        sink.log("first");
        sink.log("second");
        assert_eq!(
            *sink.messages.lock().unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn noop_sink_accepts_messages() {
        NoopSink.log("dropped");
    }
}
