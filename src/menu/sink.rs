//! Diagnostic sink capability
//!
//! The menu component does not log through an ambient registry; whoever
//! constructs a `MenuState` passes the sink in explicitly. The default
//! example action is the only built-in consumer.

use parking_lot::Mutex;
use std::sync::Arc;

/// Logging capability injected into the menu component.
///
/// Only `debug` is required; the component has no other diagnostic output
/// of its own.
pub trait DiagnosticSink: Send + Sync {
    /// Emit a debug-level diagnostic message.
    fn debug(&self, message: &str);
}

/// Sink that forwards to the `tracing` ecosystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing-backed sink behind an `Arc`, ready for injection.
    pub fn shared() -> Arc<dyn DiagnosticSink> {
        Arc::new(TracingSink)
    }
}

impl DiagnosticSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "popmenu", "{message}");
    }
}

/// Sink that records every message, for test suites (this crate's and
/// embedders').
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recording sink behind an `Arc`.
    pub fn shared() -> Arc<RecordingSink> {
        Arc::new(RecordingSink::default())
    }

    /// Snapshot of all messages recorded so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Number of messages recorded so far.
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn debug(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
