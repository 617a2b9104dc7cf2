// x2common - core/sink.rs
//
// Output abstraction for formatted log lines.

use std::sync::{Arc, Mutex};

/// Destination of formatted log lines.
///
/// Implementations receive one complete line per call, without the
/// terminating newline, and must not fail: the logging path never reports
/// errors to its callers.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Sink that keeps every line in memory.
///
/// Clones share the captured lines.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Remove and return all lines written so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
    }
}
