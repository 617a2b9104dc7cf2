// x2common - platform/output.rs
//
// Standard error output for log lines.

use crate::core::sink::LogSink;
use std::io::{self, Write};

/// Writes each line to the process standard error stream.
///
/// The stream is locked for the whole line so concurrent writers never
/// interleave within a line. Write failures are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, line: &str) {
        let mut handle = io::stderr().lock();
        let _ = writeln!(handle, "{line}");
    }
}
