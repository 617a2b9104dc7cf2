// x2common - app/global.rs
//
// Process-wide registry behind the free functions. Created on first use,
// lives until process exit.

use crate::app::registry::LoggerRegistry;
use crate::core::logger::DebugLogger;
use std::error::Error;
use std::sync::{Arc, OnceLock};

static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide registry (process environment, stderr output).
pub fn registry() -> &'static LoggerRegistry {
    REGISTRY.get_or_init(LoggerRegistry::from_process)
}

/// Get the debug logger for `section`.
///
/// Enabled when the section appears as a whole word, case-insensitively, in
/// `X2_DEBUG` or `NODE_DEBUG` at the time of the first request for it. Line
/// fragments are controlled by `X2_LOG` (`nots`, `nopid`, `nosec`,
/// `env:<NAME>`).
pub fn get_debug_logger(section: &str) -> Arc<DebugLogger> {
    registry().debug_logger(section)
}

/// Log an application error to stderr.
///
/// A framework error is followed by its stack trace, any other error by its
/// text and `source()` chain.
pub fn log_error(message: &str, error: Option<&(dyn Error + 'static)>) {
    registry().log_error(message, error);
}
