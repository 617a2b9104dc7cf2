// x2common - lib.rs
//
// Shared utilities for x2 framework components: the framework error kinds
// and the environment-driven debug/error loggers.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::app::global::{get_debug_logger, log_error};
pub use crate::app::registry::LoggerRegistry;
pub use crate::core::logger::{DebugLogger, ErrorLogger};
pub use crate::util::error::{ErrorKind, X2Error};
