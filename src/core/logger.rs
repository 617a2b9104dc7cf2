// x2common - core/logger.rs
//
// Debug and error logger handles. Both are immutable once built and
// safe to share across threads.

use crate::core::env::EnvSource;
use crate::core::message::MessageBuilder;
use crate::core::sink::LogSink;
use crate::util::constants;
use crate::util::error::X2Error;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Logger for one debug section.
///
/// A disabled logger ignores every message. The enabled/disabled decision
/// and the fragment list are fixed when the logger is built.
pub struct DebugLogger {
    section: String,
    builder: Option<MessageBuilder>,
    env: Arc<dyn EnvSource>,
    sink: Arc<dyn LogSink>,
}

impl DebugLogger {
    pub fn enabled(
        section: String,
        builder: MessageBuilder,
        env: Arc<dyn EnvSource>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            section,
            builder: Some(builder),
            env,
            sink,
        }
    }

    pub fn disabled(section: String, env: Arc<dyn EnvSource>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            section,
            builder: None,
            env,
            sink,
        }
    }

    /// Normalised (uppercase) section name.
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn is_enabled(&self) -> bool {
        self.builder.is_some()
    }

    /// The line `log` would write, or `None` when disabled.
    pub fn format(&self, message: &str) -> Option<String> {
        self.builder
            .as_ref()
            .map(|builder| builder.render(self.env.as_ref(), message))
    }

    /// Write `message` as one line if the section is enabled.
    pub fn log(&self, message: impl AsRef<str>) {
        if let Some(line) = self.format(message.as_ref()) {
            self.sink.write_line(&line);
        }
    }
}

impl fmt::Debug for DebugLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugLogger")
            .field("section", &self.section)
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

/// Always-active logger for application errors.
pub struct ErrorLogger {
    builder: MessageBuilder,
    env: Arc<dyn EnvSource>,
    sink: Arc<dyn LogSink>,
}

impl ErrorLogger {
    pub fn new(builder: MessageBuilder, env: Arc<dyn EnvSource>, sink: Arc<dyn LogSink>) -> Self {
        Self { builder, env, sink }
    }

    /// The text `log` would write. With an error, its description follows
    /// the message on a new line: the stack trace for an [`X2Error`],
    /// otherwise the error text and its `source()` chain, one per line.
    pub fn format(&self, message: &str, error: Option<&(dyn Error + 'static)>) -> String {
        let body = match error {
            Some(err) => format!("{message}\n{}", describe_error(err)),
            None => message.to_string(),
        };
        self.builder.render(self.env.as_ref(), &body)
    }

    pub fn log(&self, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.sink.write_line(&self.format(message, error));
    }
}

fn describe_error(err: &(dyn Error + 'static)) -> String {
    if let Some(x2) = err.downcast_ref::<X2Error>() {
        return x2.stack().to_string();
    }

    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(constants::CAUSE_PREFIX);
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

impl fmt::Debug for ErrorLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorLogger")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

/// Log a formatted message through a [`DebugLogger`], formatting only when
/// the section is enabled.
///
/// ```
/// use x2common::{get_debug_logger, x2_debug};
///
/// let log = get_debug_logger("docs");
/// x2_debug!(log, "loaded {} records", 3);
/// ```
#[macro_export]
macro_rules! x2_debug {
    ($logger:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.log(::std::format!($($arg)+));
        }
    }};
}
