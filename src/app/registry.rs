// x2common - app/registry.rs
//
// Logger registry: memoized debug loggers keyed by normalised section, plus
// the lazily built error logger.
//
// Each logger reads its configuration exactly once, when first requested.
// The check-then-create step runs under the map lock, so concurrent first
// requests for one section build a single logger.

use crate::core::env::EnvSource;
use crate::core::logger::{DebugLogger, ErrorLogger};
use crate::core::message::MessageBuilder;
use crate::core::options::LogOptions;
use crate::core::section::{self, SectionMatcher};
use crate::core::sink::LogSink;
use crate::platform::env::ProcessEnv;
use crate::platform::output::StderrSink;
use crate::util::constants;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

pub struct LoggerRegistry {
    env: Arc<dyn EnvSource>,
    sink: Arc<dyn LogSink>,
    debug_loggers: Mutex<HashMap<String, Arc<DebugLogger>>>,
    error_logger: OnceLock<ErrorLogger>,
}

impl LoggerRegistry {
    /// Registry reading from `env` and writing to `sink`.
    pub fn new(env: impl EnvSource + 'static, sink: impl LogSink + 'static) -> Self {
        Self {
            env: Arc::new(env),
            sink: Arc::new(sink),
            debug_loggers: Mutex::new(HashMap::new()),
            error_logger: OnceLock::new(),
        }
    }

    /// Registry bound to the process environment and stderr.
    pub fn from_process() -> Self {
        Self::new(ProcessEnv, StderrSink)
    }

    /// Get the logger for `section`, building it on first request.
    ///
    /// Section names are case-insensitive. Later requests for the same
    /// section return the same handle without consulting the environment.
    pub fn debug_logger(&self, section: &str) -> Arc<DebugLogger> {
        let name = section::normalize(section);

        // Diagnostics are emitted only after the lock is released, so a
        // tracing layer may call back into the registry.
        let (logger, warnings) = {
            let mut loggers = self
                .debug_loggers
                .lock()
                .unwrap_or_else(|e| e.into_inner());

            if let Some(logger) = loggers.get(&name) {
                return Arc::clone(logger);
            }

            let (logger, warnings) = self.build_debug_logger(name.clone());
            let logger = Arc::new(logger);
            loggers.insert(name, Arc::clone(&logger));
            (logger, warnings)
        };

        report_warnings(&warnings);
        tracing::debug!(
            section = logger.section(),
            enabled = logger.is_enabled(),
            "Debug logger created"
        );
        logger
    }

    /// Number of sections requested so far.
    pub fn section_count(&self) -> usize {
        self.debug_loggers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// The shared error logger, built on first use.
    pub fn error_logger(&self) -> &ErrorLogger {
        let mut warnings = None;
        let logger = self.error_logger.get_or_init(|| {
            let (options, option_warnings) = self.read_options();
            warnings = Some(option_warnings);
            ErrorLogger::new(
                MessageBuilder::for_errors(&options),
                Arc::clone(&self.env),
                Arc::clone(&self.sink),
            )
        });

        if let Some(warnings) = warnings {
            report_warnings(&warnings);
            tracing::debug!("Error logger created");
        }
        logger
    }

    /// Log an application error.
    ///
    /// An [`X2Error`](crate::util::error::X2Error) is followed by its stack
    /// trace; any other error by its text and `source()` chain.
    pub fn log_error(&self, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.error_logger().log(message, error);
    }

    fn build_debug_logger(&self, name: String) -> (DebugLogger, Vec<String>) {
        let env = Arc::clone(&self.env);
        let sink = Arc::clone(&self.sink);

        let enabled = match SectionMatcher::new(&name) {
            Ok(matcher) => matcher.is_enabled_in(self.env.as_ref(), &constants::DEBUG_ENV_VARS),
            Err(e) => {
                let warning =
                    format!("Section \"{name}\" cannot be matched ({e}); it stays disabled.");
                return (DebugLogger::disabled(name, env, sink), vec![warning]);
            }
        };

        if !enabled {
            return (DebugLogger::disabled(name, env, sink), Vec::new());
        }

        let (options, warnings) = self.read_options();
        let builder = MessageBuilder::for_section(&options, &name);
        (DebugLogger::enabled(name, builder, env, sink), warnings)
    }

    fn read_options(&self) -> (LogOptions, Vec<String>) {
        let raw = self.env.var(constants::LOG_OPTIONS_ENV_VAR);
        LogOptions::parse(raw.as_deref())
    }
}

fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("sections", &self.section_count())
            .field("error_logger", &self.error_logger.get().is_some())
            .finish_non_exhaustive()
    }
}
