// x2common - util/constants.rs
//
// Single source of truth for environment variable names, option tokens
// and output labels.

// =============================================================================
// Crate metadata
// =============================================================================

/// Crate display name, used in diagnostics.
pub const APP_NAME: &str = "x2common";

/// Current crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Environment variables
// =============================================================================

/// Enabled debug sections (current form).
pub const DEBUG_ENV_VAR: &str = "X2_DEBUG";

/// Enabled debug sections (legacy form, still honoured).
pub const LEGACY_DEBUG_ENV_VAR: &str = "NODE_DEBUG";

/// All variables consulted when deciding whether a section is enabled.
pub const DEBUG_ENV_VARS: [&str; 2] = [DEBUG_ENV_VAR, LEGACY_DEBUG_ENV_VAR];

/// Comma-separated log line options.
pub const LOG_OPTIONS_ENV_VAR: &str = "X2_LOG";

// =============================================================================
// Log option tokens
// =============================================================================

/// Suppress the timestamp fragment.
pub const OPT_NO_TIMESTAMP: &str = "nots";

/// Suppress the process id fragment.
pub const OPT_NO_PID: &str = "nopid";

/// Suppress the section name fragment.
pub const OPT_NO_SECTION: &str = "nosec";

/// Prefix of the `env:<NAME>` token.
pub const OPT_ENV_PREFIX: &str = "env:";

/// Separator between option tokens.
pub const OPT_SEPARATOR: char = ',';

// =============================================================================
// Output
// =============================================================================

/// Label fragment that precedes every error logger message.
pub const ERROR_LABEL: &str = "ERROR:";

/// Prefix of each `source()` line when logging a non-framework error.
pub const CAUSE_PREFIX: &str = "Caused by: ";

/// Appended to the last configured fragment of a debug line.
pub const FRAGMENT_TERMINATOR: char = ':';

/// Rendered in place of an `env:<NAME>` value when the variable is unset.
pub const UNSET_ENV_PLACEHOLDER: &str = "-";

/// Default level for the crate's own tracing diagnostics.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
