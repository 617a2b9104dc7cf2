// x2common - core/options.rs
//
// Parsing of the log options variable (X2_LOG).
// Malformed content never fails: unknown tokens are reported as warnings
// and otherwise ignored.

use crate::util::constants;

/// Which configurable fragments a log line carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Include the ISO-8601 timestamp.
    pub timestamp: bool,

    /// Include the process id.
    pub pid: bool,

    /// Include the section name (debug loggers only).
    pub section: bool,

    /// Variables echoed on every line, in token order.
    pub env_vars: Vec<String>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            timestamp: true,
            pid: true,
            section: true,
            env_vars: Vec::new(),
        }
    }
}

impl LogOptions {
    /// Parse a comma-separated option list.
    ///
    /// Returns the options together with a list of non-fatal warnings.
    /// `None` (variable unset) yields the defaults. Flags are matched
    /// case-insensitively; `env:` names keep their case.
    pub fn parse(raw: Option<&str>) -> (Self, Vec<String>) {
        let mut options = Self::default();
        let mut warnings = Vec::new();

        let Some(raw) = raw else {
            return (options, warnings);
        };

        for token in raw.split(constants::OPT_SEPARATOR).map(str::trim) {
            if token.is_empty() {
                continue;
            }

            if let Some(name) = strip_prefix_ignore_case(token, constants::OPT_ENV_PREFIX) {
                let name = name.trim();
                if name.is_empty() {
                    warnings.push(format!(
                        "{} token \"{token}\" names no variable; ignored.",
                        constants::LOG_OPTIONS_ENV_VAR
                    ));
                } else {
                    options.env_vars.push(name.to_string());
                }
                continue;
            }

            match token.to_lowercase().as_str() {
                constants::OPT_NO_TIMESTAMP => options.timestamp = false,
                constants::OPT_NO_PID => options.pid = false,
                constants::OPT_NO_SECTION => options.section = false,
                _ => warnings.push(format!(
                    "{} token \"{token}\" is not recognised. Valid tokens: {}, {}, {}, {}<NAME>.",
                    constants::LOG_OPTIONS_ENV_VAR,
                    constants::OPT_NO_TIMESTAMP,
                    constants::OPT_NO_PID,
                    constants::OPT_NO_SECTION,
                    constants::OPT_ENV_PREFIX,
                )),
            }
        }

        (options, warnings)
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
