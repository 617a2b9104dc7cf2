// x2common - core/message.rs
//
// Message builder: the ordered fragment steps that make up one log line.
// The fragment list is fixed when a logger is built; the values of the
// timestamp, pid and env fragments are produced on every call.

use crate::core::env::EnvSource;
use crate::core::options::LogOptions;
use crate::util::constants;
use chrono::{DateTime, SecondsFormat, Utc};

/// One step of a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Current time, ISO-8601 UTC with milliseconds.
    Timestamp,

    /// Current process id.
    Pid,

    /// Current value of the named environment variable.
    Env(String),

    /// Fixed text (section name or label).
    Text(String),
}

impl Fragment {
    fn render(&self, env: &dyn EnvSource, now: DateTime<Utc>) -> String {
        match self {
            Self::Timestamp => now.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Pid => env.pid().to_string(),
            Self::Env(name) => env
                .var(name)
                .unwrap_or_else(|| constants::UNSET_ENV_PLACEHOLDER.to_string()),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Immutable list of fragments preceding the message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBuilder {
    fragments: Vec<Fragment>,

    /// Append the terminator to the last fragment.
    terminate_last: bool,
}

impl MessageBuilder {
    /// Fragments of a debug line: timestamp, pid, env values, section.
    /// The last one present is terminated with a colon.
    pub fn for_section(options: &LogOptions, section: &str) -> Self {
        let mut fragments = common_fragments(options);
        if options.section {
            fragments.push(Fragment::Text(section.to_string()));
        }
        Self {
            fragments,
            terminate_last: true,
        }
    }

    /// Fragments of an error line: timestamp, pid, env values, then the
    /// fixed error label.
    pub fn for_errors(options: &LogOptions) -> Self {
        let mut fragments = common_fragments(options);
        fragments.push(Fragment::Text(constants::ERROR_LABEL.to_string()));
        Self {
            fragments,
            terminate_last: false,
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Render a line for `message` at the current time.
    pub fn render(&self, env: &dyn EnvSource, message: &str) -> String {
        self.render_at(env, Utc::now(), message)
    }

    /// Render a line for `message` with an explicit clock reading.
    pub fn render_at(&self, env: &dyn EnvSource, now: DateTime<Utc>, message: &str) -> String {
        let mut parts: Vec<String> = self
            .fragments
            .iter()
            .map(|fragment| fragment.render(env, now))
            .collect();

        if self.terminate_last {
            if let Some(last) = parts.last_mut() {
                last.push(constants::FRAGMENT_TERMINATOR);
            }
        }

        parts.push(message.to_string());
        parts.join(" ")
    }
}

fn common_fragments(options: &LogOptions) -> Vec<Fragment> {
    let mut fragments = Vec::with_capacity(options.env_vars.len() + 4);
    if options.timestamp {
        fragments.push(Fragment::Timestamp);
    }
    if options.pid {
        fragments.push(Fragment::Pid);
    }
    fragments.extend(options.env_vars.iter().cloned().map(Fragment::Env));
    fragments
}
