// x2common - core/env.rs
//
// Environment abstraction. Loggers read configuration and live fragment
// values through `EnvSource` so they can be driven without touching the
// real process environment.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Source of environment variables and the process id.
pub trait EnvSource: Send + Sync {
    /// Value of the variable `name`, or `None` when it is unset or not
    /// valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;

    /// Identifier of the current process.
    fn pid(&self) -> u32;
}

/// In-memory environment.
///
/// Clones share the same variable table, so a test can keep a handle and
/// change variables after a logger has been built from it.
#[derive(Debug, Clone)]
pub struct MapEnv {
    vars: Arc<RwLock<HashMap<String, String>>>,
    pid: u32,
}

impl MapEnv {
    /// Empty environment reporting the real process id.
    pub fn new() -> Self {
        Self::with_pid(std::process::id())
    }

    /// Empty environment reporting a fixed process id.
    pub fn with_pid(pid: u32) -> Self {
        Self {
            vars: Arc::new(RwLock::new(HashMap::new())),
            pid,
        }
    }

    /// Builder-style variant of [`MapEnv::set`].
    pub fn with_var(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: &str, value: &str) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.remove(name);
    }
}

impl Default for MapEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        let vars = self.vars.read().unwrap_or_else(|e| e.into_inner());
        vars.get(name).cloned()
    }

    fn pid(&self) -> u32 {
        self.pid
    }
}
