// x2common - platform/env.rs
//
// The real process environment.

use crate::core::env::EnvSource;

/// Reads variables from the running process.
///
/// Non-UTF-8 values are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn pid(&self) -> u32 {
        std::process::id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_env_reads_real_values() {
        assert_eq!(ProcessEnv.pid(), std::process::id());
        assert_eq!(ProcessEnv.var("X2COMMON_SURELY_UNSET_VARIABLE"), None);
        assert!(ProcessEnv.var("PATH").is_some() || std::env::var_os("PATH").is_none());
    }
}
