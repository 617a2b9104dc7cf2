// x2common - util/logging.rs
//
// Crate-internal diagnostics via tracing (logger construction, ignored
// option tokens). This is independent of the debug/error loggers, which
// write their own lines to stderr.
//
// Activation:
//   - Environment variable: RUST_LOG=x2common=debug
//   - Host flag: init(true, None)
//   - Explicit level: init(false, Some("info"))

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber for the crate's diagnostics.
///
/// Priority: RUST_LOG env var > `debug_flag` > `level` > default "warn".
///
/// Returns false when a global subscriber is already installed (by the host
/// application or a previous call); the existing one is left untouched.
pub fn init(debug_flag: bool, level: Option<&str>) -> bool {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Diagnostics initialised"
        );
    }
    installed
}
