// x2common - tests/e2e_stderr.rs
//
// End-to-end check of the bytes the process-wide loggers write to stderr.
//
// The test binary re-runs itself as a child with a controlled environment.
// The child half writes through the global functions; the parent half
// captures the child's stderr and compares it byte for byte.

use std::io;
use std::process::{Command, Output};
use x2common::{get_debug_logger, log_error};

// =============================================================================
// Helpers
// =============================================================================

/// Set in the child's environment; the writer test does nothing without it.
const CHILD_FLAG: &str = "X2COMMON_STDERR_CHILD";

/// Run one test of this binary in a child process with `vars` set and every
/// other logging variable removed.
fn run_child(test_name: &str, vars: &[(&str, &str)]) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    let mut cmd = Command::new(exe);
    cmd.args(["--exact", test_name, "--test-threads=1", "--nocapture"])
        .env_remove("X2_DEBUG")
        .env_remove("NODE_DEBUG")
        .env_remove("X2_LOG")
        .env_remove("RUST_LOG")
        .env(CHILD_FLAG, "1");
    for (name, value) in vars {
        cmd.env(name, value);
    }
    cmd.output().expect("spawn child test process")
}

fn child_stderr(output: &Output) -> String {
    assert!(
        output.status.success(),
        "child failed: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

// =============================================================================
// Child half
// =============================================================================

#[test]
fn child_writes_log_lines() {
    if std::env::var_os(CHILD_FLAG).is_none() {
        return;
    }
    get_debug_logger("db").log("hello");
    get_debug_logger("cache").log("not enabled");
    log_error("oops", None);
    let err = io::Error::other("disk full");
    log_error("write failed", Some(&err));
}

// =============================================================================
// Parent half
// =============================================================================

/// Enabled section and error logger, no timestamp or pid: exact bytes.
#[test]
fn e2e_stderr_exact_bytes() {
    let output = run_child(
        "child_writes_log_lines",
        &[("X2_DEBUG", "db"), ("X2_LOG", "nots,nopid")],
    );
    assert_eq!(
        child_stderr(&output),
        "DB: hello\nERROR: oops\nERROR: write failed\ndisk full\n"
    );
}

/// The pid fragment carries the child's own process id.
#[test]
fn e2e_stderr_with_pid_and_legacy_variable() {
    let output = run_child(
        "child_writes_log_lines",
        &[("NODE_DEBUG", "net,DB"), ("X2_LOG", "nots,nosec")],
    );
    let stderr = child_stderr(&output);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 4, "stderr: {stderr:?}");

    let pid = lines[0]
        .strip_suffix(": hello")
        .expect("debug line ends with the message");
    assert!(pid.parse::<u32>().is_ok(), "pid fragment: {pid:?}");
    assert_ne!(pid, std::process::id().to_string());
    assert_eq!(lines[1], format!("{pid} ERROR: oops"));
    assert_eq!(lines[2], format!("{pid} ERROR: write failed"));
    assert_eq!(lines[3], "disk full");
    assert!(stderr.ends_with('\n'));
}
