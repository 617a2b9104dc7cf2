// x2common - tests/e2e_errors.rs
//
// End-to-end tests for the framework error kinds, as seen from a consumer
// crate.

use x2common::util::error::Result;
use x2common::{ErrorKind, X2Error};

fn parse_limit(raw: &str) -> Result<u32> {
    if raw.is_empty() {
        return Err(X2Error::usage("limit must be provided"));
    }
    let value: i64 = raw
        .parse()
        .map_err(|_| X2Error::syntax(format!("'{raw}' is not a number")))?;
    u32::try_from(value).map_err(|_| X2Error::data(format!("limit {value} is out of range")))
}

fn describe(err: &X2Error) -> &'static str {
    match err.kind() {
        ErrorKind::Usage => "caller bug",
        ErrorKind::Syntax => "bad input text",
        ErrorKind::Data => "bad input data",
    }
}

/// Each constructor yields its own kind and keeps the message.
#[test]
fn e2e_kinds_and_messages() {
    let cases = [
        (parse_limit(""), ErrorKind::Usage, "limit must be provided"),
        (parse_limit("ten"), ErrorKind::Syntax, "'ten' is not a number"),
        (parse_limit("-1"), ErrorKind::Data, "limit -1 is out of range"),
    ];
    for (result, kind, message) in cases {
        let err = result.expect_err("expected an error");
        assert_eq!(err.kind(), kind);
        assert_eq!(err.message(), message);
        assert_eq!(err.to_string(), format!("{}: {message}", kind.name()));
    }
    assert_eq!(parse_limit("25").unwrap(), 25);
}

/// Consumers dispatch on the kind tag.
#[test]
fn e2e_dispatch_on_kind() {
    assert_eq!(describe(&X2Error::usage("x")), "caller bug");
    assert_eq!(describe(&X2Error::syntax("x")), "bad input text");
    assert_eq!(describe(&X2Error::data("x")), "bad input data");
}

/// The stack is non-empty and its first frame is the caller, not the
/// constructor.
#[test]
fn e2e_stack_points_at_caller() {
    let line = line!() + 1;
    let err = X2Error::usage("wrong call");

    assert!(err.location().file().ends_with("e2e_errors.rs"));
    assert_eq!(err.location().line(), line);

    let mut lines = err.stack().lines();
    assert_eq!(lines.next(), Some("X2UsageError: wrong call"));
    let top = lines.next().expect("stack has a caller frame");
    assert!(top.starts_with("    at "), "unexpected top frame: {top}");
    assert!(top.contains("e2e_errors.rs"), "unexpected top frame: {top}");
    assert!(!err.stack().contains("X2Error::capture"));
    assert!(!err.stack().contains("X2Error::usage"));
}

/// Errors created inside a helper point at the helper's call site.
#[test]
fn e2e_location_inside_helper() {
    let err = parse_limit("").unwrap_err();
    assert!(err.location().file().ends_with("e2e_errors.rs"));
    assert!(err.location().line() < line!());
}

/// The error type works with `?` into boxed errors.
#[test]
fn e2e_boxed_error() {
    fn run() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(X2Error::new(ErrorKind::Syntax, ""))?;
        Ok(())
    }
    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "X2SyntaxError: ");
}
