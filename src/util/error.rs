// x2common - util/error.rs
//
// Framework error kinds shared by every x2 component.
// One closed set of kinds; each error carries the caller's location and a
// stack trace captured at construction.

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::sync::{Arc, OnceLock};

/// Symbol fragments identifying constructor frames in a rendered backtrace
/// (legacy and v0 symbol demangling).
const CONSTRUCTOR_FRAME_MARKERS: [&str; 2] = ["X2Error::", "X2Error>::"];

/// The category of a framework error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid arguments or inappropriate invocation of framework
    /// functionality. A programmer error in how the framework is used.
    Usage,

    /// Malformed input text supplied by a caller, such as an invalid query
    /// or expression.
    Syntax,

    /// Structurally valid but semantically invalid or inconsistent data.
    Data,
}

impl ErrorKind {
    /// Name of the kind as shown in rendered errors and stack traces.
    pub fn name(self) -> &'static str {
        match self {
            Self::Usage => "X2UsageError",
            Self::Syntax => "X2SyntaxError",
            Self::Data => "X2DataError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A framework error: kind tag, message, and the stack at the point the
/// error was created.
///
/// Construct with [`X2Error::usage`], [`X2Error::syntax`], [`X2Error::data`]
/// or [`X2Error::new`]. The recorded location and the first frame of
/// [`X2Error::stack`] refer to the code that called the constructor.
#[derive(Debug, Clone)]
pub struct X2Error {
    kind: ErrorKind,
    message: String,
    location: &'static Location<'static>,
    backtrace: Arc<Backtrace>,
    stack: OnceLock<String>,
}

impl X2Error {
    /// Create an error of the given kind. Any message is accepted.
    #[track_caller]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::capture(kind, message.into())
    }

    /// Create a usage error.
    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::capture(ErrorKind::Usage, message.into())
    }

    /// Create a syntax error.
    #[track_caller]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::capture(ErrorKind::Syntax, message.into())
    }

    /// Create a data error.
    #[track_caller]
    pub fn data(message: impl Into<String>) -> Self {
        Self::capture(ErrorKind::Data, message.into())
    }

    #[track_caller]
    #[inline(never)]
    fn capture(kind: ErrorKind, message: String) -> Self {
        Self {
            kind,
            message,
            location: Location::caller(),
            backtrace: Arc::new(Backtrace::force_capture()),
            stack: OnceLock::new(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location of the constructor call.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Rendered stack trace.
    ///
    /// The first line is `<Name>: <message>`, the second `    at <location>`
    /// of the caller, followed by the remaining captured frames (when the
    /// platform supports backtraces). Symbols are resolved on the first
    /// call only.
    pub fn stack(&self) -> &str {
        self.stack.get_or_init(|| {
            let frames = caller_frames(&self.backtrace.to_string());
            let mut stack = format!("{}: {}\n    at {}", self.kind, self.message, self.location);
            if !frames.is_empty() {
                stack.push('\n');
                stack.push_str(&frames);
            }
            stack
        })
    }
}

impl fmt::Display for X2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for X2Error {}

/// Convenience type alias for results carrying a framework error.
pub type Result<T> = std::result::Result<T, X2Error>;

/// Drop every symbol up to and including the last constructor symbol.
///
/// Inlined functions appear as extra symbol lines within one numbered
/// frame, so trimming works per symbol rather than per frame. Returns an
/// empty string when the text holds no frames at all (disabled or
/// unsupported backtraces). When no constructor symbol can be identified
/// (stripped symbols) everything is kept.
fn caller_frames(rendered: &str) -> String {
    if !rendered.lines().any(is_frame_header) {
        return String::new();
    }

    let mut symbols: Vec<Vec<&str>> = Vec::new();
    for line in rendered.lines() {
        let is_location = line.trim_start().starts_with("at ");
        match symbols.last_mut() {
            Some(symbol) if is_location => symbol.push(line),
            _ => symbols.push(vec![line]),
        }
    }

    let start = symbols
        .iter()
        .rposition(|symbol| {
            CONSTRUCTOR_FRAME_MARKERS
                .iter()
                .any(|marker| symbol[0].contains(marker))
        })
        .map_or(0, |idx| idx + 1);

    symbols[start..]
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Frame headers look like `  12: some::symbol`.
fn is_frame_header(line: &str) -> bool {
    let trimmed = line.trim_start();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && trimmed[digits..].starts_with(": ")
}
