//! Output formatting for the link checker.
//!
//! Human-readable output goes through `OutputContext`, which honors `--quiet`
//! and `--json`. JSON output is wrapped in a `JsonOutput` / `JsonError`
//! envelope with metadata so automation can parse it reliably.

use chrono::Utc;
use serde::{Serialize, Serializer};
use std::cell::Cell;
use std::fmt::Display;
use std::io::{self, Write};

/// Version of the JSON output format
const OUTPUT_VERSION: &str = "0.1.0";

// ============================================================================
// Output Context for Quiet Mode
// ============================================================================

/// Context for controlling output verbosity
///
/// Once stdout reports a broken pipe, further stdout writes are dropped so the
/// caller still finishes and exits with the status of the check.
pub struct OutputContext {
    quiet: bool,
    json: bool,
    stdout_closed: Cell<bool>,
}

impl OutputContext {
    /// Create a new output context
    pub fn new(quiet: bool, json: bool) -> Self {
        Self {
            quiet,
            json,
            stdout_closed: Cell::new(false),
        }
    }

    /// Print essential output (always shown unless --json)
    pub fn print_data(&self, msg: impl Display) -> io::Result<()> {
        if !self.json {
            self.writeln_safe(&format!("{}", msg))
        } else {
            Ok(())
        }
    }

    /// Print informational message (suppressed by --quiet or --json)
    pub fn print_info(&self, msg: impl Display) -> io::Result<()> {
        if !self.quiet && !self.json {
            self.writeln_safe(&format!("{}", msg))
        } else {
            Ok(())
        }
    }

    /// Print warning (suppressed by --quiet or --json)
    pub fn print_warning(&self, msg: impl Display) -> io::Result<()> {
        if !self.quiet && !self.json {
            writeln_safe_stderr(&format!("Warning: {}", msg))
        } else {
            Ok(())
        }
    }

    /// Print a preformatted error block (always shown on stderr)
    pub fn print_error(&self, msg: impl Display) -> io::Result<()> {
        writeln_safe_stderr(&format!("{}", msg))
    }

    /// Print a JSON document on stdout (only in --json mode)
    pub fn print_json(&self, json: &str) -> io::Result<()> {
        if self.json {
            self.writeln_safe(json)
        } else {
            Ok(())
        }
    }

    /// Check if JSON mode is enabled
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Safe println that stops writing once the pipe is closed
    fn writeln_safe(&self, msg: &str) -> io::Result<()> {
        if self.stdout_closed.get() {
            return Ok(());
        }
        if !write_line(&mut io::stdout().lock(), msg)? {
            // Reader went away (e.g. piped to head)
            self.stdout_closed.set(true);
        }
        Ok(())
    }
}

/// Write one line, returning `Ok(false)` if the reader has closed the pipe
fn write_line(out: &mut impl Write, msg: &str) -> io::Result<bool> {
    match writeln!(out, "{}", msg) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e),
    }
}

/// Safe eprintln that ignores broken pipes
fn writeln_safe_stderr(msg: &str) -> io::Result<()> {
    write_line(&mut io::stderr().lock(), msg).map(|_| ())
}

// ============================================================================
// JSON Output Types
// ============================================================================

/// Wrapper for successful command output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub metadata: Metadata,
}

impl<T: Serialize> JsonOutput<T> {
    /// Create a new output with the given data.
    ///
    /// `success` mirrors whether the command exits 0, so a report with broken
    /// links is emitted with `success: false`.
    pub fn new(success: bool, data: T, command: impl Into<String>) -> Self {
        Self {
            success,
            data,
            metadata: Metadata::new(command),
        }
    }

    /// Serialize to JSON string with pretty formatting
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Wrapper for error output with suggestions
#[derive(Debug, Serialize)]
pub struct JsonError {
    pub success: bool,
    pub error: ErrorDetail,
    pub metadata: Metadata,
}

impl JsonError {
    /// Create a new error output
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                suggestions: Vec::new(),
            },
            metadata: Metadata::new(command),
        }
    }

    /// Add a suggestion to the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.error.suggestions.push(suggestion.into());
        self
    }

    /// Serialize to JSON string with pretty formatting
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Error details including code, message, and suggestions
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code (e.g., "ROOT_NOT_FOUND")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Suggested actions to resolve the error
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Response metadata
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Timestamp when the response was generated
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: chrono::DateTime<Utc>,
    /// Version of the output format
    pub version: String,
    /// Command that generated this response
    pub command: String,
}

impl Metadata {
    fn new(command: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            version: OUTPUT_VERSION.to_string(),
            command: command.into(),
        }
    }
}

/// Serialize timestamp in ISO 8601 format
fn serialize_timestamp<S>(dt: &chrono::DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the doclinks CLI
///
/// # Examples
///
/// ```rust
/// use doclinks::ExitCode;
///
/// assert_eq!(ExitCode::Success.code(), 0);
/// assert_eq!(ExitCode::Failure.code(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All internal links resolve (0)
    Success = 0,

    /// Broken links found, or the check could not run (1)
    Failure = 1,
}

impl ExitCode {
    /// Convert exit code to i32 for `std::process::exit`
    pub fn code(self) -> i32 {
        self as i32
    }
}

// ============================================================================
// Error Codes (String constants for JSON responses)
// ============================================================================

/// Error codes used in JSON error output
pub struct ErrorCode;

impl ErrorCode {
    pub const ROOT_NOT_FOUND: &'static str = "ROOT_NOT_FOUND";
    pub const UNREADABLE_FILE: &'static str = "UNREADABLE_FILE";
    pub const WALK_FAILED: &'static str = "WALK_FAILED";
    pub const WORKING_DIRECTORY: &'static str = "WORKING_DIRECTORY";
    pub const INTERNAL_ERROR: &'static str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::Failure.code(), 1);
    }

    #[test]
    fn test_json_output_envelope() {
        let output = JsonOutput::new(true, json!({"links_checked": 3}), "check");
        let parsed: Value = serde_json::from_str(&output.to_json_string().unwrap()).unwrap();

        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["data"]["links_checked"], 3);
        assert_eq!(parsed["metadata"]["command"], "check");
        assert_eq!(parsed["metadata"]["version"], OUTPUT_VERSION);
        assert!(parsed["metadata"]["timestamp"].is_string());
    }

    #[test]
    fn test_json_error_with_suggestion() {
        let err = JsonError::new(ErrorCode::ROOT_NOT_FOUND, "docs/ directory not found", "check")
            .with_suggestion("Use --root");
        let parsed: Value = serde_json::from_str(&err.to_json_string().unwrap()).unwrap();

        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["error"]["code"], "ROOT_NOT_FOUND");
        assert_eq!(parsed["error"]["suggestions"][0], "Use --root");
    }

    #[test]
    fn test_output_context_flags() {
        let ctx = OutputContext::new(true, false);
        assert!(!ctx.is_json());
        assert!(!ctx.stdout_closed.get());
        assert!(OutputContext::new(false, true).is_json());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_stdout_drops_further_output() {
        let ctx = OutputContext::new(false, false);
        ctx.stdout_closed.set(true);

        assert!(ctx.print_data("dropped").is_ok());
        assert!(ctx.print_info("dropped").is_ok());
        assert!(ctx.stdout_closed.get());
    }

    #[test]
    fn test_write_line_reports_closed_pipe_without_error() {
        assert!(!write_line(&mut ClosedPipe, "lost").unwrap());

        let mut buf = Vec::new();
        assert!(write_line(&mut buf, "kept").unwrap());
        assert_eq!(buf, b"kept\n");
    }
}
