//! Error types and actionable error formatting.
//!
//! `CheckError` covers the failures that abort a run. Broken links are not
//! errors; they are collected in the [`Report`](crate::report::Report).
//!
//! `ActionableError` renders a fatal error with possible causes and
//! remediation steps so users can tell what went wrong and how to fix it.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::output::{ErrorCode, ExitCode};

/// Errors that stop a link check before a report is produced
#[derive(Debug, Error)]
pub enum CheckError {
    /// The documentation root does not exist
    #[error("{}/ directory not found", .path.display())]
    MissingRootDirectory { path: PathBuf },

    /// A discovered document could not be read as UTF-8 text
    #[error("Failed to read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory walk failed below the documentation root
    #[error("Failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The process working directory could not be determined
    #[error("Cannot determine the working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    /// Exit code the CLI reports for this error
    ///
    /// Every fatal error exits 1, the same status as a broken link; the JSON
    /// error code tells the cases apart.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CheckError::MissingRootDirectory { .. }
            | CheckError::UnreadableFile { .. }
            | CheckError::Walk { .. }
            | CheckError::WorkingDirectory { .. } => ExitCode::Failure,
        }
    }

    /// Error code used in JSON error output
    pub fn error_code(&self) -> &'static str {
        match self {
            CheckError::MissingRootDirectory { .. } => ErrorCode::ROOT_NOT_FOUND,
            CheckError::UnreadableFile { .. } => ErrorCode::UNREADABLE_FILE,
            CheckError::Walk { .. } => ErrorCode::WALK_FAILED,
            CheckError::WorkingDirectory { .. } => ErrorCode::WORKING_DIRECTORY,
        }
    }

    /// Convert into a user-facing error with causes and remedies
    pub fn to_actionable(&self) -> ActionableError {
        match self {
            CheckError::MissingRootDirectory { path } => root_not_found(path),
            CheckError::UnreadableFile { path, source } => unreadable_file(path, source),
            CheckError::Walk { path, source } => walk_failed(path, source),
            CheckError::WorkingDirectory { source } => {
                ActionableError::new("Cannot determine the working directory")
                    .with_cause(format!("I/O error: {}", source))
                    .with_cause("The current directory may have been removed")
                    .with_remedy("Change into an existing directory and run the checker again")
            }
        }
    }
}

/// An error with diagnostic context and remediation steps.
///
/// # Example
///
/// ```
/// use doclinks::errors::ActionableError;
///
/// let error = ActionableError::new("docs/ directory not found")
///     .with_cause("The command was run outside the project root")
///     .with_remedy("Point the checker at another directory: doclinks --root <DIR>");
///
/// assert!(error.to_string().contains("To fix:"));
/// ```
#[derive(Debug, Clone)]
pub struct ActionableError {
    /// The main error message
    error: String,
    /// Possible causes (diagnostic hints)
    causes: Vec<String>,
    /// Remediation steps (how to fix)
    remediation: Vec<String>,
}

impl ActionableError {
    /// Create a new actionable error with the given message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            causes: Vec::new(),
            remediation: Vec::new(),
        }
    }

    /// Add a possible cause (diagnostic hint).
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Add a remediation step (actionable fix).
    pub fn with_remedy(mut self, remedy: impl Into<String>) -> Self {
        self.remediation.push(remedy.into());
        self
    }

    /// Remediation steps in the order they were added.
    pub fn remedies(&self) -> &[String] {
        &self.remediation
    }

    /// Convert to a formatted error message suitable for display.
    pub fn to_error_message(&self) -> String {
        let mut msg = format!("Error: {}\n", self.error);

        if !self.causes.is_empty() {
            msg.push_str("\nPossible causes:\n");
            for cause in &self.causes {
                msg.push_str(&format!("  • {}\n", cause));
            }
        }

        if !self.remediation.is_empty() {
            msg.push_str("\nTo fix:\n");
            for remedy in &self.remediation {
                msg.push_str(&format!("  • {}\n", remedy));
            }
        }

        msg
    }
}

impl fmt::Display for ActionableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_error_message())
    }
}

impl std::error::Error for ActionableError {}

/// Helper for a missing documentation root.
pub fn root_not_found(root: &Path) -> ActionableError {
    ActionableError::new(format!("{}/ directory not found", root.display()))
        .with_cause("The command was run outside the project root")
        .with_cause("The documentation lives under a different directory name")
        .with_remedy("Run the checker from the directory that contains the docs folder")
        .with_remedy("Point the checker at the right directory: doclinks --root <DIR>")
}

/// Helper for a document that cannot be read as text.
pub fn unreadable_file(path: &Path, source: &io::Error) -> ActionableError {
    ActionableError::new(format!("Cannot read {}", path.display()))
        .with_cause(format!("I/O error: {}", source))
        .with_cause("The file may not be valid UTF-8")
        .with_cause("The file permissions may not allow reading")
        .with_remedy(format!("Check the file permissions: ls -l {}", path.display()))
        .with_remedy("Skip unreadable documents with a warning: doclinks --skip-unreadable")
}

/// Helper for a failed directory walk.
pub fn walk_failed(path: &Path, source: &walkdir::Error) -> ActionableError {
    ActionableError::new(format!("Cannot list {}", path.display()))
        .with_cause(format!("Walk error: {}", source))
        .with_cause("A directory permission may not allow listing")
        .with_cause("A symlink loop may exist below the documentation root")
        .with_remedy(format!("Check the directory permissions: ls -ld {}", path.display()))
}
