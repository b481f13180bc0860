//! Internal link checker for Markdown and AsciiDoc documentation
//!
//! Walks a documentation root, extracts `[text](path)` and `link:path[text]`
//! references, resolves them against the directory of the file that contains
//! them, and reports the ones that point at missing files.

pub mod checker;
pub mod cli;
pub mod document;
pub mod errors;
pub mod output;
pub mod report;

// Re-export commonly used types
pub use checker::{CheckOptions, LinkChecker};
pub use document::{DocFormat, DocumentFile, LinkReference, ResolvedTarget};
pub use errors::CheckError;
pub use output::{ExitCode, JsonError, JsonOutput};
pub use report::{BrokenLink, Report};
