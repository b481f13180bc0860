//! Link check report
//!
//! The report is accumulated file by file during a run and rendered once at
//! the end, either as a human-readable summary or as a JSON payload.

use schemars::JsonSchema;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

use crate::document::{LinkReference, ResolvedTarget};
use crate::output::{ExitCode, OutputContext};

/// An internal link whose target does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct BrokenLink {
    /// Document containing the link
    pub source: PathBuf,
    /// Link target exactly as written
    pub link: String,
    /// Display text of the link
    pub text: String,
    /// Absolute path that was expected to exist
    pub expected: PathBuf,
}

/// A document skipped because it could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregate result of a link check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Report {
    /// Documents read and scanned
    pub files_checked: usize,
    /// Internal links resolved across all documents
    pub links_checked: usize,
    /// Broken links in discovery order
    pub broken_links: Vec<BrokenLink>,
    /// Documents skipped with `--skip-unreadable`
    pub skipped_files: Vec<SkippedFile>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a scanned document
    pub fn record_file(&mut self) {
        self.files_checked += 1;
    }

    /// Record a document that was skipped instead of scanned
    pub fn record_skipped(&mut self, path: &Path, reason: impl Into<String>) {
        self.skipped_files.push(SkippedFile {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }

    /// Count a checked link, keeping it if its target is missing
    pub fn record_link(&mut self, source: &Path, link: &LinkReference, resolved: ResolvedTarget) {
        self.links_checked += 1;
        if !resolved.exists {
            self.broken_links.push(BrokenLink {
                source: source.to_path_buf(),
                link: link.target.clone(),
                text: link.text.clone(),
                expected: resolved.path,
            });
        }
    }

    pub fn broken_count(&self) -> usize {
        self.broken_links.len()
    }

    /// True when no broken link was found
    pub fn is_valid(&self) -> bool {
        self.broken_links.is_empty()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_valid() {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }

    /// JSON payload for `--json` output
    pub fn to_payload(&self) -> ReportPayload {
        ReportPayload {
            valid: self.is_valid(),
            summary: ReportSummary {
                files_checked: self.files_checked,
                files_skipped: self.skipped_files.len(),
                links_checked: self.links_checked,
                broken_links: self.broken_count(),
            },
            broken_links: self.broken_links.clone(),
            skipped_files: self.skipped_files.clone(),
        }
    }

    /// Print the human-readable summary
    pub fn print(&self, ctx: &OutputContext) -> io::Result<()> {
        ctx.print_data("\n📊 Results:")?;
        ctx.print_data(format!("   Files checked: {}", self.files_checked))?;
        if !self.skipped_files.is_empty() {
            ctx.print_data(format!("   Files skipped: {}", self.skipped_files.len()))?;
        }
        ctx.print_data(format!("   Links checked: {}", self.links_checked))?;
        ctx.print_data(format!("   Broken links: {}", self.broken_count()))?;

        if self.is_valid() {
            ctx.print_info("\n✅ All internal links are valid!")?;
            return Ok(());
        }

        ctx.print_data("\n⚠️  Broken Links Found:\n")?;
        for broken in &self.broken_links {
            ctx.print_data(format!("  {}", broken.source.display()))?;
            ctx.print_data(format!("    → {} ('{}')", broken.link, broken.text))?;
            ctx.print_data(format!("    Expected: {}", broken.expected.display()))?;
            ctx.print_data("")?;
        }
        Ok(())
    }
}

/// Counts reported in JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ReportSummary {
    pub files_checked: usize,
    pub files_skipped: usize,
    pub links_checked: usize,
    pub broken_links: usize,
}

/// `data` section of the `--json` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ReportPayload {
    /// True when no broken link was found
    pub valid: bool,
    pub summary: ReportSummary,
    pub broken_links: Vec<BrokenLink>,
    pub skipped_files: Vec<SkippedFile>,
}
