//! Command-line interface definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::checker::{CheckOptions, DEFAULT_ROOT};

/// Internal documentation link checker
///
/// Scans Markdown (`[text](path)`) and AsciiDoc (`link:path[text]`) files
/// under the documentation root and reports links to files that do not exist.
/// External URLs, in-page anchors and mailto links are not checked.
///
/// Exit Codes:
///   0  - All internal links are valid
///   1  - Broken links found, or the check could not run (missing root,
///        unreadable document)
///   2  - Invalid arguments or usage error (reported by clap)
#[derive(Parser, Debug)]
#[command(name = "doclinks")]
#[command(about = "Check internal links in Markdown and AsciiDoc documentation", long_about)]
pub struct Cli {
    /// Documentation root searched recursively for .md and .adoc files
    #[arg(long, default_value = DEFAULT_ROOT, value_name = "DIR")]
    pub root: PathBuf,

    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress progress and success messages (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip documents that cannot be read instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Print the JSON Schema of the --json report payload and exit
    #[arg(long)]
    pub schema: bool,
}

impl Cli {
    /// Options for the checker, with trailing separators dropped from the root
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            root: self.root.components().collect(),
            skip_unreadable: self.skip_unreadable,
        }
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
