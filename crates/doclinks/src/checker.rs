//! Link check orchestration
//!
//! Drives discovery, extraction and resolution over a documentation root and
//! accumulates the results into a [`Report`]. Files are processed one at a
//! time; each is read fully before the next is opened.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::document::{discover_documents, AdapterRegistry, DocumentFile, LinkResolver};
use crate::errors::CheckError;
use crate::report::Report;

/// Default documentation root, relative to the working directory
pub const DEFAULT_ROOT: &str = "docs";

/// Options for a link check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Documentation root searched recursively
    pub root: PathBuf,
    /// Skip documents that cannot be read instead of aborting the run
    pub skip_unreadable: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            skip_unreadable: false,
        }
    }
}

/// Checks internal links of every document under a root directory
pub struct LinkChecker {
    options: CheckOptions,
    resolver: LinkResolver,
    registry: AdapterRegistry,
}

impl LinkChecker {
    /// Create a checker that resolves paths against the working directory
    pub fn new(options: CheckOptions) -> Result<Self, CheckError> {
        Ok(Self::with_resolver(options, LinkResolver::from_current_dir()?))
    }

    /// Create a checker with an explicit resolver
    pub fn with_resolver(options: CheckOptions, resolver: LinkResolver) -> Self {
        Self {
            options,
            resolver,
            registry: AdapterRegistry::with_builtins(),
        }
    }

    /// Documentation root as it would be resolved for this run
    fn root_path(&self) -> PathBuf {
        self.resolver.base_dir().join(&self.options.root)
    }

    /// List the documents to check
    ///
    /// Fails with `MissingRootDirectory` before touching anything else when
    /// the root does not exist. Returned paths keep the configured root as
    /// their prefix, so a relative root yields relative document paths.
    pub fn discover(&self) -> Result<Vec<DocumentFile>, CheckError> {
        let root = self.root_path();
        if !root.is_dir() {
            return Err(CheckError::MissingRootDirectory {
                path: self.options.root.clone(),
            });
        }

        let docs = discover_documents(&root)?;
        let base = self.resolver.base_dir();
        Ok(docs
            .into_iter()
            .map(|doc| DocumentFile {
                path: match doc.path.strip_prefix(base) {
                    Ok(relative) if self.options.root.is_relative() => relative.to_path_buf(),
                    _ => doc.path,
                },
                format: doc.format,
            })
            .collect())
    }

    /// Check every link in `docs` and build the report
    pub fn check(&self, docs: &[DocumentFile]) -> Result<Report, CheckError> {
        let mut report = Report::new();

        for doc in docs {
            let content = match fs::read_to_string(self.resolver.base_dir().join(&doc.path)) {
                Ok(content) => content,
                Err(source) if self.options.skip_unreadable => {
                    debug!(path = %doc.path.display(), error = %source, "skipping unreadable document");
                    report.record_skipped(&doc.path, source.to_string());
                    continue;
                }
                Err(source) => {
                    return Err(CheckError::UnreadableFile {
                        path: doc.path.clone(),
                        source,
                    });
                }
            };

            report.record_file();

            let Some(adapter) = self.registry.for_format(doc.format) else {
                continue;
            };
            let links = adapter.extract_links(&content);
            debug!(
                path = %doc.path.display(),
                format = adapter.id(),
                links = links.len(),
                "scanned document"
            );

            for link in &links {
                let resolved = self.resolver.resolve(doc, &link.target);
                report.record_link(&doc.path, link, resolved);
            }
        }

        Ok(report)
    }

    /// Discover and check in one pass
    pub fn run(&self) -> Result<Report, CheckError> {
        let docs = self.discover()?;
        self.check(&docs)
    }
}
