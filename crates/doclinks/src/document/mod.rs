//! Documentation files and the links found in them
//!
//! Format-specific link extraction lives in adapter implementations, so the
//! checker treats Markdown and AsciiDoc the same way once a file is read.

mod adapter;
mod discovery;
mod resolver;

pub use adapter::{
    extract_links, AdapterRegistry, AsciiDocAdapter, DocFormatAdapter, MarkdownAdapter,
    EXCLUDED_PREFIXES,
};
pub use discovery::discover_documents;
pub use resolver::{normalize_path, resolve_link, LinkResolver};

use std::path::{Path, PathBuf};

/// Documentation format, determined by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocFormat {
    Markdown,
    AsciiDoc,
}

impl DocFormat {
    /// Format for a path, by exact (case-sensitive) extension match
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "md" => Some(DocFormat::Markdown),
            "adoc" => Some(DocFormat::AsciiDoc),
            _ => None,
        }
    }
}

/// A discovered `.md` or `.adoc` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub path: PathBuf,
    pub format: DocFormat,
}

impl DocumentFile {
    /// Tag a path with its format, or `None` if it is not a documentation file
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let format = DocFormat::from_path(&path)?;
        Some(Self { path, format })
    }

    /// Directory the file's links are resolved against
    pub fn parent_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }
}

/// An internal link found in a document
///
/// The target never starts with one of [`EXCLUDED_PREFIXES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    /// Target exactly as written
    pub target: String,
    /// Display text
    pub text: String,
}

/// A link target resolved against its source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Absolute, lexically normalized path
    pub path: PathBuf,
    pub exists: bool,
}
