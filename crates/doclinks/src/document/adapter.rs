//! Document format adapter trait and registry
//!
//! Each format (Markdown, AsciiDoc) implements `DocFormatAdapter` to extract
//! its link syntax from raw text. Extraction is plain pattern matching over the
//! whole content; no document parsing is involved.

use regex::Regex;
use std::sync::LazyLock;

use super::{DocFormat, LinkReference};

/// Target prefixes that mark a link as external or non-checkable
pub const EXCLUDED_PREFIXES: [&str; 4] = ["http://", "https://", "#", "mailto:"];

/// Markdown inline link: `[text](target)`
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid markdown link pattern"));

/// AsciiDoc link macro: `link:target[text]`
static ASCIIDOC_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"link:([^\[]+)\[([^\]]+)\]").expect("valid asciidoc link pattern"));

fn is_internal(target: &str) -> bool {
    !EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

/// Trait for document format adapters
///
/// # Example
///
/// ```
/// use doclinks::document::{DocFormatAdapter, MarkdownAdapter};
///
/// let adapter = MarkdownAdapter;
/// assert_eq!(adapter.id(), "markdown");
///
/// let links = adapter.extract_links("See [Guide](guide.md).");
/// assert_eq!(links[0].target, "guide.md");
/// ```
pub trait DocFormatAdapter {
    /// Returns the adapter identifier (e.g., "markdown", "asciidoc")
    fn id(&self) -> &str;

    /// Format handled by this adapter
    fn format(&self) -> DocFormat;

    /// Extract internal link references from document content
    ///
    /// Returns every occurrence in source order, duplicates included.
    /// Targets starting with one of [`EXCLUDED_PREFIXES`] are dropped.
    fn extract_links(&self, content: &str) -> Vec<LinkReference>;
}

/// Markdown format adapter
///
/// Matches `[text](target)`. Image syntax `![alt](target)` contains the same
/// shape and is picked up as well. Fragments are kept as part of the target.
pub struct MarkdownAdapter;

impl DocFormatAdapter for MarkdownAdapter {
    fn id(&self) -> &str {
        "markdown"
    }

    fn format(&self) -> DocFormat {
        DocFormat::Markdown
    }

    fn extract_links(&self, content: &str) -> Vec<LinkReference> {
        MARKDOWN_LINK
            .captures_iter(content)
            .map(|cap| LinkReference {
                text: cap[1].to_string(),
                target: cap[2].to_string(),
            })
            .filter(|link| is_internal(&link.target))
            .collect()
    }
}

/// AsciiDoc format adapter
///
/// Matches the `link:target[text]` macro. Bare `xref:` and `<<id>>`
/// cross-references are not recognized.
pub struct AsciiDocAdapter;

impl DocFormatAdapter for AsciiDocAdapter {
    fn id(&self) -> &str {
        "asciidoc"
    }

    fn format(&self) -> DocFormat {
        DocFormat::AsciiDoc
    }

    fn extract_links(&self, content: &str) -> Vec<LinkReference> {
        ASCIIDOC_LINK
            .captures_iter(content)
            .map(|cap| LinkReference {
                target: cap[1].to_string(),
                text: cap[2].to_string(),
            })
            .filter(|link| is_internal(&link.target))
            .collect()
    }
}

/// Extract internal links from content of the given format
pub fn extract_links(content: &str, format: DocFormat) -> Vec<LinkReference> {
    match format {
        DocFormat::Markdown => MarkdownAdapter.extract_links(content),
        DocFormat::AsciiDoc => AsciiDocAdapter.extract_links(content),
    }
}

/// Registry for managing document format adapters
///
/// # Example
///
/// ```
/// use doclinks::document::AdapterRegistry;
/// use doclinks::DocFormat;
///
/// let registry = AdapterRegistry::with_builtins();
/// let adapter = registry.for_format(DocFormat::AsciiDoc).unwrap();
/// assert_eq!(adapter.id(), "asciidoc");
/// ```
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn DocFormatAdapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Create a registry with the Markdown and AsciiDoc adapters registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MarkdownAdapter));
        registry.register(Box::new(AsciiDocAdapter));
        registry
    }

    /// Register a format adapter
    pub fn register(&mut self, adapter: Box<dyn DocFormatAdapter>) {
        self.adapters.push(adapter);
    }

    /// Adapter registered for a format
    pub fn for_format(&self, format: DocFormat) -> Option<&dyn DocFormatAdapter> {
        self.adapters
            .iter()
            .find(|adapter| adapter.format() == format)
            .map(|adapter| adapter.as_ref())
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
