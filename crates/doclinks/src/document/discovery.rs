//! Documentation file discovery

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use super::{DocFormat, DocumentFile};
use crate::errors::CheckError;

/// Recursively collect every `.md` and `.adoc` file under `root`
///
/// Markdown files come first, then AsciiDoc files, each in walk order sorted
/// by file name. Symlinked directories are not descended into; symlinks to
/// files are included.
pub fn discover_documents(root: &Path) -> Result<Vec<DocumentFile>, CheckError> {
    if !root.is_dir() {
        return Err(CheckError::MissingRootDirectory {
            path: root.to_path_buf(),
        });
    }

    let mut markdown = Vec::new();
    let mut asciidoc = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = entry.map_err(|source| CheckError::Walk {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;

        if !entry.path().is_file() {
            continue;
        }

        if let Some(doc) = DocumentFile::from_path(entry.path()) {
            match doc.format {
                DocFormat::Markdown => markdown.push(doc),
                DocFormat::AsciiDoc => asciidoc.push(doc),
            }
        }
    }

    debug!(
        root = %root.display(),
        markdown = markdown.len(),
        asciidoc = asciidoc.len(),
        "discovered documentation files"
    );

    markdown.extend(asciidoc);
    Ok(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn paths(docs: &[DocumentFile], root: &Path) -> Vec<PathBuf> {
        docs.iter()
            .map(|d| d.path.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn test_discovers_markdown_then_asciidoc_recursively() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(root.join("guides/deep")).unwrap();
        fs::write(root.join("index.md"), "").unwrap();
        fs::write(root.join("api.adoc"), "").unwrap();
        fs::write(root.join("guides/setup.md"), "").unwrap();
        fs::write(root.join("guides/deep/notes.adoc"), "").unwrap();
        fs::write(root.join("guides/image.png"), "").unwrap();
        fs::write(root.join("README.txt"), "").unwrap();

        let docs = discover_documents(&root).unwrap();

        assert_eq!(
            paths(&docs, &root),
            vec![
                PathBuf::from("guides/setup.md"),
                PathBuf::from("index.md"),
                PathBuf::from("api.adoc"),
                PathBuf::from("guides/deep/notes.adoc"),
            ]
        );
        assert_eq!(docs[0].format, DocFormat::Markdown);
        assert_eq!(docs[3].format, DocFormat::AsciiDoc);
    }

    #[test]
    fn test_paths_keep_root_prefix() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("index.md"), "").unwrap();

        let docs = discover_documents(&root).unwrap();
        assert_eq!(docs[0].path, root.join("index.md"));
    }

    #[test]
    fn test_directory_named_like_document_is_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(root.join("chapter.md")).unwrap();
        fs::write(root.join("chapter.md/intro.md"), "").unwrap();

        let docs = discover_documents(&root).unwrap();
        assert_eq!(paths(&docs, &root), vec![PathBuf::from("chapter.md/intro.md")]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("UPPER.MD"), "").unwrap();
        fs::write(root.join("lower.md"), "").unwrap();

        let docs = discover_documents(&root).unwrap();
        assert_eq!(paths(&docs, &root), vec![PathBuf::from("lower.md")]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = discover_documents(&temp_dir.path().join("docs")).unwrap_err();
        assert!(matches!(err, CheckError::MissingRootDirectory { .. }));
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(discover_documents(temp_dir.path()).unwrap().is_empty());
    }
}
