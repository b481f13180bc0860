//! Link target resolution
//!
//! Targets resolve against the directory of the document that contains them.
//! A leading `/` does not make a target filesystem-absolute: it is stripped and
//! the rest is still joined onto the source directory.

use std::path::{Component, Path, PathBuf};
use tracing::trace;

use super::{DocumentFile, ResolvedTarget};
use crate::errors::CheckError;

/// Resolves link targets to absolute paths and checks that they exist
#[derive(Debug, Clone)]
pub struct LinkResolver {
    base_dir: PathBuf,
}

impl LinkResolver {
    /// Create a resolver that anchors relative document paths at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a resolver anchored at the process working directory
    pub fn from_current_dir() -> Result<Self, CheckError> {
        let base_dir =
            std::env::current_dir().map_err(|source| CheckError::WorkingDirectory { source })?;
        Ok(Self::new(base_dir))
    }

    /// Directory relative document paths are anchored at
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve `target` as written in `doc`
    pub fn resolve(&self, doc: &DocumentFile, target: &str) -> ResolvedTarget {
        let path = resolve_link(&self.base_dir, doc.parent_dir(), target);
        let exists = path.exists();
        trace!(link = target, resolved = %path.display(), exists, "resolved link");
        ResolvedTarget { path, exists }
    }
}

/// Compute the absolute, normalized path a link target points at
///
/// The target is joined onto `source_dir`, the directory of the document
/// containing the link; a relative result is anchored at `base_dir`. No
/// filesystem access happens here.
///
/// Normalization is lexical: `..` removes the previous path component without
/// following symlinks. If `docs/alias` is a symlink to `/elsewhere/dir`, then
/// `alias/../x.md` resolves to `docs/x.md`, while a resolver that canonicalizes
/// first (as `realpath` does) would land on `/elsewhere/x.md`.
pub fn resolve_link(base_dir: &Path, source_dir: &Path, target: &str) -> PathBuf {
    let joined = source_dir.join(target.trim_start_matches('/'));
    let absolute = if joined.is_absolute() {
        joined
    } else {
        base_dir.join(joined)
    };
    normalize_path(&absolute)
}

/// Normalize a path by resolving `.` and `..` lexically
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component.as_os_str());
            }
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
        }
    }
    normalized
}
