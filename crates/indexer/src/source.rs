use crate::error::{IndexerError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Filesystem layout of the corpus: one directory per version, holding
/// that version's markdown documents.
pub struct VersionSource {
    root: PathBuf,
}

impl VersionSource {
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Markdown files for a version, sorted by path.
    pub fn document_paths(&self, version: &str) -> Result<Vec<PathBuf>> {
        let dir = self.root.join(version);
        if !dir.is_dir() {
            return Err(IndexerError::InvalidPath(format!(
                "Not a version directory: {}",
                dir.display()
            )));
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&dir)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Document slug: the filename minus its extension.
    #[must_use]
    pub fn slug(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
