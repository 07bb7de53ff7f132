//! Flat directory listing that feeds prompt files to the scorer.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::scoring::Document;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("prompt directory {} is not readable: {source}", path.display())]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Regular files in one directory whose extension matches, in file-name order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, extension: impl AsRef<str>) -> Self {
        Self {
            root: root.into(),
            extension: extension.as_ref().trim_start_matches('.').to_string(),
        }
    }

    pub fn discover(&self) -> Result<Vec<PathBuf>, SourceError> {
        let directory_error = |source| SourceError::Directory {
            path: self.root.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(directory_error)? {
            let path = entry.map_err(directory_error)?.path();
            if path.is_file() && self.matches_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort_by(|left, right| left.file_name().cmp(&right.file_name()));
        Ok(paths)
    }

    /// Reads every discovered file. Files that fail to read become
    /// unreadable documents rather than errors.
    pub fn load(&self) -> Result<Vec<Document>, SourceError> {
        let paths = self.discover()?;
        info!(
            directory = %self.root.display(),
            extension = %self.extension,
            count = paths.len(),
            "prompt documents discovered"
        );
        Ok(paths.iter().map(|path| read_document(path)).collect())
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

fn read_document(path: &Path) -> Document {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match std::fs::read_to_string(path) {
        Ok(text) => Document::new(name, text),
        Err(err) => Document::unreadable(name, err.to_string()),
    }
}
