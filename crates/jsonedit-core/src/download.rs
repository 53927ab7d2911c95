use std::path::{Path, PathBuf};

use jsonedit_common::EditorError;

/// The current buffer packaged for saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime_type: String,
    pub contents: Vec<u8>,
}

impl Download {
    /// Write the contents into `dir` under the configured file name.
    pub fn write_into(&self, dir: &Path) -> Result<PathBuf, EditorError> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.contents)?;
        tracing::info!(path = %path.display(), bytes = self.contents.len(), "download written");
        Ok(path)
    }
}
