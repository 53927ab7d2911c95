//! File loading for the `load` message.

use std::path::{Path, PathBuf};

use jsonedit_common::EditorError;
use jsonedit_core::LoadTicket;

/// Maximum file size: 5 MB.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// A finished file read, waiting to be applied to the buffer.
#[derive(Debug)]
pub struct LoadDone {
    pub ticket: LoadTicket,
    pub path: PathBuf,
    pub result: Result<String, EditorError>,
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Read a regular text file of at most [`MAX_FILE_SIZE`] bytes.
pub async fn read_text_file(path: &Path) -> Result<String, EditorError> {
    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(EditorError::Other(format!(
            "not a regular file: {}",
            path.display()
        )));
    }
    if metadata.len() > MAX_FILE_SIZE {
        return Err(EditorError::Other("file too large (max 5MB)".into()));
    }
    let bytes = tokio::fs::read(path).await?;
    String::from_utf8(bytes)
        .map_err(|_| EditorError::Other(format!("not UTF-8 text: {}", path.display())))
}
