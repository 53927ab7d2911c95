use serde::{Deserialize, Serialize};

/// How the download action names and types its output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Bare file name, no directory components.
    pub filename: String,
    pub mime_type: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            filename: "data.json".into(),
            mime_type: "application/json".into(),
        }
    }
}
