use std::path::PathBuf;

use jsonedit_common::PlatformError;

/// Where the download action saves files.
///
/// The user's download directory when the platform has one, otherwise the
/// current working directory.
pub fn download_dir() -> Result<PathBuf, PlatformError> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    std::env::current_dir().map_err(|e| PlatformError::PathError(e.to_string()))
}
